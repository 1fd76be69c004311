use dotenvy::dotenv;
use health_gateway::config::GatewayConfig;
use health_gateway::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    init_tracing("health-gateway", "info");

    let config = GatewayConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::from(e)
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::from(e)
    })?;

    app.run_until_stopped().await
}
