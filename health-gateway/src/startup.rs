//! Application startup and lifecycle management.

use crate::config::GatewayConfig;
use crate::handlers::{get_ai_response, health_check, liveness, send_chat};
use crate::services::{EmailProvider, GeminiTextProvider, SmtpProvider, TextProvider};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    request_id_middleware, security_headers_middleware, REQUEST_ID_HEADER,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// A provider is `None` when its credentials were not configured; the
/// matching handler then answers 500 instead of calling out.
#[derive(Clone, Default)]
pub struct AppState {
    pub text_provider: Option<Arc<dyn TextProvider>>,
    pub email_provider: Option<Arc<dyn EmailProvider>>,
}

impl AppState {
    pub fn from_config(config: &GatewayConfig) -> Self {
        let text_provider: Option<Arc<dyn TextProvider>> = match &config.gemini.api_key {
            Some(api_key) => match GeminiTextProvider::new(
                api_key.clone(),
                config.gemini.model.clone(),
                config.gemini.api_base.clone(),
            ) {
                Ok(provider) => {
                    tracing::info!(model = %config.gemini.model, "Gemini text provider initialized");
                    Some(Arc::new(provider))
                }
                Err(e) => {
                    tracing::error!("Failed to initialize Gemini provider: {}", e);
                    None
                }
            },
            None => {
                tracing::warn!("GEMINI_API_KEY not set, AI responses are disabled");
                None
            }
        };

        let email_provider: Option<Arc<dyn EmailProvider>> = match &config.smtp.credentials {
            Some(credentials) => match SmtpProvider::new(&config.smtp, credentials) {
                Ok(provider) => {
                    tracing::info!(host = %config.smtp.host, "SMTP email provider initialized");
                    Some(Arc::new(provider))
                }
                Err(e) => {
                    tracing::error!("Failed to initialize SMTP provider: {}", e);
                    None
                }
            },
            None => {
                tracing::warn!("EMAIL_USER or EMAIL_PASS not set, transcript email is disabled");
                None
            }
        };

        Self {
            text_provider,
            email_provider,
        }
    }

    pub fn with_text_provider(mut self, provider: Arc<dyn TextProvider>) -> Self {
        self.text_provider = Some(provider);
        self
    }

    pub fn with_email_provider(mut self, provider: Arc<dyn EmailProvider>) -> Self {
        self.email_provider = Some(provider);
        self
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health_check))
        .route("/get-ai-response", post(get_ai_response))
        .route("/send-chat", post(send_chat))
        .layer(from_fn(security_headers_middleware))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: GatewayConfig) -> Result<Self, AppError> {
        let state = AppState::from_config(&config);
        Self::build_with_state(config, state).await
    }

    /// Build the application around an already assembled state.
    pub async fn build_with_state(config: GatewayConfig, state: AppState) -> Result<Self, AppError> {
        // Port 0 binds a random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Health gateway: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}
