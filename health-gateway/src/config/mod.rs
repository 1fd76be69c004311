use secrecy::Secret;
use service_core::config::{self as core_config, get_env_or, get_optional_env};
use service_core::error::AppError;

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_EMAIL_FROM_NAME: &str = "Odisha Healthcare AI Bot";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub common: core_config::Config,
    pub gemini: GeminiConfig,
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Without a key the query endpoint answers 500 instead of calling out.
    pub api_key: Option<Secret<String>>,
    pub model: String,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// Sender mailbox and relay login. Both halves must be set to enable mail.
    pub credentials: Option<SmtpCredentials>,
    pub from_name: String,
}

#[derive(Debug, Clone)]
pub struct SmtpCredentials {
    pub user: String,
    pub password: Secret<String>,
}

impl GatewayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        let credentials = match (get_optional_env("EMAIL_USER"), get_optional_env("EMAIL_PASS")) {
            (Some(user), Some(password)) => Some(SmtpCredentials {
                user,
                password: Secret::new(password),
            }),
            _ => None,
        };

        Ok(GatewayConfig {
            common: common_config,
            gemini: GeminiConfig {
                api_key: get_optional_env("GEMINI_API_KEY").map(Secret::new),
                model: get_env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                api_base: get_env_or("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
            },
            smtp: SmtpConfig {
                host: get_env_or("SMTP_HOST", DEFAULT_SMTP_HOST),
                port: match get_optional_env("SMTP_PORT") {
                    Some(raw) => parse_port("SMTP_PORT", &raw)?,
                    None => DEFAULT_SMTP_PORT,
                },
                credentials,
                from_name: get_env_or("EMAIL_FROM_NAME", DEFAULT_EMAIL_FROM_NAME),
            },
        })
    }
}

fn parse_port(key: &str, raw: &str) -> Result<u16, AppError> {
    raw.trim().parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!("{} must be a port number, got {:?}: {}", key, raw, e))
    })
}
