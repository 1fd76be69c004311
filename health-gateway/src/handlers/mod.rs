//! HTTP handlers for health-gateway.

pub mod health;
pub mod query;
pub mod transcript;

pub use health::{health_check, liveness};
pub use query::get_ai_response;
pub use transcript::send_chat;
