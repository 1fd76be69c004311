pub mod chat;
pub mod generation;

pub use chat::{ChatMessage, Role};
pub use generation::{GenerationPayload, SYSTEM_INSTRUCTION};
