pub mod answer;
pub mod providers;
pub mod transcript;

pub use answer::{normalize_answer, NO_ANSWER_FALLBACK};
pub use providers::{
    DeliveryReceipt, EmailMessage, EmailProvider, GeminiTextProvider, GenerationResponse,
    MockEmailProvider, MockTextProvider, ProviderError, SmtpProvider, TextProvider,
};
pub use transcript::{render_transcript, TRANSCRIPT_SUBJECT};
