pub mod query;
pub mod transcript;

pub use query::{QueryRequest, QueryResponse, QUERY_MISSING};
pub use transcript::{TranscriptRequest, TranscriptResponse, TRANSCRIPT_FIELDS_MISSING};
