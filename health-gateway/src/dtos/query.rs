use serde::{Deserialize, Serialize};
use validator::Validate;

pub const QUERY_MISSING: &str = "Query missing";

#[derive(Debug, Default, Deserialize, Validate)]
pub struct QueryRequest {
    #[validate(
        required(message = "Query missing"),
        length(min = 1, message = "Query missing")
    )]
    pub query: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub success: bool,
    pub answer: String,
}

impl QueryResponse {
    pub fn new(answer: String) -> Self {
        Self {
            success: true,
            answer,
        }
    }
}
