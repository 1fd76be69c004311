use serde::{Deserialize, Serialize};

pub const USER_COLOR: &str = "#22C55E";
pub const ASSISTANT_COLOR: &str = "#F97316";

/// Speaker of a chat message. Unknown roles are kept verbatim and render
/// like the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Assistant,
    Other(String),
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
            Role::Other(role) => write!(f, "{}", role),
        }
    }
}

impl Role {
    /// Uppercased label shown in the transcript.
    pub fn label(&self) -> String {
        self.to_string().to_uppercase()
    }

    pub fn accent_color(&self) -> &'static str {
        match self {
            Role::User => USER_COLOR,
            _ => ASSISTANT_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    #[serde(default)]
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}
