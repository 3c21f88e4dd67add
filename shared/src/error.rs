use thiserror::Error;

/// Failure of a single API request. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Non-success HTTP status. `message` is the response body, or the
    /// status text when the body was empty.
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Build the error for a failed response the way the client reports it.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let message = if body.is_empty() {
            status_text.to_string()
        } else {
            body.to_string()
        };
        ClientError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404) || self.to_string().contains("404")
    }

    /// The `detail` field of a JSON error body, if the backend sent one.
    pub fn detail(&self) -> Option<String> {
        let ClientError::Http { message, .. } = self else {
            return None;
        };
        let body: serde_json::Value = serde_json::from_str(message).ok()?;
        match body.get("detail")? {
            serde_json::Value::String(detail) => Some(detail.clone()),
            serde_json::Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }

    /// Text suitable for a notification: the backend detail, then the raw
    /// message, then `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        if let Some(detail) = self.detail() {
            return detail;
        }
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

/// A result's stored number sequence contained a non-numeric token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid number {token:?} in {input:?}")]
pub struct NumbersParseError {
    pub token: String,
    pub input: String,
}
