//! Error bodies returned by the inventory backend on non-2xx responses.
//!
//! The backend is not consistent: validation errors carry `message`, framework
//! errors carry `detail`, and a few endpoints answer with a bare JSON string.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorBody {
    Structured {
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        detail: Option<String>,
    },
    Plain(String),
}

impl ErrorBody {
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorBody::Structured { message, detail } => message
                .as_deref()
                .filter(|m| !m.is_empty())
                .or_else(|| detail.as_deref().filter(|d| !d.is_empty())),
            ErrorBody::Plain(text) if !text.is_empty() => Some(text),
            ErrorBody::Plain(_) => None,
        }
    }
}

/// Text shown to the user for a failed request.
///
/// Precedence: `message`, `detail`, bare string body, then the HTTP status text.
pub fn extract_error_message(body: &str, status_text: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message().map(str::to_string))
        .unwrap_or_else(|| format!("API Error: {}", status_text))
}
