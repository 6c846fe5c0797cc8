use crate::portal::graphql::OperationErrors;
use thiserror::Error;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Failures surfaced by the GraphQL transport. They are passed through to the
/// caller unmodified; nothing here retries or suppresses.
#[derive(Debug, Error)]
pub enum Error {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Operation(OperationErrors),
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("response error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("response contained no data")]
    MissingData,
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl Error {
    /// Text suitable for showing to the student.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => {
                "Unable to reach the server. Check your connection and try again.".to_string()
            }
            Self::Operation(errors) => errors.first_message().to_string(),
            Self::Http { message, .. } => message.clone(),
            Self::Parse(_) | Self::MissingData | Self::InvalidHeader(_) => {
                "Unexpected response from the server.".to_string()
            }
        }
    }

    pub(crate) fn http(status: u16, body: &str) -> Self {
        Self::Http {
            status,
            message: sanitize_body(body),
        }
    }
}

/// Trims and truncates HTTP error bodies for user-facing messages.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
