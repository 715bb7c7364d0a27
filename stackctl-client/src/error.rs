use hyper::StatusCode;
use stackctl::StackCtlError;
use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StackCtlClientError>;

#[derive(Debug, Error)]
pub enum StackCtlClientError {
    #[error("API request failed ({status}): {message}")]
    Api { status: StatusCode, message: String },
    #[error("Access token was not provided.")]
    AccessTokenMissing,
    #[error("Stack '{0}' not found")]
    StackNotFound(String),
    #[error("timed-out after {}", humantime::format_duration(*.0))]
    TimedOut(Duration),

    // Wrapped errors
    #[error(transparent)]
    StackCtl(#[from] StackCtlError),
    #[error(transparent)]
    Http(#[from] http::Error),
    #[error(transparent)]
    Hyper(#[from] hyper::Error),
    #[error(transparent)]
    InvalidUri(#[from] http::uri::InvalidUri),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl StackCtlClientError {
    /// Builds an [`StackCtlClientError::Api`] error from a non-success
    /// response. The platform reports errors as
    /// `{"error": "...", "error_description": "..."}`; anything else is
    /// passed through as text.
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            error: Option<String>,
            error_description: Option<String>,
        }

        let message = match serde_json::from_slice::<ErrorBody>(body) {
            Ok(ErrorBody {
                error_description: Some(description),
                ..
            }) => description,
            Ok(ErrorBody {
                error: Some(error), ..
            }) => error,
            _ => String::from_utf8_lossy(body).trim().to_string(),
        };

        let message = if message.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        } else {
            message
        };

        Self::Api { status, message }
    }
}
