//! Client error types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An authenticated operation was attempted before a token was set
    #[error("a token is required for this operation; pass one to the constructor or call set_token()")]
    MissingToken,

    /// The direct transfer to the presigned upload target did not succeed
    #[error("upload transfer failed with status {status}")]
    TransferFailed { status: u16 },

    /// Error reported by the API
    #[error("API error ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        hint: Option<String>,
    },

    /// Success status but a body that cannot satisfy the caller's expectation
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

impl ClientError {
    /// Build an error from the API's `{ "error": { code, message, hint } }` envelope,
    /// substituting placeholders for absent fields.
    pub fn from_envelope(status: u16, body: &serde_json::Value) -> Self {
        let envelope = body.get("error");
        let field = |name: &str| {
            envelope
                .and_then(|e| e.get(name))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        Self::Api {
            status,
            code: field("code").unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            message: field("message")
                .unwrap_or_else(|| format!("request failed with status {status}")),
            hint: field("hint"),
        }
    }

    /// Build the placeholder error for a non-success response with an unparseable body.
    pub fn unknown(status: u16) -> Self {
        Self::Api {
            status,
            code: UNKNOWN_ERROR.to_string(),
            message: format!("request failed with status {status}"),
            hint: None,
        }
    }

    /// The HTTP status associated with this error, when one exists.
    /// Transport failures carry a status only if a response arrived before the failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::TransferFailed { status } => Some(*status),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The machine-readable error code, for errors that carry one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::MissingToken => Some("NO_TOKEN"),
            Self::TransferFailed { .. } => Some("UPLOAD_TRANSFER_FAILED"),
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// The optional hint suggesting what to do next.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::TransferFailed { .. } => {
                Some("the presigned URL may have expired; request a new upload and try again")
            }
            Self::Api { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { code, .. } if code == "NOT_FOUND")
    }
}
