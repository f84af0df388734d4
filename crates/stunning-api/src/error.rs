use thiserror::Error;

/// Errors from the studio API client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unauthorized (status {status})")]
    Unauthorized { status: u16 },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("token store error: {0}")]
    Token(String),

    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Status code of the response that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status } | Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
