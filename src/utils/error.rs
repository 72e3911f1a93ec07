use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("server rejected the request: {message}")]
    Rejected { message: String },

    #[error("validation failed: {message}")]
    Validation { message: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidConfigValue { field: String, reason: String },

    #[error("missing configuration: {field}")]
    MissingConfig { field: String },
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
