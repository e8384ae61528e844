use thiserror::Error;

pub type SolaceResult<T> = Result<T, SolaceError>;

/// Failure taxonomy for the client. Backend trouble and local trouble stay
/// in separate variants.
#[derive(Debug, Error)]
pub enum SolaceError {
    #[error("backend error: {0}")]
    Api(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SolaceError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        SolaceError::Api(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        SolaceError::Config(msg.into())
    }
}
