use thiserror::Error;

pub const TRANSPORT_NOTICE: &str = "Something went wrong while generating the proposal.";

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("declined by operator: {0}")]
    OperatorDeclined(String),

    #[error("busy: {0}")]
    Busy(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Text of the blocking notice shown to the user.
    ///
    /// Transport failures never expose their detail; status codes and
    /// connection errors all read the same.
    pub fn user_notice(&self) -> String {
        match self {
            CoreError::Validation(msg)
            | CoreError::OperatorDeclined(msg)
            | CoreError::Busy(msg)
            | CoreError::InvalidInput(msg) => msg.clone(),
            CoreError::Transport(_) => TRANSPORT_NOTICE.to_string(),
            CoreError::Io(e) => format!("I/O failure: {}", e),
            CoreError::Json(e) => format!("malformed JSON: {}", e),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, CoreError::Transport(_))
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
