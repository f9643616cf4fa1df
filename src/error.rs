//! Errors raised by the tool server and binaries.
//!
//! The formatter core never fails; these cover request handling and configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("{0} is required")]
    MissingArgument(&'static str),

    #[error("Invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ServiceError {
    /// Code reported in tool-server error responses.
    pub fn code(&self) -> i64 {
        match self {
            ServiceError::UnknownMethod(_) => -32601,
            ServiceError::MissingArgument(_) | ServiceError::InvalidArgument { .. } => -32602,
            ServiceError::Json(_) => -32700,
            _ => -1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
