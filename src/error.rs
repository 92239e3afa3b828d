//! Handler errors

use lambda_http::http::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between receiving a request and answering it.
/// All variants are caught at the handler boundary and rendered as a JSON
/// error body; the display string is the user-visible description.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Configuration(String),

    #[error("Failed to start outbound call: {0}")]
    ExternalService(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl HandlerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::Validation(_) => StatusCode::BAD_REQUEST,
            HandlerError::Configuration(_)
            | HandlerError::ExternalService(_)
            | HandlerError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
