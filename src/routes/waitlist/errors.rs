use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use super::super::helpers::error_chain_fmt;

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(thiserror::Error)]
pub enum WaitlistError {
    #[error("Missing required fields")]
    MissingEmail,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Server configuration error. Notification could not be sent.")]
    MissingConfiguration,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for WaitlistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for WaitlistError {
    fn status_code(&self) -> StatusCode {
        match self {
            WaitlistError::MissingEmail | WaitlistError::InvalidEmail => StatusCode::BAD_REQUEST,
            WaitlistError::MissingConfiguration | WaitlistError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
