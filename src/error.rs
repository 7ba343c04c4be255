use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::Response;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Invalid todo id: {0}")]
    InvalidId(String),

    #[error("Failed to render page: {0}")]
    Render(#[from] askama::Error),

    #[error("Resource not found")]
    NotFound,
}

impl ResponseError for TodoError {
    fn status_code(&self) -> StatusCode {
        match self {
            TodoError::InvalidId(_) => StatusCode::BAD_REQUEST,
            TodoError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TodoError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(Response {
            message: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_to_status_codes() {
        assert_eq!(TodoError::InvalidId("abc".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(TodoError::Render(askama::Error::from(std::fmt::Error)).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(TodoError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn message_names_the_bad_id() {
        assert_eq!(TodoError::InvalidId("abc".into()).to_string(), "Invalid todo id: abc");
    }
}
