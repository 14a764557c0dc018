/// Server error types
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use gigbook_core::GigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(GigError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<GigError> for ServerError {
    fn from(err: GigError) -> Self {
        match err {
            GigError::NotFound { .. } => ServerError::NotFound(err.to_string()),
            GigError::InvalidInput(msg) => ServerError::BadRequest(msg),
            GigError::Database(_) => ServerError::Database(err),
        }
    }
}

const NOT_FOUND_PAGE: &str = "<!DOCTYPE html>\n<html>\n<head><title>404 Not Found</title></head>\n\
     <body><h1>404 Not Found</h1><p>The record you are looking for does not exist.</p></body>\n\
     </html>\n";

const BAD_REQUEST_PAGE: &str = "<!DOCTYPE html>\n<html>\n<head><title>400 Bad Request</title></head>\n\
     <body><h1>400 Bad Request</h1><p>The submitted form could not be processed.</p></body>\n\
     </html>\n";

const SERVER_ERROR_PAGE: &str = "<!DOCTYPE html>\n<html>\n<head><title>500 Internal Server Error</title></head>\n\
     <body><h1>500 Internal Server Error</h1><p>Something went wrong. Please try again later.</p></body>\n\
     </html>\n";

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // Failures surface as rendered error pages with no detail; the
        // detail goes to the log instead.
        let (status, page) = match self {
            ServerError::NotFound(ref msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, NOT_FOUND_PAGE)
            }
            ServerError::BadRequest(ref msg) => {
                tracing::debug!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, BAD_REQUEST_PAGE)
            }
            ServerError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_PAGE)
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_PAGE)
            }
        };

        (status, Html(page)).into_response()
    }
}
