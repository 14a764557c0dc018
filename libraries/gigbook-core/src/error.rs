/// Core error types for Gigbook
use thiserror::Error;

/// Result type alias using `GigError`
pub type Result<T> = std::result::Result<T, GigError>;

/// Core error type for Gigbook
#[derive(Error, Debug)]
pub enum GigError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Missing or malformed input field
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl GigError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for GigError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
