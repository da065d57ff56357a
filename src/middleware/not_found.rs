use crate::error::{ApiError, NotFoundError};

/// Fallback handler for paths no route matches.
pub async fn not_found() -> ApiError {
    ApiError::NotFound(NotFoundError::route())
}
