use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use derive_more::From;
use serde::Serialize;

use crate::repository::RepositoryError;

/// Error body returned to clients for every non-2xx response.
#[derive(Debug, Serialize)]
struct ApiErrorResponse {
    detail: String,
}

/// API error
#[derive(Debug, From)]
pub enum ApiError {
    /// The requested resource does not exist.
    NotFound(NotFoundError),
    /// A create collided with an already stored id.
    Conflict(ConflictError),
    /// The request body is not as expected.
    Body(BodyError),
    /// The path parameters are not as expected.
    Path(PathError),
    /// The method is not allowed on this path.
    MethodNotAllowed(MethodNotAllowedError),
    /// An internal server error occurred.
    Internal(InternalServerError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(err) => err.status_code(),
            ApiError::Conflict(err) => err.status_code(),
            ApiError::Body(err) => err.status_code(),
            ApiError::Path(err) => err.status_code(),
            ApiError::MethodNotAllowed(err) => err.status_code(),
            ApiError::Internal(err) => err.status_code(),
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::NotFound(err) => err.detail(),
            ApiError::Conflict(err) => err.detail(),
            ApiError::Body(err) => err.detail(),
            ApiError::Path(err) => err.detail(),
            ApiError::MethodNotAllowed(err) => err.detail(),
            ApiError::Internal(err) => err.detail(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let detail = self.detail();

        (status_code, Json(ApiErrorResponse { detail })).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => NotFoundError::book(id).into(),
            RepositoryError::Conflict(id) => ConflictError::new(id).into(),
            RepositoryError::Storage(err) => InternalServerError::from_generic_error(err).into(),
        }
    }
}

#[derive(Debug)]
pub struct NotFoundError {
    detail: String,
}

impl NotFoundError {
    pub fn book(id: i64) -> Self {
        NotFoundError {
            detail: format!("Book with id={id} not found"),
        }
    }

    pub fn route() -> Self {
        NotFoundError {
            detail: "The requested resource was not found".to_string(),
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }

    fn detail(&self) -> String {
        self.detail.clone()
    }
}

#[derive(Debug)]
pub struct ConflictError {
    id: i64,
}

impl ConflictError {
    pub fn new(id: i64) -> Self {
        ConflictError { id }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::CONFLICT
    }

    fn detail(&self) -> String {
        format!("Book with id={} already exists", self.id)
    }
}

#[derive(Debug)]
pub struct BodyError {
    body_error_reason: String,
}

impl BodyError {
    pub fn new(body_error_reason: String) -> Self {
        BodyError { body_error_reason }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn detail(&self) -> String {
        self.body_error_reason.clone()
    }
}

#[derive(Debug)]
pub struct PathError {
    path_error_reason: String,
}

impl PathError {
    pub fn new(path_error_reason: String) -> Self {
        PathError { path_error_reason }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn detail(&self) -> String {
        self.path_error_reason.clone()
    }
}

#[derive(Debug, Default)]
pub struct MethodNotAllowedError;

impl MethodNotAllowedError {
    pub fn new() -> Self {
        MethodNotAllowedError
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::METHOD_NOT_ALLOWED
    }

    fn detail(&self) -> String {
        "Method not allowed".to_string()
    }
}

#[derive(Debug)]
pub struct InternalServerError;

impl InternalServerError {
    /// Logs the full error chain and hands the client an opaque detail.
    pub fn from_generic_error<E: Into<anyhow::Error>>(err: E) -> Self {
        let err: anyhow::Error = err.into();
        let err = format!("{err:#}");
        tracing::error!(%err, "Internal server error");

        InternalServerError
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn detail(&self) -> String {
        "An internal server error has occurred".to_string()
    }
}
