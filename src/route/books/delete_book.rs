use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{error::ApiError, extractor::path::ApiPath, state::ApiState};

use super::BookPath;

#[derive(Debug, Serialize)]
pub struct DeleteBookResponse {
    pub message: &'static str,
}

impl IntoResponse for DeleteBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn delete_book(
    State(state): State<ApiState>,
    ApiPath(path): ApiPath<BookPath>,
) -> Result<DeleteBookResponse, ApiError> {
    state.repository().delete(path.id).await?;

    tracing::debug!(id = path.id, "Book deleted");

    Ok(DeleteBookResponse {
        message: "Book deleted",
    })
}
