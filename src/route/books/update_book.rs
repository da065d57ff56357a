use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    error::ApiError,
    extractor::{json::ApiJson, path::ApiPath},
    repository::Book,
    state::ApiState,
};

use super::BookPath;

#[derive(Debug, Serialize)]
pub struct UpdateBookResponse {
    #[serde(flatten)]
    pub book: Book,
}

impl IntoResponse for UpdateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Replaces title, author and year of the book at the path id.
///
/// The id in the body is ignored; the path id is authoritative.
pub async fn update_book(
    State(state): State<ApiState>,
    ApiPath(path): ApiPath<BookPath>,
    ApiJson(book): ApiJson<Book>,
) -> Result<UpdateBookResponse, ApiError> {
    let book = state.repository().update(path.id, book).await?;

    tracing::debug!(id = book.id, "Book updated");

    Ok(UpdateBookResponse { book })
}
