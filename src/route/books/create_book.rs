use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{error::ApiError, extractor::json::ApiJson, repository::Book, state::ApiState};

#[derive(Debug, Serialize)]
pub struct CreateBookResponse {
    #[serde(flatten)]
    pub book: Book,
}

impl IntoResponse for CreateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Creates a book with a caller-assigned id.
///
/// Ids are never generated server-side; a duplicate id is rejected with a
/// conflict.
pub async fn create_book(
    State(state): State<ApiState>,
    ApiJson(book): ApiJson<Book>,
) -> Result<CreateBookResponse, ApiError> {
    let book = state.repository().create(book).await?;

    tracing::debug!(id = book.id, "Book created");

    Ok(CreateBookResponse { book })
}
