use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{error::ApiError, repository::Book, state::ApiState};

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct GetBooksResponse {
    pub books: Vec<Book>,
}

impl IntoResponse for GetBooksResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Lists all stored books in ascending id order.
pub async fn get_books(State(state): State<ApiState>) -> Result<GetBooksResponse, ApiError> {
    let books = state.repository().get_all().await?;

    Ok(GetBooksResponse { books })
}
