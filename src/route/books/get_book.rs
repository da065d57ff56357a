use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{error::ApiError, extractor::path::ApiPath, repository::Book, state::ApiState};

use super::BookPath;

#[derive(Debug, Serialize)]
pub struct GetBookResponse {
    #[serde(flatten)]
    pub book: Book,
}

impl IntoResponse for GetBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn get_book(
    State(state): State<ApiState>,
    ApiPath(path): ApiPath<BookPath>,
) -> Result<GetBookResponse, ApiError> {
    let book = state.repository().get(path.id).await?;

    Ok(GetBookResponse { book })
}
