use axum::{
    routing::{get, post},
    Router,
};

use crate::state::ApiState;

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new()
        .route(
            "/books/",
            post(super::create_book::create_book).get(super::get_books::get_books),
        )
        .route(
            "/books/:id",
            get(super::get_book::get_book)
                .put(super::update_book::update_book)
                .delete(super::delete_book::delete_book),
        )
}
