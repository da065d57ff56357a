use serde::Deserialize;

pub mod app;
pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod get_books;
pub mod update_book;

/// Path parameters shared by the per-id routes.
#[derive(Debug, Deserialize)]
pub struct BookPath {
    pub id: i64,
}
