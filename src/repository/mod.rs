use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[cfg(test)]
pub mod memory;
pub mod sqlite;

/// A book record as it travels over the wire and between layers.
///
/// `id` is assigned by the caller on create and is the sole lookup key
/// afterwards. A missing `year` means the publication year is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("book with id={0} not found")]
    NotFound(i64),
    #[error("book with id={0} already exists")]
    Conflict(i64),
    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

/// Sole point of access to the persisted book collection.
///
/// Implementations are injected into [`crate::state::ApiState`] at
/// construction, which is what lets the tests swap the real store for an
/// in-memory fake.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Inserts a new book and returns it as stored.
    ///
    /// Fails with [`RepositoryError::Conflict`] if a book with the same id
    /// already exists.
    async fn create(&self, book: Book) -> Result<Book, RepositoryError>;

    /// Returns all stored books, ordered by ascending id.
    async fn get_all(&self) -> Result<Vec<Book>, RepositoryError>;

    /// Returns the book with the given id.
    async fn get(&self, id: i64) -> Result<Book, RepositoryError>;

    /// Replaces title, author and year of the book with the given id.
    ///
    /// The id itself is immutable; whatever id the supplied book carries is
    /// ignored in favor of `id`.
    async fn update(&self, id: i64, book: Book) -> Result<Book, RepositoryError>;

    /// Removes the book with the given id.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
