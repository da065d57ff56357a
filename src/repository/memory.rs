use std::{collections::BTreeMap, sync::Mutex};

use async_trait::async_trait;

use super::{Book, BookRepository, RepositoryError};

/// In-memory [`BookRepository`] used as a drop-in fake for the SQLite backend.
///
/// The map is keyed by id, so `get_all` comes out in ascending id order like
/// the real backend.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: Mutex<BTreeMap<i64, Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<i64, Book>> {
        self.books.lock().expect("Books mutex poisoned")
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, book: Book) -> Result<Book, RepositoryError> {
        let mut books = self.lock();

        if books.contains_key(&book.id) {
            return Err(RepositoryError::Conflict(book.id));
        }

        books.insert(book.id, book.clone());

        Ok(book)
    }

    async fn get_all(&self) -> Result<Vec<Book>, RepositoryError> {
        Ok(self.lock().values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Book, RepositoryError> {
        self.lock()
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn update(&self, id: i64, book: Book) -> Result<Book, RepositoryError> {
        let mut books = self.lock();

        let stored = books.get_mut(&id).ok_or(RepositoryError::NotFound(id))?;
        stored.title = book.title;
        stored.author = book.author;
        stored.year = book.year;

        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.lock()
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: "Author".to_string(),
            year: Some(2000),
        }
    }

    #[tokio::test]
    async fn behaves_like_the_real_backend() {
        let repository = InMemoryBookRepository::new();

        repository.create(book(2, "Second")).await.unwrap();
        repository.create(book(1, "First")).await.unwrap();

        let ids: Vec<i64> = repository
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);

        let err = repository.create(book(1, "Duplicate")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(1)));

        repository.delete(1).await.unwrap();
        let err = repository.get(1).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(1)));
    }

    #[tokio::test]
    async fn update_keeps_the_path_id() {
        let repository = InMemoryBookRepository::new();

        repository.create(book(1, "First")).await.unwrap();

        let updated = repository.update(1, book(42, "Renamed")).await.unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.title, "Renamed");
    }
}
