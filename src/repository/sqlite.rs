use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    FromRow,
};

use super::{Book, BookRepository, RepositoryError};

const MAX_CONNECTIONS: u32 = 5;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    year INTEGER NULL
)
"#;

/// The persisted row form of a [`Book`].
#[derive(Debug, FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
    year: Option<i32>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            id: row.id,
            title: row.title,
            author: row.author,
            year: row.year,
        }
    }
}

/// SQLite-backed [`BookRepository`] on top of a sqlx connection pool.
///
/// Every statement checks a connection out of the pool for its own duration
/// and autocommits, so each mutation is durable before the call returns.
#[derive(Clone)]
pub struct SqliteBookRepository {
    pool: SqlitePool,
}

impl SqliteBookRepository {
    /// Connects to the database at the given URL, creating the file and the
    /// `books` table if they do not exist yet.
    pub async fn connect(database_url: &str) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    /// Opens a fresh in-memory database, used by the tests.
    ///
    /// The pool is pinned to a single never-expiring connection: every
    /// `sqlite::memory:` connection gets its own private database, and the
    /// database lives only as long as its connection.
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self, RepositoryError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, RepositoryError> {
        sqlx::query(SCHEMA).execute(&pool).await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl BookRepository for SqliteBookRepository {
    async fn create(&self, book: Book) -> Result<Book, RepositoryError> {
        sqlx::query("INSERT INTO books (id, title, author, year) VALUES (?, ?, ?, ?)")
            .bind(book.id)
            .bind(&book.title)
            .bind(&book.author)
            .bind(book.year)
            .execute(&self.pool)
            .await
            .map_err(|err| match err.as_database_error() {
                Some(db_err) if db_err.is_unique_violation() => {
                    RepositoryError::Conflict(book.id)
                }
                _ => RepositoryError::Storage(err),
            })?;

        Ok(book)
    }

    async fn get_all(&self) -> Result<Vec<Book>, RepositoryError> {
        let rows = sqlx::query_as::<_, BookRow>(
            "SELECT id, title, author, year FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn get(&self, id: i64) -> Result<Book, RepositoryError> {
        let row = sqlx::query_as::<_, BookRow>(
            "SELECT id, title, author, year FROM books WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Book::from).ok_or(RepositoryError::NotFound(id))
    }

    async fn update(&self, id: i64, book: Book) -> Result<Book, RepositoryError> {
        let result = sqlx::query("UPDATE books SET title = ?, author = ?, year = ? WHERE id = ?")
            .bind(&book.title)
            .bind(&book.author)
            .bind(book.year)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        Ok(Book { id, ..book })
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str, author: &str, year: Option<i32>) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            year,
        }
    }

    async fn repository() -> SqliteBookRepository {
        SqliteBookRepository::in_memory()
            .await
            .expect("Failed to open in-memory database")
    }

    #[tokio::test]
    async fn create_then_get_returns_equal_book() {
        let repository = repository().await;

        let created = repository
            .create(book(1, "Test Book", "John Doe", Some(2026)))
            .await
            .unwrap();
        assert_eq!(created, book(1, "Test Book", "John Doe", Some(2026)));

        let fetched = repository.get(1).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_without_year_stores_none() {
        let repository = repository().await;

        repository
            .create(book(1, "Test Book", "John Doe", None))
            .await
            .unwrap();

        let fetched = repository.get(1).await.unwrap();
        assert_eq!(fetched.year, None);
    }

    #[tokio::test]
    async fn create_duplicate_id_is_conflict() {
        let repository = repository().await;

        repository
            .create(book(1, "Book1", "A", Some(2000)))
            .await
            .unwrap();

        let err = repository
            .create(book(1, "Book2", "B", Some(2010)))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(1)));
    }

    #[tokio::test]
    async fn get_all_returns_created_ids() {
        let repository = repository().await;

        repository
            .create(book(2, "Book2", "B", Some(2010)))
            .await
            .unwrap();
        repository
            .create(book(1, "Book1", "A", Some(2000)))
            .await
            .unwrap();

        let books = repository.get_all().await.unwrap();
        let ids: Vec<i64> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn get_missing_id_is_not_found() {
        let repository = repository().await;

        let err = repository.get(999).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(999)));
    }

    #[tokio::test]
    async fn update_replaces_all_fields_and_keeps_id() {
        let repository = repository().await;

        repository
            .create(book(1, "Old Title", "Old Author", Some(1990)))
            .await
            .unwrap();

        let updated = repository
            .update(1, book(1, "New Title", "New Author", Some(2000)))
            .await
            .unwrap();
        assert_eq!(updated, book(1, "New Title", "New Author", Some(2000)));

        let fetched = repository.get(1).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn update_ignores_id_carried_by_the_book() {
        let repository = repository().await;

        repository
            .create(book(1, "Book1", "A", Some(2000)))
            .await
            .unwrap();

        let updated = repository
            .update(1, book(42, "Book1", "A", Some(2000)))
            .await
            .unwrap();
        assert_eq!(updated.id, 1);
        assert!(repository.get(42).await.is_err());
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let repository = repository().await;

        let err = repository
            .update(999, book(999, "X", "Y", Some(0)))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(999)));
    }

    #[tokio::test]
    async fn delete_removes_the_book() {
        let repository = repository().await;

        repository
            .create(book(1, "Book1", "A", Some(2000)))
            .await
            .unwrap();

        repository.delete(1).await.unwrap();

        let err = repository.get(1).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(1)));
    }

    #[tokio::test]
    async fn delete_missing_id_is_not_found() {
        let repository = repository().await;

        let err = repository.delete(999).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(999)));
    }
}
