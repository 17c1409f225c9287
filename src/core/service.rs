//! Service trait for book collection operations

use crate::core::book::{AddBookInput, Book, BookFilter, BookPatch};
use crate::core::error::BookStoreResult;
use async_trait::async_trait;

/// Operations the GraphQL layer performs on a book collection
///
/// The trait is agnostic to where the books live. Every method is a single
/// atomic step against the collection: implementations must not let another
/// call observe a half-applied mutation.
#[async_trait]
pub trait BookService: Send + Sync {
    /// Books matching `filter`, in collection order
    ///
    /// `None` (or an empty filter) returns the whole collection.
    async fn query(&self, filter: Option<&BookFilter>) -> BookStoreResult<Vec<Book>>;

    /// The first book whose id equals `id`
    ///
    /// Fails with `EntityError::NotFound` when no book matches.
    async fn get(&self, id: &str) -> BookStoreResult<Book>;

    /// Create one book per input, in input order, and return only those books
    async fn add(&self, inputs: Vec<AddBookInput>) -> BookStoreResult<Vec<Book>>;

    /// Apply `values` to every book matching `filter` and return the updated books
    ///
    /// Updated books keep their id and their position in the collection.
    async fn update(
        &self,
        filter: Option<&BookFilter>,
        values: &BookPatch,
    ) -> BookStoreResult<Vec<Book>>;

    /// Remove every book matching `filter` and return the removed books
    async fn delete(&self, filter: Option<&BookFilter>) -> BookStoreResult<Vec<Book>>;

    /// Number of books currently held
    async fn count(&self) -> BookStoreResult<usize>;
}
