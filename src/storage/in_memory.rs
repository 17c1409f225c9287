//! In-memory implementation of BookService

use crate::core::book::{AddBookInput, Book, BookFilter, BookPatch, filter_books, matches_filter};
use crate::core::error::{BookStoreResult, EntityError, StorageError};
use crate::core::service::BookService;
use crate::core::validation::Validate;
use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Produces ids for newly added books
pub type IdGenerator = Arc<dyn Fn() -> String + Send + Sync>;

/// The two records every fresh server starts with
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("abc", "The Awakening", "Kate Chopin"),
        Book::new("zxy", "City of Glass", "Paul Auster"),
    ]
}

/// In-memory book store
///
/// The collection is an ordered `Vec` behind an `RwLock`; clones share the
/// same collection. Reads take the read lock, mutations take the write lock
/// for their whole duration.
#[derive(Clone)]
pub struct InMemoryBookStore {
    books: Arc<RwLock<Vec<Book>>>,
    id_generator: IdGenerator,
}

impl InMemoryBookStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    /// Create a store holding the seed records
    pub fn seeded() -> Self {
        Self::with_books(seed_books())
    }

    /// Create a store holding `books`, in that order
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
            id_generator: Arc::new(|| Uuid::new_v4().to_string()),
        }
    }

    /// Replace the id generator (UUID v4 by default)
    pub fn with_id_generator(mut self, generator: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.id_generator = Arc::new(generator);
        self
    }

    fn read(&self, operation: &'static str) -> Result<RwLockReadGuard<'_, Vec<Book>>, StorageError> {
        self.books
            .read()
            .map_err(|_| StorageError::LockPoisoned { operation })
    }

    fn write(
        &self,
        operation: &'static str,
    ) -> Result<RwLockWriteGuard<'_, Vec<Book>>, StorageError> {
        self.books
            .write()
            .map_err(|_| StorageError::LockPoisoned { operation })
    }
}

impl Default for InMemoryBookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookService for InMemoryBookStore {
    async fn query(&self, filter: Option<&BookFilter>) -> BookStoreResult<Vec<Book>> {
        let books = self.read("query")?;
        let matched = filter_books(&books, filter);

        tracing::debug!(matched = matched.len(), total = books.len(), "queryBook");
        Ok(matched)
    }

    async fn get(&self, id: &str) -> BookStoreResult<Book> {
        let books = self.read("get")?;

        match books.iter().find(|book| book.id == id) {
            Some(book) => Ok(book.clone()),
            None => {
                tracing::warn!(id = %id, "getBook: no record with this id");
                Err(EntityError::NotFound { id: id.to_string() }.into())
            }
        }
    }

    async fn add(&self, inputs: Vec<AddBookInput>) -> BookStoreResult<Vec<Book>> {
        inputs.validate()?;

        let mut books = self.write("add")?;
        let added: Vec<Book> = inputs
            .into_iter()
            .map(|input| input.into_book((self.id_generator)()))
            .collect();
        books.extend(added.iter().cloned());

        tracing::debug!(added = added.len(), total = books.len(), "addBook");
        Ok(added)
    }

    async fn update(
        &self,
        filter: Option<&BookFilter>,
        values: &BookPatch,
    ) -> BookStoreResult<Vec<Book>> {
        values.validate()?;

        let mut books = self.write("update")?;
        let mut updated = Vec::new();
        for book in books.iter_mut().filter(|book| matches_filter(filter, book)) {
            values.apply(book);
            updated.push(book.clone());
        }

        tracing::debug!(updated = updated.len(), "updateBook");
        Ok(updated)
    }

    async fn delete(&self, filter: Option<&BookFilter>) -> BookStoreResult<Vec<Book>> {
        let mut books = self.write("delete")?;
        let (removed, kept): (Vec<Book>, Vec<Book>) = books
            .drain(..)
            .partition(|book| matches_filter(filter, book));
        *books = kept;

        tracing::debug!(removed = removed.len(), total = books.len(), "deleteBook");
        Ok(removed)
    }

    async fn count(&self) -> BookStoreResult<usize> {
        Ok(self.read("count")?.len())
    }
}
