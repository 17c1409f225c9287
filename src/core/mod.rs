//! Core module containing the book model, errors and the store contract

pub mod book;
pub mod error;
pub mod service;
pub mod validation;

pub use book::{AddBookInput, Book, BookFilter, BookPatch, UpdateBookInput, filter_books};
pub use error::{
    BookStoreError, BookStoreResult, ConfigError, EntityError, StorageError, ValidationError,
};
pub use service::BookService;
pub use validation::Validate;
