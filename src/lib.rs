//! # Bookstore
//!
//! An in-memory book collection served over GraphQL.
//!
//! ## Features
//!
//! - **Composable filters**: every query and mutation selects books with an
//!   exact-match partial record, and every mutation payload can narrow its
//!   result with a second filter
//! - **Replace-in-place updates**: updated books keep their id and position
//! - **Typed errors**: missing ids surface as `BAD_USER_INPUT` with the
//!   message `Failed to find record with given ID`
//! - **Lock-guarded store**: each operation is atomic with respect to the others
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bookstore::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_config(ServerConfig::default().with_env_overrides()?)
//!         .with_book_service(InMemoryBookStore::seeded())
//!         .serve()
//!         .await
//! }
//! ```
//!
//! ```graphql
//! query { queryBook(filter: { author: "Paul Auster" }) { id title } }
//!
//! mutation {
//!   updateBook(input: { filter: { id: "abc" }, values: { title: "New" } }) {
//!     book { id title author }
//!   }
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        AddBookInput, Book, BookFilter, BookPatch, BookService, BookStoreError, BookStoreResult,
        ConfigError, EntityError, StorageError, UpdateBookInput, Validate, ValidationError,
        filter_books,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryBookStore, seed_books};

    // === Config ===
    pub use crate::config::{GraphQLConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{GraphQLExposure, RestExposure, ServerBuilder, ServerHost};
    pub use crate::server::exposure::graphql::{BookSchema, build_schema};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
