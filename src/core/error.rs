//! Typed error handling for the book store
//!
//! Errors are split by category so callers (and the GraphQL layer) can tell
//! caller mistakes apart from server faults.
//!
//! # Error Categories
//!
//! - [`EntityError`]: lookups that found nothing
//! - [`ValidationError`]: rejected input values
//! - [`StorageError`]: failures of the backing collection
//! - [`ConfigError`]: configuration parsing and validation
//!
//! Every category maps to an HTTP status, a specific `error_code()` and a
//! coarser `class_code()`. The class code is what GraphQL clients see under
//! `extensions.code`: `BAD_USER_INPUT` for errors the caller can fix, and
//! `INTERNAL_SERVER_ERROR` for everything else.
//!
//! # Example
//!
//! ```rust,ignore
//! match store.get("missing").await {
//!     Ok(book) => println!("Found: {}", book.title),
//!     Err(BookStoreError::Entity(EntityError::NotFound { id })) => {
//!         println!("No book {}", id);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use async_graphql::ErrorExtensions;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Message returned to callers when a record id does not resolve
pub const NOT_FOUND_MESSAGE: &str = "Failed to find record with given ID";

/// Class code for errors the caller can correct
pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";

/// Class code for server-side faults
pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";

/// The main error type for the book store
#[derive(Debug, Error)]
pub enum BookStoreError {
    /// Record lookups
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Input validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backing collection failures
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl BookStoreError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookStoreError::Entity(e) => e.status_code(),
            BookStoreError::Validation(_) => StatusCode::BAD_REQUEST,
            BookStoreError::Storage(_) | BookStoreError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the specific error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            BookStoreError::Entity(e) => e.error_code(),
            BookStoreError::Validation(_) => "VALIDATION_ERROR",
            BookStoreError::Storage(_) => "STORAGE_ERROR",
            BookStoreError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Whether the caller caused this error and may retry with different input
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            BookStoreError::Entity(_) | BookStoreError::Validation(_)
        )
    }

    /// Coarse error class exposed as the GraphQL `extensions.code`
    pub fn class_code(&self) -> &'static str {
        if self.is_user_error() {
            BAD_USER_INPUT
        } else {
            INTERNAL_SERVER_ERROR
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl ErrorExtensions for BookStoreError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| {
            ext.set("code", self.class_code());
            ext.set("reason", self.error_code());
        })
    }
}

impl IntoResponse for BookStoreError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to record lookups
#[derive(Debug, Error)]
pub enum EntityError {
    /// No record carries the requested id
    #[error("Failed to find record with given ID")]
    NotFound { id: String },
}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "BOOK_NOT_FOUND",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Single field validation error
    #[error("Validation error for field '{field}': {message}")]
    FieldError { field: String, message: String },
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the backing collection
#[derive(Debug, Error)]
pub enum StorageError {
    /// A writer panicked while holding the collection lock
    #[error("Book collection lock poisoned during {operation}")]
    LockPoisoned { operation: &'static str },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error while reading configuration
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for book store operations
pub type BookStoreResult<T> = Result<T, BookStoreError>;
