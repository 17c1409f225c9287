//! Input validation for book mutations
//!
//! Titles and authors are required to carry text. Validation runs before
//! the store is locked, so a rejected mutation never changes the collection.

use crate::core::book::{AddBookInput, BookPatch};
use crate::core::error::ValidationError;

/// Types that can check their own field values
pub trait Validate {
    /// Return the first field violation, if any
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Validator: string must contain something other than whitespace
pub fn non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::FieldError {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        })
    } else {
        Ok(())
    }
}

impl Validate for AddBookInput {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty("title", &self.title)?;
        non_empty("author", &self.author)
    }
}

impl Validate for BookPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            non_empty("title", title)?;
        }
        if let Some(author) = &self.author {
            non_empty("author", author)?;
        }
        Ok(())
    }
}

impl<T: Validate> Validate for [T] {
    fn validate(&self) -> Result<(), ValidationError> {
        self.iter().try_for_each(Validate::validate)
    }
}
