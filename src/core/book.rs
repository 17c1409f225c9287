//! Book records, filters and patches
//!
//! A [`BookFilter`] is a partial book: every field that is present must equal
//! the record's field exactly, absent fields match anything. A [`BookPatch`]
//! is the write-side counterpart: every present field overwrites the record's
//! field, absent fields are left alone.

use async_graphql::{ID, InputObject, Object};
use serde::{Deserialize, Serialize};

/// A book held in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Opaque unique identifier
    pub id: String,

    /// Title of the book
    pub title: String,

    /// Author of the book
    pub author: String,
}

impl Book {
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
        }
    }
}

#[Object]
impl Book {
    /// Opaque unique identifier
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    /// Title of the book
    async fn title(&self) -> &str {
        &self.title
    }

    /// Author of the book
    async fn author(&self) -> &str {
        &self.author
    }
}

/// Exact-match selection over books
#[derive(InputObject, Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub id: Option<ID>,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl BookFilter {
    /// Filter on a single id
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(ID(id.into())),
            ..Self::default()
        }
    }

    /// Filter on a single title
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Filter on a single author
    pub fn by_author(author: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            ..Self::default()
        }
    }

    /// True when no field is constrained
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.title.is_none() && self.author.is_none()
    }

    /// Whether `book` satisfies every present field of the filter
    pub fn matches(&self, book: &Book) -> bool {
        field_matches(self.id.as_ref().map(|id| id.as_str()), &book.id)
            && field_matches(self.title.as_deref(), &book.title)
            && field_matches(self.author.as_deref(), &book.author)
    }
}

fn field_matches(expected: Option<&str>, actual: &str) -> bool {
    expected.is_none_or(|expected| expected == actual)
}

/// Whether `book` passes an optional filter; no filter matches everything
pub fn matches_filter(filter: Option<&BookFilter>, book: &Book) -> bool {
    filter.is_none_or(|f| f.matches(book))
}

/// Clone the books passing `filter`, keeping their order
pub fn filter_books(books: &[Book], filter: Option<&BookFilter>) -> Vec<Book> {
    books
        .iter()
        .filter(|book| matches_filter(filter, book))
        .cloned()
        .collect()
}

/// Field-level overwrite applied by `updateBook`
#[derive(InputObject, Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl BookPatch {
    /// True when the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none()
    }

    /// Overwrite the fields present in the patch
    pub fn apply(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title.clone_from(title);
        }
        if let Some(author) = &self.author {
            book.author.clone_from(author);
        }
    }
}

/// Fields supplied by the caller when creating a book
#[derive(InputObject, Debug, Clone, PartialEq, Eq)]
pub struct AddBookInput {
    pub title: String,
    pub author: String,
}

impl AddBookInput {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    /// Build the stored record under a freshly generated id
    pub fn into_book(self, id: String) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
        }
    }
}

/// Arguments of `updateBook`: which books to touch and what to write
#[derive(InputObject, Debug, Clone, Default)]
pub struct UpdateBookInput {
    pub filter: Option<BookFilter>,
    pub values: BookPatch,
}
