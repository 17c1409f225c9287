//! Storage implementations for the book collection

pub mod in_memory;

pub use in_memory::{IdGenerator, InMemoryBookStore, seed_books};
