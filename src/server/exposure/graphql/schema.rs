//! GraphQL schema for the book collection
//!
//! Query and mutation roots resolve against the `BookService` stored in the
//! schema data. Every mutation returns a payload wrapping exactly the books
//! it touched; the payload's `book(filter)` field narrows that set again
//! without looking at the rest of the collection.

use crate::config::GraphQLConfig;
use crate::core::book::{AddBookInput, Book, BookFilter, UpdateBookInput, filter_books};
use crate::core::service::BookService;
use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Object, Result, Schema};
use std::sync::Arc;

/// Executable schema type served on `/graphql`
pub type BookSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema around a book service
pub fn build_schema(service: Arc<dyn BookService>, config: &GraphQLConfig) -> BookSchema {
    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription).data(service);
    if !config.introspection {
        builder = builder.disable_introspection();
    }
    builder.finish()
}

fn service<'a>(ctx: &Context<'a>) -> Result<&'a Arc<dyn BookService>> {
    ctx.data::<Arc<dyn BookService>>()
}

/// Generates a mutation payload type wrapping the affected books
macro_rules! book_payload {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name {
            books: Vec<Book>,
        }

        impl $name {
            pub fn new(books: Vec<Book>) -> Self {
                Self { books }
            }
        }

        #[Object]
        impl $name {
            /// Affected books, optionally narrowed by a second filter
            async fn book(&self, filter: Option<BookFilter>) -> Vec<Book> {
                filter_books(&self.books, filter.as_ref())
            }

            /// Number of affected books
            async fn num_uids(&self) -> usize {
                self.books.len()
            }
        }
    };
}

book_payload!(
    /// Books created by `addBook`
    AddBookPayload
);
book_payload!(
    /// Books changed by `updateBook`, with their new values
    UpdateBookPayload
);
book_payload!(
    /// Books removed by `deleteBook`
    DeleteBookPayload
);

/// Read operations
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Books matching every present filter field; no filter returns all books
    async fn query_book(
        &self,
        ctx: &Context<'_>,
        filter: Option<BookFilter>,
    ) -> Result<Vec<Book>> {
        service(ctx)?
            .query(filter.as_ref())
            .await
            .map_err(|e| e.extend())
    }

    /// The book with the given id
    async fn get_book(&self, ctx: &Context<'_>, id: ID) -> Result<Book> {
        service(ctx)?.get(&id).await.map_err(|e| e.extend())
    }

    /// Every book in the collection
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        service(ctx)?.query(None).await.map_err(|e| e.extend())
    }
}

/// Write operations
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create one book per input; a single object is accepted as a one-element list
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        input: Vec<AddBookInput>,
    ) -> Result<AddBookPayload> {
        let added = service(ctx)?.add(input).await.map_err(|e| e.extend())?;
        Ok(AddBookPayload::new(added))
    }

    /// Overwrite fields of every book matching the filter
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        input: UpdateBookInput,
    ) -> Result<UpdateBookPayload> {
        let updated = service(ctx)?
            .update(input.filter.as_ref(), &input.values)
            .await
            .map_err(|e| e.extend())?;
        Ok(UpdateBookPayload::new(updated))
    }

    /// Remove every book matching the filter
    async fn delete_book(
        &self,
        ctx: &Context<'_>,
        filter: Option<BookFilter>,
    ) -> Result<DeleteBookPayload> {
        let removed = service(ctx)?
            .delete(filter.as_ref())
            .await
            .map_err(|e| e.extend())?;
        Ok(DeleteBookPayload::new(removed))
    }
}
