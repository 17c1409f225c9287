//! GraphQL schema tests
//!
//! Requests are executed directly against the schema (no HTTP), with the
//! seeded in-memory store behind it.

use async_graphql::{Request, Variables};
use bookstore::prelude::*;
use serde_json::{Value, json};
use std::sync::Arc;

struct Harness {
    schema: BookSchema,
    store: InMemoryBookStore,
}

impl Harness {
    fn new() -> Self {
        let store = InMemoryBookStore::seeded();
        let schema = build_schema(Arc::new(store.clone()), &GraphQLConfig::default());
        Self { schema, store }
    }

    /// Execute and return `data`, failing the test on any GraphQL error
    async fn data(&self, query: &str, variables: Value) -> Value {
        let request = Request::new(query).variables(Variables::from_json(variables));
        let response = self.schema.execute(request).await;
        assert!(
            response.errors.is_empty(),
            "unexpected errors: {:?}",
            response.errors
        );
        response.data.into_json().unwrap()
    }

    /// Execute and return the full response as JSON
    async fn response(&self, query: &str) -> Value {
        let response = self.schema.execute(query).await;
        serde_json::to_value(&response).unwrap()
    }
}

// =============================================================================
// Queries
// =============================================================================

mod query_tests {
    use super::*;

    #[tokio::test]
    async fn test_query_book_without_filter() {
        let harness = Harness::new();
        let data = harness
            .data("{ queryBook { id title author } }", json!({}))
            .await;

        assert_eq!(
            data["queryBook"],
            json!([
                {"id": "abc", "title": "The Awakening", "author": "Kate Chopin"},
                {"id": "zxy", "title": "City of Glass", "author": "Paul Auster"}
            ])
        );
    }

    #[tokio::test]
    async fn test_query_book_by_author() {
        let harness = Harness::new();
        let data = harness
            .data(
                "query($f: BookFilter) { queryBook(filter: $f) { id title author } }",
                json!({"f": {"author": "Paul Auster"}}),
            )
            .await;

        assert_eq!(
            data["queryBook"],
            json!([{"id": "zxy", "title": "City of Glass", "author": "Paul Auster"}])
        );
    }

    #[tokio::test]
    async fn test_books_lists_everything() {
        let harness = Harness::new();
        let data = harness.data("{ books { id } }", json!({})).await;
        assert_eq!(data["books"], json!([{"id": "abc"}, {"id": "zxy"}]));
    }

    #[tokio::test]
    async fn test_get_book() {
        let harness = Harness::new();
        let data = harness
            .data(r#"{ getBook(id: "abc") { title author } }"#, json!({}))
            .await;
        assert_eq!(
            data["getBook"],
            json!({"title": "The Awakening", "author": "Kate Chopin"})
        );
    }

    #[tokio::test]
    async fn test_get_book_missing_id_is_user_error() {
        let harness = Harness::new();
        let body = harness
            .response(r#"{ getBook(id: "missing") { id } }"#)
            .await;

        let error = &body["errors"][0];
        assert_eq!(error["message"], "Failed to find record with given ID");
        assert_eq!(error["extensions"]["code"], "BAD_USER_INPUT");
        assert_eq!(error["path"], json!(["getBook"]));
        assert!(body["data"].is_null());
    }
}

// =============================================================================
// Mutations
// =============================================================================

mod mutation_tests {
    use super::*;

    #[tokio::test]
    async fn test_add_book_list() {
        let harness = Harness::new();
        let data = harness
            .data(
                r#"mutation($input: [AddBookInput!]!) {
                    addBook(input: $input) { numUids book { id title author } }
                }"#,
                json!({"input": [
                    {"title": "Ghosts", "author": "Paul Auster"},
                    {"title": "Bartleby", "author": "Herman Melville"}
                ]}),
            )
            .await;

        let books = data["addBook"]["book"].as_array().unwrap();
        assert_eq!(data["addBook"]["numUids"], 2);
        assert_eq!(books.len(), 2);
        assert_eq!(books[0]["title"], "Ghosts");
        assert_eq!(books[1]["title"], "Bartleby");
        assert_ne!(books[0]["id"], "abc");
        assert_ne!(books[0]["id"], books[1]["id"]);

        assert_eq!(harness.store.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_add_book_accepts_single_object() {
        let harness = Harness::new();
        let data = harness
            .data(
                r#"mutation { addBook(input: { title: "T", author: "A" }) { book { title author } } }"#,
                json!({}),
            )
            .await;

        assert_eq!(data["addBook"]["book"], json!([{"title": "T", "author": "A"}]));
        assert_eq!(harness.store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_add_book_payload_filter_narrows_new_books_only() {
        let harness = Harness::new();
        let data = harness
            .data(
                r#"mutation {
                    addBook(input: [
                        { title: "Ghosts", author: "Paul Auster" },
                        { title: "Bartleby", author: "Herman Melville" }
                    ]) {
                        book(filter: { author: "Paul Auster" }) { title }
                    }
                }"#,
                json!({}),
            )
            .await;

        // "City of Glass" is also by Paul Auster but was not created here
        assert_eq!(data["addBook"]["book"], json!([{"title": "Ghosts"}]));
    }

    #[tokio::test]
    async fn test_add_book_blank_title_is_rejected() {
        let harness = Harness::new();
        let body = harness
            .response(r#"mutation { addBook(input: { title: "", author: "A" }) { numUids } }"#)
            .await;

        assert_eq!(body["errors"][0]["extensions"]["code"], "BAD_USER_INPUT");
        assert_eq!(harness.store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_book_replaces_by_id() {
        let harness = Harness::new();
        let data = harness
            .data(
                r#"mutation {
                    updateBook(input: { filter: { id: "abc" }, values: { title: "New" } }) {
                        book { id title author }
                    }
                }"#,
                json!({}),
            )
            .await;

        assert_eq!(
            data["updateBook"]["book"],
            json!([{"id": "abc", "title": "New", "author": "Kate Chopin"}])
        );

        let after = harness
            .data(r#"{ queryBook(filter: { id: "abc" }) { title } }"#, json!({}))
            .await;
        assert_eq!(after["queryBook"], json!([{"title": "New"}]));
        assert_eq!(harness.store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_book_without_filter_updates_all() {
        let harness = Harness::new();
        let data = harness
            .data(
                r#"mutation {
                    updateBook(input: { values: { author: "Anonymous" } }) {
                        numUids
                        book(filter: { title: "City of Glass" }) { id author }
                    }
                }"#,
                json!({}),
            )
            .await;

        assert_eq!(data["updateBook"]["numUids"], 2);
        assert_eq!(
            data["updateBook"]["book"],
            json!([{"id": "zxy", "author": "Anonymous"}])
        );
    }

    #[tokio::test]
    async fn test_delete_book() {
        let harness = Harness::new();
        let data = harness
            .data(
                r#"mutation { deleteBook(filter: { id: "zxy" }) { numUids book { id title } } }"#,
                json!({}),
            )
            .await;

        assert_eq!(data["deleteBook"]["numUids"], 1);
        assert_eq!(
            data["deleteBook"]["book"],
            json!([{"id": "zxy", "title": "City of Glass"}])
        );

        let after = harness
            .data(r#"{ queryBook(filter: { id: "zxy" }) { id } }"#, json!({}))
            .await;
        assert_eq!(after["queryBook"], json!([]));
    }

    #[tokio::test]
    async fn test_delete_book_without_filter_removes_everything() {
        let harness = Harness::new();
        let data = harness
            .data("mutation { deleteBook { numUids } }", json!({}))
            .await;
        assert_eq!(data["deleteBook"]["numUids"], 2);
        assert_eq!(harness.store.count().await.unwrap(), 0);
    }
}

// =============================================================================
// Schema
// =============================================================================

mod schema_tests {
    use super::*;

    #[tokio::test]
    async fn test_introspection_enabled_by_default() {
        let harness = Harness::new();
        let data = harness
            .data("{ __schema { mutationType { name } } }", json!({}))
            .await;
        assert_eq!(data["__schema"]["mutationType"]["name"], "Mutation");
    }

    #[tokio::test]
    async fn test_unknown_field_is_engine_error() {
        let harness = Harness::new();
        let body = harness.response("{ queryBook { isbn } }").await;
        assert!(body["errors"][0]["message"].as_str().unwrap().contains("isbn"));
    }
}
