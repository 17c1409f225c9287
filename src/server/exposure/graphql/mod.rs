//! GraphQL API exposure
//!
//! Routes:
//! - `POST /graphql`: query and mutation execution
//! - `GET /graphql`: GraphQL Playground (when enabled in config)
//! - `GET /graphql/schema`: schema SDL

mod schema;

pub use schema::{
    AddBookPayload, BookSchema, DeleteBookPayload, MutationRoot, QueryRoot, UpdateBookPayload,
    build_schema,
};

use crate::server::host::ServerHost;
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use std::sync::Arc;

/// Path of the GraphQL endpoint
pub const GRAPHQL_PATH: &str = "/graphql";

/// GraphQL API exposure implementation
pub struct GraphQLExposure;

impl GraphQLExposure {
    /// Build the GraphQL router from a host
    ///
    /// The schema is built once here and shared by every request.
    pub fn build_router(host: Arc<ServerHost>) -> Router {
        let schema = build_schema(host.book_service.clone(), &host.config.graphql);

        let endpoint = if host.config.graphql.playground {
            get(graphql_playground).post(graphql_handler)
        } else {
            post(graphql_handler)
        };

        Router::new()
            .route(GRAPHQL_PATH, endpoint)
            .route("/graphql/schema", get(graphql_sdl))
            .with_state(schema)
    }
}

/// Handler for GraphQL queries and mutations
async fn graphql_handler(State(schema): State<BookSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Handler for the GraphQL Playground UI
async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new(GRAPHQL_PATH)))
}

/// Handler for GraphQL schema SDL export
async fn graphql_sdl(State(schema): State<BookSchema>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        schema.sdl(),
    )
}
