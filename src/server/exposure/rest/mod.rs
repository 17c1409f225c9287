//! REST API exposure
//!
//! The book collection itself is only reachable through GraphQL; REST
//! carries the liveness probes used by process supervisors.

use crate::core::error::BookStoreError;
use crate::server::host::ServerHost;
use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// `custom_routes` are merged as-is after the health routes.
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Router {
        let mut app = Self::health_routes(host);

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app
    }

    /// Build health check routes
    fn health_routes(host: Arc<ServerHost>) -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
            .with_state(host)
    }

    /// Health check endpoint handler
    async fn health_check(State(host): State<Arc<ServerHost>>) -> Result<Json<Value>, BookStoreError> {
        let books = host.book_service.count().await?;

        Ok(Json(json!({
            "status": "ok",
            "service": "bookstore",
            "books": books
        })))
    }
}
