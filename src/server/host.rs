//! Server host for transport-agnostic API exposure
//!
//! `ServerHost` holds the state every exposure needs (the book service and
//! the configuration), independent of how requests arrive.

use crate::config::ServerConfig;
use crate::core::service::BookService;
use std::sync::Arc;

/// Host context shared by the GraphQL and REST exposures
///
/// # Example
///
/// ```rust,ignore
/// let host = Arc::new(ServerHost::new(
///     Arc::new(InMemoryBookStore::seeded()),
///     ServerConfig::default(),
/// ));
///
/// let rest_app = RestExposure::build_router(host.clone(), Vec::new());
/// let graphql_app = GraphQLExposure::build_router(host);
/// ```
pub struct ServerHost {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Book collection behind every resolver
    pub book_service: Arc<dyn BookService>,
}

impl ServerHost {
    pub fn new(book_service: Arc<dyn BookService>, config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            book_service,
        }
    }
}
