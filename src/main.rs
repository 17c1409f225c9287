//! Book store GraphQL server
//!
//! Serves the seeded in-memory collection on `PORT` (default 4000).
//! Log verbosity follows `RUST_LOG`.

use bookstore::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bookstore=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::default().with_env_overrides()?;

    ServerBuilder::new()
        .with_config(config)
        .with_book_service(InMemoryBookStore::seeded())
        .serve()
        .await
}
