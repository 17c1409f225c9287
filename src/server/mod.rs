//! Server module for building the HTTP server
//!
//! `ServerBuilder` assembles a `ServerHost` and exposes it through:
//! - GraphQL at `/graphql` (execution, playground, SDL export)
//! - REST health probes at `/health` and `/healthz`

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use exposure::{GraphQLExposure, RestExposure};
pub use host::ServerHost;
