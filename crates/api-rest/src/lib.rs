//! REST API Layer
//!
//! Serves the operation table as plain JSON over HTTP GET routes, plus `/`
//! (server info) and `/health`.

pub mod error;
pub mod routes;
pub mod server;

pub use server::{build_router, RestServer, RestServerConfig, RestServerHandle};
