//! JSON-RPC API Layer
//!
//! Implements the JSON-RPC 2.0 surface of Sleepwell Quotes. Method names and
//! parameter schemas come from the shared operation table in `sleepwell-core`.

pub mod error;
pub mod handler;
pub mod server;

pub use server::{RpcServer, RpcServerConfig};
