//! JSON-RPC Server
//!
//! Implements the JSON-RPC 2.0 server over HTTP. One method is registered per
//! row of the operation table, plus `list_operations`.

use crate::handler::RpcHandler;
use jsonrpsee::server::{RegisterMethodError, Server, ServerHandle};
use jsonrpsee::types::ErrorObjectOwned;
use jsonrpsee::RpcModule;
use serde_json::Value;
use sleepwell_core::{SleepService, OPERATIONS};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9528;

/// Method returning the operation catalog
pub const LIST_OPERATIONS_METHOD: &str = "list_operations";

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(config: RpcServerConfig, service: Arc<SleepService>) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(service)),
        }
    }

    /// Build the method table (usable without binding a socket)
    pub fn build_module(handler: Arc<RpcHandler>) -> Result<RpcModule<()>, RegisterMethodError> {
        let mut module = RpcModule::new(());

        for descriptor in OPERATIONS {
            let handler = handler.clone();
            module.register_method(descriptor.rpc_method, move |params, _, _| {
                let raw: Option<Value> = params.parse()?;
                handler.call(descriptor, raw)
            })?;
        }

        let handler_for_catalog = handler.clone();
        module.register_method(LIST_OPERATIONS_METHOD, move |_, _, _| {
            Ok::<_, ErrorObjectOwned>(handler_for_catalog.list_operations())
        })?;

        Ok(module)
    }

    /// Start the JSON-RPC server
    ///
    /// Returns the handle and the bound address (port 0 binds an ephemeral port).
    pub async fn start(self) -> Result<(ServerHandle, SocketAddr), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!(
            host = %self.config.host,
            port = %self.config.port,
            "Starting JSON-RPC server"
        );

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;

        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read local address: {}", e))?;

        let module = Self::build_module(self.handler.clone()).map_err(|e| e.to_string())?;

        info!(addr = %local_addr, methods = OPERATIONS.len() + 1, "JSON-RPC server started successfully");

        let handle = server.start(module);
        Ok((handle, local_addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonrpsee::core::params::ObjectParams;
    use jsonrpsee::rpc_params;
    use sleepwell_core::domain::QuoteStore;
    use sleepwell_core::port::{FixedTimeProvider, RoundRobinPicker};

    fn module() -> RpcModule<()> {
        let service = Arc::new(SleepService::new(
            Arc::new(QuoteStore::builtin().unwrap()),
            Arc::new(FixedTimeProvider::at(19, 0).unwrap()),
            Arc::new(RoundRobinPicker::new()),
        ));
        RpcServer::build_module(Arc::new(RpcHandler::new(service))).unwrap()
    }

    #[test]
    fn test_registers_every_table_method() {
        let module = module();
        for descriptor in OPERATIONS {
            assert!(
                module.method(descriptor.rpc_method).is_some(),
                "{} not registered",
                descriptor.rpc_method
            );
        }
        assert!(module.method(LIST_OPERATIONS_METHOD).is_some());
    }

    #[tokio::test]
    async fn test_call_without_params_uses_defaults() {
        let module = module();
        let value: Value = module
            .call("get_daily_sleep_wisdom", rpc_params![])
            .await
            .unwrap();

        assert_eq!(value["period"], "evening");
        assert_eq!(value["tip"]["category"], "sleep_hygiene");
    }

    #[tokio::test]
    async fn test_call_with_named_params() {
        let module = module();
        let mut params = ObjectParams::new();
        params.insert("mood", "calm").unwrap();

        let value: Value = module
            .call("get_inspirational_quote", params)
            .await
            .unwrap();

        assert_eq!(value["quote"]["mood"], "calm");
        assert_eq!(value["matched_filters"], true);
    }

    #[tokio::test]
    async fn test_call_with_invalid_params_fails() {
        let module = module();
        let mut params = ObjectParams::new();
        params.insert("limit", 3).unwrap();

        let result = module
            .call::<_, Value>("search_sleep_quotes", params)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_start_binds_ephemeral_port() {
        let service = Arc::new(SleepService::new(
            Arc::new(QuoteStore::builtin().unwrap()),
            Arc::new(FixedTimeProvider::at(19, 0).unwrap()),
            Arc::new(RoundRobinPicker::new()),
        ));
        let server = RpcServer::new(
            RpcServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            service,
        );

        let (handle, addr) = server.start().await.unwrap();
        assert_ne!(addr.port(), 0);
        handle.stop().unwrap();
    }
}
