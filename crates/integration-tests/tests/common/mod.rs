//! Shared harness: both transports on ephemeral ports with deterministic picks.

#![allow(dead_code)]

use jsonrpsee::server::ServerHandle;
use serde_json::Value;
use sleepwell_api_rest::{RestServer, RestServerConfig, RestServerHandle};
use sleepwell_api_rpc::{RpcServer, RpcServerConfig};
use sleepwell_core::domain::QuoteStore;
use sleepwell_core::port::{FixedTimeProvider, RoundRobinPicker};
use sleepwell_core::SleepService;
use std::sync::Arc;

pub struct TestServers {
    pub rest_url: String,
    pub rpc_url: String,
    rest: RestServerHandle,
    rpc: ServerHandle,
}

impl TestServers {
    pub async fn shutdown(mut self) {
        self.rest.stop();
        self.rest.stopped().await;
        let _ = self.rpc.stop();
        self.rpc.stopped().await;
    }
}

/// Service with a fixed clock and a round-robin picker starting at index 0
pub fn service_at(hour: u32) -> Arc<SleepService> {
    Arc::new(SleepService::new(
        Arc::new(QuoteStore::builtin().expect("builtin catalog")),
        Arc::new(FixedTimeProvider::at(hour, 0).expect("valid hour")),
        Arc::new(RoundRobinPicker::new()),
    ))
}

/// Both transports over one shared service
pub async fn spawn_shared(hour: u32) -> TestServers {
    let service = service_at(hour);
    spawn_with(service.clone(), service).await
}

/// Each transport gets its own service, so identical call sequences see
/// identical picks on both sides.
pub async fn spawn_mirrored(hour: u32) -> TestServers {
    spawn_with(service_at(hour), service_at(hour)).await
}

async fn spawn_with(rest_service: Arc<SleepService>, rpc_service: Arc<SleepService>) -> TestServers {
    let rest = RestServer::new(
        RestServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        rest_service,
    )
    .start()
    .await
    .expect("REST server starts");

    let (rpc, rpc_addr) = RpcServer::new(
        RpcServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        rpc_service,
    )
    .start()
    .await
    .expect("RPC server starts");

    TestServers {
        rest_url: format!("http://{}", rest.local_addr()),
        rpc_url: format!("http://{}", rpc_addr),
        rest,
        rpc,
    }
}

/// GET a REST path, returning status and JSON body
pub async fn rest_get(servers: &TestServers, path: &str) -> (u16, Value) {
    let response = reqwest::get(format!("{}{}", servers.rest_url, path))
        .await
        .expect("REST request");
    let status = response.status().as_u16();
    let body = response.json().await.expect("JSON body");
    (status, body)
}
