//! RPC Method Handlers
//!
//! Validates parameters against the operation row and runs the service.

use crate::error::to_rpc_error;
use jsonrpsee::types::ErrorObjectOwned;
use serde_json::{json, Value};
use sleepwell_core::{OperationDescriptor, SleepService};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    service: Arc<SleepService>,
}

impl RpcHandler {
    pub fn new(service: Arc<SleepService>) -> Self {
        Self { service }
    }

    /// Run one table operation
    pub fn call(
        &self,
        descriptor: &OperationDescriptor,
        raw: Option<Value>,
    ) -> Result<Value, ErrorObjectOwned> {
        let started = Instant::now();

        match self.service.execute(descriptor, raw) {
            Ok(value) => {
                debug!(
                    transport = "rpc",
                    method = descriptor.rpc_method,
                    operation = ?descriptor.operation,
                    elapsed_us = started.elapsed().as_micros() as u64,
                    "RPC call completed"
                );
                Ok(value)
            }
            Err(e) => {
                warn!(
                    transport = "rpc",
                    method = descriptor.rpc_method,
                    operation = ?descriptor.operation,
                    error = %e,
                    "RPC call rejected"
                );
                Err(to_rpc_error(e))
            }
        }
    }

    /// list_operations
    pub fn list_operations(&self) -> Value {
        json!({
            "server": "sleepwell-quotes",
            "version": sleepwell_core::VERSION,
            "operations": self.service.describe_operations(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::code;
    use sleepwell_core::domain::QuoteStore;
    use sleepwell_core::port::{FixedTimeProvider, SeededPicker};
    use sleepwell_core::Operation;

    fn handler() -> RpcHandler {
        RpcHandler::new(Arc::new(SleepService::new(
            Arc::new(QuoteStore::builtin().unwrap()),
            Arc::new(FixedTimeProvider::at(22, 30).unwrap()),
            Arc::new(SeededPicker::new(5)),
        )))
    }

    #[test]
    fn test_call_returns_result() {
        let value = handler()
            .call(
                Operation::SearchQuotes.descriptor(),
                Some(json!({ "query": "Dalai" })),
            )
            .unwrap();
        assert_eq!(value["total_found"], json!(1));
        assert_eq!(value["results"][0]["id"], json!(2));
    }

    #[test]
    fn test_call_maps_validation_error() {
        let err = handler()
            .call(
                Operation::GetQuote.descriptor(),
                Some(json!({ "mood": "grumpy" })),
            )
            .unwrap_err();
        assert_eq!(err.code(), code::VALIDATION_ERROR);
        assert!(err.message().contains("mood"));
    }

    #[test]
    fn test_call_rejects_missing_query() {
        let err = handler()
            .call(Operation::SearchQuotes.descriptor(), None)
            .unwrap_err();
        assert_eq!(err.code(), code::VALIDATION_ERROR);
    }

    #[test]
    fn test_call_rejects_bad_bedtime() {
        let err = handler()
            .call(
                Operation::GetBedtimeReminder.descriptor(),
                Some(json!({ "user_bedtime": "10pm" })),
            )
            .unwrap_err();
        assert_eq!(err.code(), code::VALIDATION_ERROR);
    }

    #[test]
    fn test_list_operations() {
        let value = handler().list_operations();
        assert_eq!(value["operations"].as_array().map(Vec::len), Some(7));
    }
}
