//! SDK Request/Response Types
//!
//! Shared with the server through sleepwell-core, so both ends agree on shape.

use serde::Deserialize;

pub use sleepwell_core::application::{
    BedtimeParams, BedtimeResponse, CategoriesResponse, QuoteParams, QuoteResponse, SearchParams,
    SearchResponse, TipResponse, WisdomParams, WisdomResponse,
};
pub use sleepwell_core::domain::{Category, Mood, QuoteRecord, ReminderType, StoreStatistics};

/// Response from list_operations
#[derive(Debug, Clone, Deserialize)]
pub struct OperationCatalog {
    pub server: String,
    pub version: String,
    pub operations: Vec<serde_json::Value>,
}
