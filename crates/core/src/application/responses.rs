// Operation results
//
// Serialized as-is into the JSON-RPC `result` member and the REST body, so
// both surfaces return the same shape.

use super::composer::DailyWisdom;
use crate::domain::{BedtimeRoutine, Category, QuoteRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub quote: QuoteRecord,
    /// False when the filters matched nothing and a random quote was returned
    pub matched_filters: bool,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipResponse {
    pub tip: QuoteRecord,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<QuoteRecord>,
    pub total_found: usize,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WisdomResponse {
    #[serde(flatten)]
    pub wisdom: DailyWisdom,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedtimeResponse {
    #[serde(flatten)]
    pub routine: BedtimeRoutine,
    /// Steps as display lines, in order
    pub rendered: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
    pub total_categories: usize,
}
