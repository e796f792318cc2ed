//! Sleepwell SDK - Rust Client Library
//!
//! Typed client for the Sleepwell quotes JSON-RPC server.
//!
//! # Example
//!
//! ```no_run
//! use sleepwell_sdk::{QuoteParams, SleepwellClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SleepwellClient::connect("http://127.0.0.1:9528").await?;
//!
//!     let response = client.get_quote(QuoteParams::default()).await?;
//!     println!("\"{}\" - {}", response.quote.text, response.quote.attribution());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::SleepwellClient;
pub use error::{Result, SdkError};
pub use types::{
    BedtimeParams, BedtimeResponse, CategoriesResponse, Category, Mood, OperationCatalog,
    QuoteParams, QuoteRecord, QuoteResponse, ReminderType, SearchParams, SearchResponse,
    StoreStatistics, TipResponse, WisdomParams, WisdomResponse,
};
