//! Sleepwell Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{
    BedtimeParams, BedtimeResponse, CategoriesResponse, OperationCatalog, QuoteParams,
    QuoteResponse, SearchParams, SearchResponse, StoreStatistics, TipResponse, WisdomParams,
    WisdomResponse,
};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use sleepwell_core::Operation;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const LIST_OPERATIONS_METHOD: &str = "list_operations";

/// Sleepwell quotes client
///
/// Provides a typed interface to the JSON-RPC server. Method names come from
/// the shared operation table.
///
/// # Example
///
/// ```no_run
/// use sleepwell_sdk::SleepwellClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SleepwellClient::connect("http://127.0.0.1:9528").await?;
/// # Ok(())
/// # }
/// ```
pub struct SleepwellClient {
    client: HttpClient,
}

impl SleepwellClient {
    /// Connect to a Sleepwell server
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9528`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(REQUEST_TIMEOUT)
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Get an inspirational quote
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use sleepwell_sdk::{Mood, QuoteParams, SleepwellClient};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = SleepwellClient::connect("http://127.0.0.1:9528").await?;
    /// let response = client
    ///     .get_quote(QuoteParams {
    ///         mood: Some(Mood::Calm),
    ///         ..Default::default()
    ///     })
    ///     .await?;
    /// println!("{}", response.quote.text);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_quote(&self, params: QuoteParams) -> Result<QuoteResponse> {
        let method = Operation::GetQuote.descriptor().rpc_method;
        let response: QuoteResponse = self.client.request(method, rpc_params![params]).await?;

        Ok(response)
    }

    /// Get a sleep hygiene tip
    pub async fn get_tip(&self) -> Result<TipResponse> {
        let method = Operation::GetTip.descriptor().rpc_method;
        let response: TipResponse = self.client.request(method, rpc_params![]).await?;

        Ok(response)
    }

    /// Search quotes by keyword
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use sleepwell_sdk::{SearchParams, SleepwellClient};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = SleepwellClient::connect("http://127.0.0.1:9528").await?;
    /// let response = client.search(SearchParams::new("brain")).await?;
    /// for quote in response.results {
    ///     println!("#{} {}", quote.id, quote.text);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, params: SearchParams) -> Result<SearchResponse> {
        let method = Operation::SearchQuotes.descriptor().rpc_method;
        let response: SearchResponse = self.client.request(method, rpc_params![params]).await?;

        Ok(response)
    }

    /// Get the daily quote, with a tip when `include_tip` is set
    pub async fn daily_wisdom(&self, include_tip: bool) -> Result<WisdomResponse> {
        let method = Operation::GetDailyWisdom.descriptor().rpc_method;
        let params = WisdomParams { include_tip };
        let response: WisdomResponse = self.client.request(method, rpc_params![params]).await?;

        Ok(response)
    }

    /// Build a bedtime routine reminder
    pub async fn bedtime_reminder(&self, params: BedtimeParams) -> Result<BedtimeResponse> {
        let method = Operation::GetBedtimeReminder.descriptor().rpc_method;
        let response: BedtimeResponse = self.client.request(method, rpc_params![params]).await?;

        Ok(response)
    }

    /// List categories present in the store
    pub async fn categories(&self) -> Result<CategoriesResponse> {
        let method = Operation::ListCategories.descriptor().rpc_method;
        let response: CategoriesResponse = self.client.request(method, rpc_params![]).await?;

        Ok(response)
    }

    /// Quote counts per category, time of day and mood
    pub async fn statistics(&self) -> Result<StoreStatistics> {
        let method = Operation::GetStatistics.descriptor().rpc_method;
        let response: StoreStatistics = self.client.request(method, rpc_params![]).await?;

        Ok(response)
    }

    /// Operation catalog with parameter schemas
    pub async fn list_operations(&self) -> Result<OperationCatalog> {
        let response: OperationCatalog = self
            .client
            .request(LIST_OPERATIONS_METHOD, rpc_params![])
            .await?;

        Ok(response)
    }

    /// Call any method with raw JSON parameters
    pub async fn call_raw(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let response: serde_json::Value = self.client.request(method, rpc_params![params]).await?;

        Ok(response)
    }
}
