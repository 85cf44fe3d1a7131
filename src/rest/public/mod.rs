//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::BudaError;
use crate::rest::RestClient;
use crate::rest::endpoints;
use crate::types::FeeKind;

impl RestClient {
    /// Get the ticker for a market.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use buda_api_client::rest::RestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = RestClient::new();
    ///     let ticker = client.ticker("btc-clp").await?;
    ///     println!("Last price: {}", ticker.last_price);
    ///     Ok(())
    /// }
    /// ```
    pub async fn ticker(&self, market: &str) -> Result<Ticker, BudaError> {
        let response: TickerResponse = self.public_get(&endpoints::ticker(market)).await?;
        Ok(response.ticker)
    }

    /// Get the order book for a market.
    pub async fn order_book(&self, market: &str) -> Result<OrderBook, BudaError> {
        let response: OrderBookResponse = self.public_get(&endpoints::order_book(market)).await?;
        Ok(response.order_book)
    }

    /// Get recent trades for a market.
    ///
    /// # Arguments
    ///
    /// * `market` - Market identifier (e.g. "btc-clp").
    /// * `timestamp` - Only return trades at or before this time (epoch
    ///   milliseconds). Pass the previous page's `last_timestamp` to walk
    ///   backwards through history.
    /// * `limit` - Maximum number of entries to return.
    pub async fn trades(
        &self,
        market: &str,
        timestamp: Option<i64>,
        limit: Option<u32>,
    ) -> Result<TradesPage, BudaError> {
        let params = vec![
            ("timestamp", timestamp.map(|t| t.to_string())),
            ("limit", limit.map(|l| l.to_string())),
        ];
        let response: TradesResponse = self
            .public_get_with_params(&endpoints::trades(market), params)
            .await?;
        Ok(response.trades)
    }

    /// List all markets.
    pub async fn markets(&self) -> Result<Vec<Market>, BudaError> {
        let response: MarketsResponse = self.public_get(endpoints::MARKETS).await?;
        Ok(response.markets)
    }

    /// Get a single market's details.
    pub async fn market(&self, market: &str) -> Result<Market, BudaError> {
        let response: MarketResponse = self.public_get(&endpoints::market(market)).await?;
        Ok(response.market)
    }

    /// Get the deposit or withdrawal fee schedule for a currency.
    pub async fn fee_info(&self, currency: &str, kind: FeeKind) -> Result<FeeInfo, BudaError> {
        let response: FeeResponse = self.public_get(&endpoints::fees(currency, kind)).await?;
        Ok(response.fee)
    }
}
