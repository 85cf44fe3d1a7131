//! Trait definition for the Buda REST API client.
//!
//! [`BudaClient`] abstracts the full operation surface, enabling:
//! - Mock implementations for testing
//! - Decorator pattern (e.g. a caching or throttling wrapper)
//! - Alternative implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use buda_api_client::rest::{BudaClient, RestClient};
//!
//! async fn spread<C: BudaClient>(client: &C) -> Result<(), buda_api_client::BudaError> {
//!     let ticker = client.ticker("btc-clp").await?;
//!     println!("{} / {}", ticker.max_bid, ticker.min_ask);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use rust_decimal::Decimal;

use crate::error::BudaError;
use crate::rest::RestClient;
use crate::rest::private::{
    Balance, BalanceEventsPage, BatchDiff, Deposit, DepositsPage, Order, OrderRequest, OrdersPage,
    OrdersQuery, Quotation, QuotationRequest, ReceiveAddress, Withdrawal, WithdrawalRequest,
    WithdrawalsPage,
};
use crate::rest::public::{FeeInfo, Market, OrderBook, Ticker, TradesPage};
use crate::types::FeeKind;

/// Trait defining all Buda REST API operations.
///
/// All methods are async and return `Result<T, BudaError>`.
pub trait BudaClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get the ticker for a market.
    fn ticker(&self, market: &str) -> impl Future<Output = Result<Ticker, BudaError>> + Send;

    /// Get the order book for a market.
    fn order_book(&self, market: &str)
    -> impl Future<Output = Result<OrderBook, BudaError>> + Send;

    /// Get recent trades for a market.
    fn trades(
        &self,
        market: &str,
        timestamp: Option<i64>,
        limit: Option<u32>,
    ) -> impl Future<Output = Result<TradesPage, BudaError>> + Send;

    /// List all markets.
    fn markets(&self) -> impl Future<Output = Result<Vec<Market>, BudaError>> + Send;

    /// Get a single market's details.
    fn market(&self, market: &str) -> impl Future<Output = Result<Market, BudaError>> + Send;

    /// Get the deposit or withdrawal fee schedule for a currency.
    fn fee_info(
        &self,
        currency: &str,
        kind: FeeKind,
    ) -> impl Future<Output = Result<FeeInfo, BudaError>> + Send;

    // ========== Private Endpoints ==========

    /// Simulate an order against the current book without placing it.
    fn quotation(
        &self,
        market: &str,
        request: &QuotationRequest,
    ) -> impl Future<Output = Result<Quotation, BudaError>> + Send;

    /// Get balances for every currency in the account.
    fn balances(&self) -> impl Future<Output = Result<Vec<Balance>, BudaError>> + Send;

    /// Get the balance for a single currency.
    fn balance(&self, currency: &str) -> impl Future<Output = Result<Balance, BudaError>> + Send;

    /// List entries from the account's balance event log.
    fn balance_events(
        &self,
        currencies: &[&str],
        event_names: &[&str],
        page: Option<u32>,
        per: Option<u32>,
    ) -> impl Future<Output = Result<BalanceEventsPage, BudaError>> + Send;

    /// List orders in a market.
    fn orders(
        &self,
        market: &str,
        query: &OrdersQuery,
    ) -> impl Future<Output = Result<OrdersPage, BudaError>> + Send;

    /// Place a new order in a market.
    fn new_order(
        &self,
        market: &str,
        request: &OrderRequest,
    ) -> impl Future<Output = Result<Order, BudaError>> + Send;

    /// Request cancelation of an order.
    fn cancel_order(&self, id: u64) -> impl Future<Output = Result<Order, BudaError>> + Send;

    /// Request cancelation of every open order.
    fn cancel_all_orders(
        &self,
        market: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Order>, BudaError>> + Send;

    /// Get the current state of a single order.
    fn order_details(&self, id: u64) -> impl Future<Output = Result<Order, BudaError>> + Send;

    /// Apply a batch of order operations in one request.
    fn batch_orders(
        &self,
        diff: &BatchDiff,
    ) -> impl Future<Output = Result<Vec<Order>, BudaError>> + Send;

    /// List deposits for a currency.
    fn deposits(
        &self,
        currency: &str,
        page: Option<u32>,
        per: Option<u32>,
    ) -> impl Future<Output = Result<DepositsPage, BudaError>> + Send;

    /// List withdrawals for a currency.
    fn withdrawals(
        &self,
        currency: &str,
        page: Option<u32>,
        per: Option<u32>,
    ) -> impl Future<Output = Result<WithdrawalsPage, BudaError>> + Send;

    /// Request a withdrawal.
    fn new_withdrawal(
        &self,
        currency: &str,
        request: &WithdrawalRequest,
    ) -> impl Future<Output = Result<Withdrawal, BudaError>> + Send;

    /// Simulate a withdrawal to preview its fee.
    fn simulate_withdrawal(
        &self,
        currency: &str,
        request: &WithdrawalRequest,
    ) -> impl Future<Output = Result<Withdrawal, BudaError>> + Send;

    /// Announce an incoming fiat deposit.
    fn new_fiat_deposit(
        &self,
        currency: &str,
        amount: Decimal,
    ) -> impl Future<Output = Result<Deposit, BudaError>> + Send;

    /// Create a new crypto receive address.
    fn new_receive_address(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<ReceiveAddress, BudaError>> + Send;

    /// Get a previously created receive address.
    fn receive_address(
        &self,
        currency: &str,
        id: u64,
    ) -> impl Future<Output = Result<ReceiveAddress, BudaError>> + Send;

    /// List all receive addresses for a currency.
    fn receive_addresses(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<Vec<ReceiveAddress>, BudaError>> + Send;
}

impl BudaClient for RestClient {
    async fn ticker(&self, market: &str) -> Result<Ticker, BudaError> {
        RestClient::ticker(self, market).await
    }

    async fn order_book(&self, market: &str) -> Result<OrderBook, BudaError> {
        RestClient::order_book(self, market).await
    }

    async fn trades(
        &self,
        market: &str,
        timestamp: Option<i64>,
        limit: Option<u32>,
    ) -> Result<TradesPage, BudaError> {
        RestClient::trades(self, market, timestamp, limit).await
    }

    async fn markets(&self) -> Result<Vec<Market>, BudaError> {
        RestClient::markets(self).await
    }

    async fn market(&self, market: &str) -> Result<Market, BudaError> {
        RestClient::market(self, market).await
    }

    async fn fee_info(&self, currency: &str, kind: FeeKind) -> Result<FeeInfo, BudaError> {
        RestClient::fee_info(self, currency, kind).await
    }

    async fn quotation(
        &self,
        market: &str,
        request: &QuotationRequest,
    ) -> Result<Quotation, BudaError> {
        RestClient::quotation(self, market, request).await
    }

    async fn balances(&self) -> Result<Vec<Balance>, BudaError> {
        RestClient::balances(self).await
    }

    async fn balance(&self, currency: &str) -> Result<Balance, BudaError> {
        RestClient::balance(self, currency).await
    }

    async fn balance_events(
        &self,
        currencies: &[&str],
        event_names: &[&str],
        page: Option<u32>,
        per: Option<u32>,
    ) -> Result<BalanceEventsPage, BudaError> {
        RestClient::balance_events(self, currencies, event_names, page, per).await
    }

    async fn orders(&self, market: &str, query: &OrdersQuery) -> Result<OrdersPage, BudaError> {
        RestClient::orders(self, market, query).await
    }

    async fn new_order(&self, market: &str, request: &OrderRequest) -> Result<Order, BudaError> {
        RestClient::new_order(self, market, request).await
    }

    async fn cancel_order(&self, id: u64) -> Result<Order, BudaError> {
        RestClient::cancel_order(self, id).await
    }

    async fn cancel_all_orders(&self, market: Option<&str>) -> Result<Vec<Order>, BudaError> {
        RestClient::cancel_all_orders(self, market).await
    }

    async fn order_details(&self, id: u64) -> Result<Order, BudaError> {
        RestClient::order_details(self, id).await
    }

    async fn batch_orders(&self, diff: &BatchDiff) -> Result<Vec<Order>, BudaError> {
        RestClient::batch_orders(self, diff).await
    }

    async fn deposits(
        &self,
        currency: &str,
        page: Option<u32>,
        per: Option<u32>,
    ) -> Result<DepositsPage, BudaError> {
        RestClient::deposits(self, currency, page, per).await
    }

    async fn withdrawals(
        &self,
        currency: &str,
        page: Option<u32>,
        per: Option<u32>,
    ) -> Result<WithdrawalsPage, BudaError> {
        RestClient::withdrawals(self, currency, page, per).await
    }

    async fn new_withdrawal(
        &self,
        currency: &str,
        request: &WithdrawalRequest,
    ) -> Result<Withdrawal, BudaError> {
        RestClient::new_withdrawal(self, currency, request).await
    }

    async fn simulate_withdrawal(
        &self,
        currency: &str,
        request: &WithdrawalRequest,
    ) -> Result<Withdrawal, BudaError> {
        RestClient::simulate_withdrawal(self, currency, request).await
    }

    async fn new_fiat_deposit(
        &self,
        currency: &str,
        amount: Decimal,
    ) -> Result<Deposit, BudaError> {
        RestClient::new_fiat_deposit(self, currency, amount).await
    }

    async fn new_receive_address(&self, currency: &str) -> Result<ReceiveAddress, BudaError> {
        RestClient::new_receive_address(self, currency).await
    }

    async fn receive_address(&self, currency: &str, id: u64) -> Result<ReceiveAddress, BudaError> {
        RestClient::receive_address(self, currency, id).await
    }

    async fn receive_addresses(&self, currency: &str) -> Result<Vec<ReceiveAddress>, BudaError> {
        RestClient::receive_addresses(self, currency).await
    }
}
