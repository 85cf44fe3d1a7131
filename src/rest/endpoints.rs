//! Buda REST API endpoint paths.
//!
//! All paths live under the `/api/v2` prefix. Most embed a market, currency,
//! or resource id segment, so they are built by functions rather than
//! constants.

use crate::types::FeeKind;

/// Base URL for the Buda REST API.
pub const BUDA_BASE_URL: &str = "https://www.buda.com";

/// Path prefix shared by every endpoint.
pub const API_PREFIX: &str = "/api/v2";

/// List all markets.
pub const MARKETS: &str = "/api/v2/markets";

/// Cancel-all and batch operations on orders.
pub const ORDERS: &str = "/api/v2/orders";

/// List all balances.
pub const BALANCES: &str = "/api/v2/balances";

/// List balance events.
pub const BALANCE_EVENTS: &str = "/api/v2/balance_events";

/// Details for a single market.
pub fn market(market: &str) -> String {
    format!("{API_PREFIX}/markets/{market}")
}

/// Ticker for a market.
pub fn ticker(market: &str) -> String {
    format!("{API_PREFIX}/markets/{market}/ticker")
}

/// Order book for a market.
pub fn order_book(market: &str) -> String {
    format!("{API_PREFIX}/markets/{market}/order_book")
}

/// Recent trades for a market.
pub fn trades(market: &str) -> String {
    format!("{API_PREFIX}/markets/{market}/trades")
}

/// Deposit or withdrawal fee schedule for a currency.
pub fn fees(currency: &str, kind: FeeKind) -> String {
    format!("{API_PREFIX}/currencies/{currency}/fees/{kind}")
}

/// Quotation simulation for a market.
pub fn quotations(market: &str) -> String {
    format!("{API_PREFIX}/markets/{market}/quotations")
}

/// Balance for a single currency.
pub fn balance(currency: &str) -> String {
    format!("{API_PREFIX}/balances/{currency}")
}

/// Orders listing and placement for a market.
pub fn market_orders(market: &str) -> String {
    format!("{API_PREFIX}/markets/{market}/orders")
}

/// A single order by id.
pub fn order(id: u64) -> String {
    format!("{API_PREFIX}/orders/{id}")
}

/// Deposit history and fiat deposit creation for a currency.
pub fn deposits(currency: &str) -> String {
    format!("{API_PREFIX}/currencies/{currency}/deposits")
}

/// Withdrawal history and creation for a currency.
pub fn withdrawals(currency: &str) -> String {
    format!("{API_PREFIX}/currencies/{currency}/withdrawals")
}

/// Withdrawal simulation for a currency.
pub fn simulated_withdrawals(currency: &str) -> String {
    format!("{API_PREFIX}/currencies/{currency}/simulated_withdrawals")
}

/// Receive address listing and creation for a currency.
pub fn receive_addresses(currency: &str) -> String {
    format!("{API_PREFIX}/currencies/{currency}/receive_addresses")
}

/// A single receive address by id.
pub fn receive_address(currency: &str, id: u64) -> String {
    format!("{API_PREFIX}/currencies/{currency}/receive_addresses/{id}")
}
