//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::serde_helpers::empty_string_as_none;
use crate::types::{Amount, OrderSide, OrderState, PriceType, TransferState};

/// Account balance for a single currency.
#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    /// Currency code (e.g. "btc").
    pub id: String,
    /// Owning account, when reported.
    #[serde(default)]
    pub account_id: Option<i64>,
    /// Total balance.
    pub amount: Amount,
    /// Balance available for trading and withdrawal.
    pub available_amount: Amount,
    /// Balance locked by open orders.
    pub frozen_amount: Amount,
    /// Balance locked by withdrawals in flight.
    pub pending_withdraw_amount: Amount,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BalancesResponse {
    pub balances: Vec<Balance>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BalanceResponse {
    pub balance: Balance,
}

/// Pagination metadata attached to listing responses.
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// Total number of records.
    #[serde(default)]
    pub total_count: Option<u64>,
    /// The page this response covers.
    #[serde(default)]
    pub current_page: Option<u32>,
}

/// An order as reported by the exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Order identifier.
    pub id: u64,
    /// Market the order belongs to.
    pub market_id: String,
    /// Owning account, when reported.
    #[serde(default)]
    pub account_id: Option<i64>,
    /// Bid or ask.
    #[serde(rename = "type")]
    pub side: OrderSide,
    /// Lifecycle state.
    pub state: OrderState,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Currency fees are charged in.
    #[serde(default)]
    pub fee_currency: Option<String>,
    /// Limit or market.
    pub price_type: PriceType,
    /// Limit price, absent for market orders.
    #[serde(default)]
    pub limit: Option<Amount>,
    /// Amount still open.
    pub amount: Amount,
    /// Amount at placement.
    pub original_amount: Amount,
    /// Amount already executed.
    pub traded_amount: Amount,
    /// Total exchanged in quote currency.
    pub total_exchanged: Amount,
    /// Fees paid so far.
    pub paid_fee: Amount,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrderResponse {
    pub order: Order,
}

/// A page of orders with pagination metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersPage {
    /// The orders on this page.
    pub orders: Vec<Order>,
    /// Pagination metadata.
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Filter for listing orders in a market.
#[derive(Debug, Clone, Default)]
pub struct OrdersQuery {
    /// Results per page.
    pub per: Option<u32>,
    /// Page number, 1-based.
    pub page: Option<u32>,
    /// Only orders in this state.
    pub state: Option<OrderState>,
    /// Only orders that exchanged at least this much.
    pub minimum_exchanged: Option<Decimal>,
}

/// Parameters for placing an order.
///
/// Serialized inside an `{"order": ...}` envelope with numeric price and
/// amount fields:
/// `{"order":{"type":"bid","price_type":"limit","limit":835875,"amount":0.05}}`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    /// Bid or ask.
    #[serde(rename = "type")]
    pub side: OrderSide,
    /// Limit or market.
    pub price_type: PriceType,
    /// Limit price, required for limit orders.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub limit: Option<Decimal>,
    /// Amount in base currency.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

impl OrderRequest {
    /// A limit order at the given price.
    pub fn limit(side: OrderSide, limit: Decimal, amount: Decimal) -> Self {
        Self {
            side,
            price_type: PriceType::Limit,
            limit: Some(limit),
            amount,
        }
    }

    /// A market order.
    pub fn market(side: OrderSide, amount: Decimal) -> Self {
        Self {
            side,
            price_type: PriceType::Market,
            limit: None,
            amount,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OrderEnvelope<'a> {
    pub order: &'a OrderRequest,
}

#[derive(Debug, Serialize)]
pub(crate) struct CancelBody {
    pub state: OrderState,
}

/// A batch of order operations applied atomically.
///
/// Serialized inside a `{"diff": ...}` envelope.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchDiff {
    /// Order ids to cancel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel: Option<Vec<u64>>,
    /// Orders to place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<Vec<OrderRequest>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchEnvelope<'a> {
    pub diff: &'a BatchDiff,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrdersResponse {
    pub orders: Vec<Order>,
}

/// Direction of a quotation simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotationType {
    /// How much quote currency buying `amount` base would cost.
    BidGivenSize,
    /// How much quote currency selling `amount` base would earn.
    AskGivenSize,
    /// How much base could be bought by spending `amount` quote.
    BidGivenSpentQuote,
    /// How much base must be sold to earn `amount` quote.
    AskGivenEarnedQuote,
    /// How much must be spent to earn `amount` base after fees.
    BidGivenEarnedBase,
    /// How much is earned by spending `amount` base.
    AskGivenSpentBase,
}

/// Parameters for a quotation simulation.
///
/// Serialized inside a `{"quotation": ...}` envelope.
#[derive(Debug, Clone, Serialize)]
pub struct QuotationRequest {
    /// Simulation direction.
    #[serde(rename = "type")]
    pub quotation_type: QuotationType,
    /// Amount to simulate.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    /// Optional price limit for the simulation.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub limit: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuotationEnvelope<'a> {
    pub quotation: &'a QuotationRequest,
}

/// Result of a quotation simulation.
#[derive(Debug, Clone, Deserialize)]
pub struct Quotation {
    /// Simulation direction.
    #[serde(rename = "type")]
    pub quotation_type: QuotationType,
    /// Base currency amount involved.
    #[serde(default)]
    pub base_exchanged: Option<Amount>,
    /// Quote currency amount involved.
    #[serde(default)]
    pub quote_exchanged: Option<Amount>,
    /// Fee charged for the simulated fill.
    #[serde(default)]
    pub fee: Option<Amount>,
    /// Limit price used, when one was given.
    #[serde(default)]
    pub limit: Option<Amount>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuotationResponse {
    pub quotation: Quotation,
}

/// A deposit as reported by the exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct Deposit {
    /// Deposit identifier.
    pub id: u64,
    /// Processing state.
    pub state: TransferState,
    /// Deposited amount.
    pub amount: Amount,
    /// Currency code.
    pub currency: String,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Rail-specific details (bank data, on-chain data).
    #[serde(default)]
    pub deposit_data: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DepositsResponse {
    pub deposits: Vec<Deposit>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DepositResponse {
    pub deposit: Deposit,
}

/// A page of deposits.
#[derive(Debug, Clone)]
pub struct DepositsPage {
    /// The deposits on this page.
    pub deposits: Vec<Deposit>,
    /// Pagination metadata.
    pub meta: Option<Meta>,
}

/// On-chain details of a withdrawal.
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalData {
    /// Destination address.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub target_address: Option<String>,
    /// On-chain transaction id, once broadcast.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub tx_hash: Option<String>,
}

/// A withdrawal as reported by the exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct Withdrawal {
    /// Withdrawal identifier.
    pub id: u64,
    /// Processing state.
    pub state: TransferState,
    /// Withdrawn amount.
    pub amount: Amount,
    /// Currency code.
    pub currency: String,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Fee charged for this withdrawal.
    #[serde(default)]
    pub fee: Option<Amount>,
    /// Rail-specific details.
    #[serde(default)]
    pub withdrawal_data: Option<WithdrawalData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WithdrawalsResponse {
    pub withdrawals: Vec<Withdrawal>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WithdrawalResponse {
    pub withdrawal: Withdrawal,
}

/// A page of withdrawals.
#[derive(Debug, Clone)]
pub struct WithdrawalsPage {
    /// The withdrawals on this page.
    pub withdrawals: Vec<Withdrawal>,
    /// Pagination metadata.
    pub meta: Option<Meta>,
}

/// Parameters for requesting a withdrawal.
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawalRequest {
    /// Amount to withdraw.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    /// Destination details.
    pub withdrawal_data: WithdrawalTarget,
}

/// Destination of a withdrawal.
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawalTarget {
    /// Address (or bank account alias) to send funds to.
    pub target_address: String,
}

impl WithdrawalRequest {
    /// A withdrawal of `amount` to `target_address`.
    pub fn new(amount: Decimal, target_address: impl Into<String>) -> Self {
        Self {
            amount,
            withdrawal_data: WithdrawalTarget {
                target_address: target_address.into(),
            },
        }
    }
}

/// Parameters for announcing a fiat deposit.
#[derive(Debug, Clone, Serialize)]
pub struct FiatDepositRequest {
    /// Amount to deposit.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

/// A crypto receive address.
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiveAddress {
    /// Address identifier.
    pub id: u64,
    /// The address itself, once assigned.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub address: Option<String>,
    /// Creation time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReceiveAddressResponse {
    pub receive_address: ReceiveAddress,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReceiveAddressesResponse {
    pub receive_addresses: Vec<ReceiveAddress>,
}

/// An entry in the account's balance event log.
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceEvent {
    /// Event identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Currency affected.
    #[serde(default)]
    pub currency: Option<String>,
    /// Event kind (e.g. "deposit_confirm", "transaction").
    #[serde(default)]
    pub event_type: Option<String>,
    /// Event time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BalanceEventsResponse {
    pub balance_events: Vec<BalanceEvent>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// A page of balance events.
#[derive(Debug, Clone)]
pub struct BalanceEventsPage {
    /// The events on this page.
    pub balance_events: Vec<BalanceEvent>,
    /// Total number of matching events.
    pub total_count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_request_wire_format() {
        let request = OrderRequest::limit(
            OrderSide::Bid,
            "835875".parse().unwrap(),
            "0.05".parse().unwrap(),
        );
        let json = serde_json::to_string(&OrderEnvelope { order: &request }).unwrap();
        assert_eq!(
            json,
            r#"{"order":{"type":"bid","price_type":"limit","limit":835875,"amount":0.05}}"#
        );
    }

    #[test]
    fn test_market_order_omits_limit() {
        let request = OrderRequest::market(OrderSide::Ask, "0.5".parse().unwrap());
        let json = serde_json::to_string(&OrderEnvelope { order: &request }).unwrap();
        assert_eq!(
            json,
            r#"{"order":{"type":"ask","price_type":"market","amount":0.5}}"#
        );
    }

    #[test]
    fn test_order_deserializes_capitalized_side() {
        let json = r#"{
            "id": 3262406,
            "market_id": "BTC-CLP",
            "type": "Bid",
            "state": "pending",
            "created_at": "2018-06-12T01:47:42.310Z",
            "price_type": "limit",
            "limit": ["835875.0", "CLP"],
            "amount": ["0.05", "BTC"],
            "original_amount": ["0.05", "BTC"],
            "traded_amount": ["0.0", "BTC"],
            "total_exchanged": ["0.0", "CLP"],
            "paid_fee": ["0.0", "CLP"]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.side, OrderSide::Bid);
        assert_eq!(order.state, OrderState::Pending);
        assert_eq!(order.created_at.year(), 2018);
    }

    #[test]
    fn test_cancel_body_wire_format() {
        let json = serde_json::to_string(&CancelBody {
            state: OrderState::Canceling,
        })
        .unwrap();
        assert_eq!(json, r#"{"state":"canceling"}"#);
    }

    #[test]
    fn test_withdrawal_request_wire_format() {
        let request = WithdrawalRequest::new(
            "2.5".parse().unwrap(),
            "mo366JJaDU5B1hmnPygyjQVMbUKnBC7DsY",
        );
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"amount":2.5,"withdrawal_data":{"target_address":"mo366JJaDU5B1hmnPygyjQVMbUKnBC7DsY"}}"#
        );
    }
}
