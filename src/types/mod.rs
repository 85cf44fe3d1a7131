//! Common domain types for the Buda API.

pub mod serde_helpers;

use rust_decimal::Decimal;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A monetary quantity paired with its currency.
///
/// Buda serializes these as a two-element array of strings, for example
/// `["835875.0", "CLP"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    /// The numeric quantity.
    pub amount: Decimal,
    /// The currency code (e.g. "BTC", "CLP").
    pub currency: String,
}

impl Amount {
    /// Create a new amount.
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.amount.to_string(), &self.currency).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (amount, currency): (String, String) = Deserialize::deserialize(deserializer)?;
        let amount = amount.parse::<Decimal>().map_err(de::Error::custom)?;
        Ok(Amount { amount, currency })
    }
}

/// Bid or ask side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    #[serde(alias = "Bid")]
    Bid,
    /// Sell order
    #[serde(alias = "Ask")]
    Ask,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Bid => write!(f, "bid"),
            OrderSide::Ask => write!(f, "ask"),
        }
    }
}

/// Pricing mode of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    /// Execute at the given limit price or better
    Limit,
    /// Execute immediately at the best available price
    Market,
}

impl std::fmt::Display for PriceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceType::Limit => write!(f, "limit"),
            PriceType::Market => write!(f, "market"),
        }
    }
}

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    /// Accepted by the exchange, not yet placed in the book
    Received,
    /// Active in the order book
    Pending,
    /// Fully executed
    Traded,
    /// Cancelation requested
    Canceling,
    /// Canceled by the user
    Canceled,
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderState::Received => write!(f, "received"),
            OrderState::Pending => write!(f, "pending"),
            OrderState::Traded => write!(f, "traded"),
            OrderState::Canceling => write!(f, "canceling"),
            OrderState::Canceled => write!(f, "canceled"),
        }
    }
}

/// State of a deposit or withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferState {
    /// Waiting for on-chain or bank confirmation
    PendingConfirmation,
    /// Being processed by the exchange
    PendingExecution,
    /// Completed
    Confirmed,
    /// Rejected by the exchange
    Rejected,
    /// Retained pending review
    Retained,
    /// Any state not modeled here
    #[serde(other)]
    Other,
}

/// Fee schedule direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeKind {
    /// Fee charged on deposits
    Deposit,
    /// Fee charged on withdrawals
    Withdrawal,
}

impl std::fmt::Display for FeeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeeKind::Deposit => write!(f, "deposit"),
            FeeKind::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_roundtrip() {
        let json = r#"["835875.0","CLP"]"#;
        let amount: Amount = serde_json::from_str(json).unwrap();
        assert_eq!(amount.amount, "835875.0".parse::<Decimal>().unwrap());
        assert_eq!(amount.currency, "CLP");

        let back = serde_json::to_string(&amount).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_order_side_wire_format() {
        // Requests use lowercase, responses capitalize.
        assert_eq!(serde_json::to_string(&OrderSide::Bid).unwrap(), r#""bid""#);
        let side: OrderSide = serde_json::from_str(r#""Ask""#).unwrap();
        assert_eq!(side, OrderSide::Ask);
    }

    #[test]
    fn test_transfer_state_unknown_falls_through() {
        let state: TransferState = serde_json::from_str(r#""anything_new""#).unwrap();
        assert_eq!(state, TransferState::Other);
    }
}
