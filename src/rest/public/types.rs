//! Types for public REST API endpoints.

use rust_decimal::Decimal;
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::types::Amount;
use crate::types::serde_helpers::optional_millis;

/// Market ticker snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    /// Market identifier (e.g. "BTC-CLP").
    pub market_id: String,
    /// Price of the most recent trade.
    pub last_price: Amount,
    /// Lowest ask currently in the book.
    pub min_ask: Amount,
    /// Highest bid currently in the book.
    pub max_bid: Amount,
    /// Traded volume over the last 24 hours.
    pub volume: Amount,
    /// Relative price change over the last 24 hours.
    #[serde(with = "rust_decimal::serde::str")]
    pub price_variation_24h: Decimal,
    /// Relative price change over the last 7 days.
    #[serde(with = "rust_decimal::serde::str")]
    pub price_variation_7d: Decimal,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TickerResponse {
    pub ticker: Ticker,
}

/// A single price level in the order book.
///
/// Serialized on the wire as a two-element array of strings:
/// `["836677.17", "0.32"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLevel {
    /// Price for this level.
    pub price: Decimal,
    /// Amount available at this price.
    pub amount: Decimal,
}

impl<'de> Deserialize<'de> for PriceLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (price, amount): (String, String) = Deserialize::deserialize(deserializer)?;
        Ok(PriceLevel {
            price: price.parse().map_err(de::Error::custom)?,
            amount: amount.parse().map_err(de::Error::custom)?,
        })
    }
}

/// Order book for a market.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBook {
    /// Sell side, best ask first.
    pub asks: Vec<PriceLevel>,
    /// Buy side, best bid first.
    pub bids: Vec<PriceLevel>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrderBookResponse {
    pub order_book: OrderBook,
}

/// Market descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct Market {
    /// Market identifier (e.g. "BTC-CLP").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Base currency code.
    pub base_currency: String,
    /// Quote currency code.
    pub quote_currency: String,
    /// Smallest order the market accepts.
    pub minimum_order_amount: Amount,
    /// Taker fee in percent, when published.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub taker_fee: Option<Decimal>,
    /// Maker fee in percent, when published.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub maker_fee: Option<Decimal>,
    /// Whether trading is currently disabled.
    #[serde(default)]
    pub disabled: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MarketsResponse {
    pub markets: Vec<Market>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MarketResponse {
    pub market: Market,
}

/// Direction of a public trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    /// Taker bought.
    Buy,
    /// Taker sold.
    Sell,
}

/// A single public trade.
///
/// On the wire this is an array: `["1528768062310", "0.001", "835875.0",
/// "sell"]`, optionally followed by a trade id. Trailing elements are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeEntry {
    /// Trade time, epoch milliseconds.
    pub timestamp: i64,
    /// Traded amount in base currency.
    pub amount: Decimal,
    /// Trade price in quote currency.
    pub price: Decimal,
    /// Taker direction.
    pub direction: TradeDirection,
}

impl<'de> Deserialize<'de> for TradeEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = TradeEntry;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a [timestamp, amount, price, direction] array")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<TradeEntry, A::Error> {
                let timestamp: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let amount: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let price: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?;
                let direction: TradeDirection = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(3, &self))?;
                while seq.next_element::<IgnoredAny>()?.is_some() {}

                Ok(TradeEntry {
                    timestamp: timestamp.parse().map_err(de::Error::custom)?,
                    amount: amount.parse().map_err(de::Error::custom)?,
                    price: price.parse().map_err(de::Error::custom)?,
                    direction,
                })
            }
        }

        deserializer.deserialize_seq(EntryVisitor)
    }
}

/// A page of public trades.
#[derive(Debug, Clone, Deserialize)]
pub struct TradesPage {
    /// Upper bound of the requested window, when one was given.
    #[serde(default, with = "optional_millis")]
    pub timestamp: Option<i64>,
    /// Timestamp of the oldest trade in this page; pass it back as
    /// `timestamp` to fetch the next page.
    #[serde(default, with = "optional_millis")]
    pub last_timestamp: Option<i64>,
    /// Market identifier.
    pub market_id: String,
    /// Trades, newest first.
    pub entries: Vec<TradeEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TradesResponse {
    pub trades: TradesPage,
}

/// Fee schedule entry for a currency.
#[derive(Debug, Clone, Deserialize)]
pub struct FeeInfo {
    /// Fee name (e.g. "chilean_bank_transfer").
    #[serde(default)]
    pub name: Option<String>,
    /// Percentage component of the fee.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub percent: Option<Decimal>,
    /// Flat component of the fee.
    #[serde(default)]
    pub base: Option<Amount>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeeResponse {
    pub fee: FeeInfo,
}
