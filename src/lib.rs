//! # Buda Client
//!
//! An async Rust client library for the Buda.com exchange REST API.
//!
//! ## Features
//!
//! - Public market data endpoints (tickers, order books, trades)
//! - Authenticated account and trading endpoints with HMAC-SHA384 signing
//! - Strictly increasing nonce generation, safe under concurrent use
//! - Strong typing for all request/response types
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use buda_api_client::rest::RestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RestClient::new();
//!     let ticker = client.ticker("btc-clp").await?;
//!     println!("Last price: {}", ticker.last_price);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::BudaError;
pub use types::{Amount, FeeKind, OrderSide, OrderState, PriceType};

/// Result type alias using BudaError
pub type Result<T> = std::result::Result<T, BudaError>;
