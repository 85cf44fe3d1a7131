//! Buda REST API client.
//!
//! Provides access to all Buda REST endpoints.
//!
//! # Trait-based API
//!
//! The [`BudaClient`] trait abstracts all REST API operations, enabling:
//! - Mock implementations for testing
//! - Decorator pattern (e.g. a caching wrapper)
//! - Alternative implementations
//!
//! ```rust,ignore
//! use buda_api_client::rest::{BudaClient, RestClient};
//!
//! async fn use_client<C: BudaClient>(client: &C) -> Result<(), buda_api_client::BudaError> {
//!     let ticker = client.ticker("btc-clp").await?;
//!     println!("Last price: {}", ticker.last_price);
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod private;
pub mod public;
mod traits;

pub use client::{RestClient, RestClientBuilder, compact};
pub use endpoints::*;
pub use traits::BudaClient;
