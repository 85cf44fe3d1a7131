//! Private REST API endpoints (authentication required).
//!
//! Every method here fails with [`BudaError::MissingCredentials`] before any
//! network I/O when the client was built without credentials.

mod types;

pub use types::*;

use rust_decimal::Decimal;

use crate::error::BudaError;
use crate::rest::RestClient;
use crate::rest::endpoints;
use crate::types::OrderState;

impl RestClient {
    /// Simulate an order against the current book without placing it.
    pub async fn quotation(
        &self,
        market: &str,
        request: &QuotationRequest,
    ) -> Result<Quotation, BudaError> {
        let response: QuotationResponse = self
            .private_post(
                &endpoints::quotations(market),
                &QuotationEnvelope { quotation: request },
            )
            .await?;
        Ok(response.quotation)
    }

    /// Get balances for every currency in the account.
    pub async fn balances(&self) -> Result<Vec<Balance>, BudaError> {
        let response: BalancesResponse = self.private_get(endpoints::BALANCES).await?;
        Ok(response.balances)
    }

    /// Get the balance for a single currency.
    pub async fn balance(&self, currency: &str) -> Result<Balance, BudaError> {
        let response: BalanceResponse = self.private_get(&endpoints::balance(currency)).await?;
        Ok(response.balance)
    }

    /// List entries from the account's balance event log.
    ///
    /// # Arguments
    ///
    /// * `currencies` - Currencies to include (at least one).
    /// * `event_names` - Event kinds to include (at least one).
    /// * `page` / `per` - Pagination.
    pub async fn balance_events(
        &self,
        currencies: &[&str],
        event_names: &[&str],
        page: Option<u32>,
        per: Option<u32>,
    ) -> Result<BalanceEventsPage, BudaError> {
        let mut params: Vec<(&'static str, Option<String>)> = currencies
            .iter()
            .map(|c| ("currencies[]", Some(c.to_string())))
            .collect();
        params.extend(
            event_names
                .iter()
                .map(|e| ("event_names[]", Some(e.to_string()))),
        );
        params.push(("page", page.map(|p| p.to_string())));
        params.push(("per", per.map(|p| p.to_string())));

        let response: BalanceEventsResponse = self
            .private_get_with_params(endpoints::BALANCE_EVENTS, params)
            .await?;
        Ok(BalanceEventsPage {
            balance_events: response.balance_events,
            total_count: response.total_count,
        })
    }

    /// List orders in a market.
    pub async fn orders(
        &self,
        market: &str,
        query: &OrdersQuery,
    ) -> Result<OrdersPage, BudaError> {
        let params = vec![
            ("per", query.per.map(|v| v.to_string())),
            ("page", query.page.map(|v| v.to_string())),
            ("state", query.state.map(|v| v.to_string())),
            (
                "minimum_exchanged",
                query.minimum_exchanged.map(|v| v.to_string()),
            ),
        ];
        self.private_get_with_params(&endpoints::market_orders(market), params)
            .await
    }

    /// Place a new order in a market.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use buda_api_client::rest::RestClient;
    /// use buda_api_client::rest::private::OrderRequest;
    /// use buda_api_client::types::OrderSide;
    /// use buda_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = RestClient::builder()
    ///         .credentials(Arc::new(StaticCredentials::new("key", "secret")))
    ///         .build();
    ///     let request = OrderRequest::limit(
    ///         OrderSide::Bid,
    ///         "835875".parse()?,
    ///         "0.05".parse()?,
    ///     );
    ///     let order = client.new_order("btc-clp", &request).await?;
    ///     println!("Placed order {}", order.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn new_order(&self, market: &str, request: &OrderRequest) -> Result<Order, BudaError> {
        let response: OrderResponse = self
            .private_post(
                &endpoints::market_orders(market),
                &OrderEnvelope { order: request },
            )
            .await?;
        Ok(response.order)
    }

    /// Request cancelation of an order.
    ///
    /// Cancelation is asynchronous on the exchange side; the returned order
    /// is usually in the `canceling` state.
    pub async fn cancel_order(&self, id: u64) -> Result<Order, BudaError> {
        let response: OrderResponse = self
            .private_put(
                &endpoints::order(id),
                &CancelBody {
                    state: OrderState::Canceling,
                },
            )
            .await?;
        Ok(response.order)
    }

    /// Request cancelation of every open order, optionally limited to one
    /// market.
    pub async fn cancel_all_orders(&self, market: Option<&str>) -> Result<Vec<Order>, BudaError> {
        let params = vec![("market", market.map(str::to_string))];
        let response: OrdersResponse = self.private_delete(endpoints::ORDERS, params).await?;
        Ok(response.orders)
    }

    /// Get the current state of a single order.
    pub async fn order_details(&self, id: u64) -> Result<Order, BudaError> {
        let response: OrderResponse = self.private_get(&endpoints::order(id)).await?;
        Ok(response.order)
    }

    /// Apply a batch of order operations in one request.
    pub async fn batch_orders(&self, diff: &BatchDiff) -> Result<Vec<Order>, BudaError> {
        let response: OrdersResponse = self
            .private_post(endpoints::ORDERS, &BatchEnvelope { diff })
            .await?;
        Ok(response.orders)
    }

    /// List deposits for a currency.
    pub async fn deposits(
        &self,
        currency: &str,
        page: Option<u32>,
        per: Option<u32>,
    ) -> Result<DepositsPage, BudaError> {
        let params = vec![
            ("page", page.map(|v| v.to_string())),
            ("per", per.map(|v| v.to_string())),
        ];
        let response: DepositsResponse = self
            .private_get_with_params(&endpoints::deposits(currency), params)
            .await?;
        Ok(DepositsPage {
            deposits: response.deposits,
            meta: response.meta,
        })
    }

    /// List withdrawals for a currency.
    pub async fn withdrawals(
        &self,
        currency: &str,
        page: Option<u32>,
        per: Option<u32>,
    ) -> Result<WithdrawalsPage, BudaError> {
        let params = vec![
            ("page", page.map(|v| v.to_string())),
            ("per", per.map(|v| v.to_string())),
        ];
        let response: WithdrawalsResponse = self
            .private_get_with_params(&endpoints::withdrawals(currency), params)
            .await?;
        Ok(WithdrawalsPage {
            withdrawals: response.withdrawals,
            meta: response.meta,
        })
    }

    /// Request a withdrawal.
    pub async fn new_withdrawal(
        &self,
        currency: &str,
        request: &WithdrawalRequest,
    ) -> Result<Withdrawal, BudaError> {
        let response: WithdrawalResponse = self
            .private_post(&endpoints::withdrawals(currency), request)
            .await?;
        Ok(response.withdrawal)
    }

    /// Simulate a withdrawal to preview its fee without moving funds.
    pub async fn simulate_withdrawal(
        &self,
        currency: &str,
        request: &WithdrawalRequest,
    ) -> Result<Withdrawal, BudaError> {
        let response: WithdrawalResponse = self
            .private_post(&endpoints::simulated_withdrawals(currency), request)
            .await?;
        Ok(response.withdrawal)
    }

    /// Announce an incoming fiat deposit.
    pub async fn new_fiat_deposit(
        &self,
        currency: &str,
        amount: Decimal,
    ) -> Result<Deposit, BudaError> {
        let response: DepositResponse = self
            .private_post(&endpoints::deposits(currency), &FiatDepositRequest { amount })
            .await?;
        Ok(response.deposit)
    }

    /// Create a new crypto receive address.
    pub async fn new_receive_address(&self, currency: &str) -> Result<ReceiveAddress, BudaError> {
        let response: ReceiveAddressResponse = self
            .private_post(
                &endpoints::receive_addresses(currency),
                &serde_json::json!({}),
            )
            .await?;
        Ok(response.receive_address)
    }

    /// Get a previously created receive address.
    pub async fn receive_address(
        &self,
        currency: &str,
        id: u64,
    ) -> Result<ReceiveAddress, BudaError> {
        let response: ReceiveAddressResponse = self
            .private_get(&endpoints::receive_address(currency, id))
            .await?;
        Ok(response.receive_address)
    }

    /// List all receive addresses for a currency.
    pub async fn receive_addresses(&self, currency: &str) -> Result<Vec<ReceiveAddress>, BudaError> {
        let response: ReceiveAddressesResponse = self
            .private_get(&endpoints::receive_addresses(currency))
            .await?;
        Ok(response.receive_addresses)
    }
}
