use std::sync::Arc;

use wiremock::matchers::{body_json, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use buda_api_client::auth::{StaticCredentials, sign_request};
use buda_api_client::error::BudaError;
use buda_api_client::rest::RestClient;
use buda_api_client::rest::private::{
    OrderRequest, OrdersQuery, QuotationRequest, QuotationType, WithdrawalRequest,
};
use buda_api_client::types::{OrderSide, OrderState};

fn build_client(server: &MockServer) -> RestClient {
    let credentials = Arc::new(StaticCredentials::new("test_key", "test_secret"));
    RestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .build()
}

fn order_fixture(id: u64, state: &str) -> serde_json::Value {
    serde_json::json!({
        "order": {
            "id": id,
            "market_id": "BTC-CLP",
            "account_id": 51,
            "type": "Bid",
            "state": state,
            "created_at": "2018-06-12T01:47:42.310Z",
            "fee_currency": "BTC",
            "price_type": "limit",
            "limit": ["835875.0", "CLP"],
            "amount": ["0.05", "BTC"],
            "original_amount": ["0.05", "BTC"],
            "traded_amount": ["0.0", "BTC"],
            "total_exchanged": ["0.0", "CLP"],
            "paid_fee": ["0.0", "BTC"]
        }
    })
}

#[tokio::test]
async fn test_new_order_body_and_auth_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/markets/btc-clp/orders"))
        .and(body_json(serde_json::json!({
            "order": {
                "type": "bid",
                "price_type": "limit",
                "limit": 835875,
                "amount": 0.05
            }
        })))
        .and(header_exists("X-SBTC-APIKEY"))
        .and(header_exists("X-SBTC-NONCE"))
        .and(header_exists("X-SBTC-SIGNATURE"))
        .respond_with(ResponseTemplate::new(201).set_body_json(order_fixture(3262406, "received")))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = OrderRequest::limit(
        OrderSide::Bid,
        "835875".parse().unwrap(),
        "0.05".parse().unwrap(),
    );
    let order = client.new_order("btc-clp", &request).await.unwrap();

    assert_eq!(order.id, 3262406);
    assert_eq!(order.side, OrderSide::Bid);
    assert_eq!(order.state, OrderState::Received);
}

#[tokio::test]
async fn test_signature_verifies_against_sent_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/markets/btc-clp/orders"))
        .respond_with(ResponseTemplate::new(201).set_body_json(order_fixture(1, "received")))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = OrderRequest::market(OrderSide::Ask, "0.5".parse().unwrap());
    client.new_order("btc-clp", &request).await.unwrap();

    // Recompute the signature from what actually went over the wire; signing
    // is a pure function, so the server can do the same.
    let requests = server.received_requests().await.unwrap();
    let sent = &requests[0];
    let nonce = sent.headers.get("X-SBTC-NONCE").unwrap().to_str().unwrap();
    let signature = sent
        .headers
        .get("X-SBTC-SIGNATURE")
        .unwrap()
        .to_str()
        .unwrap();

    let credentials = buda_api_client::auth::Credentials::new("test_key", "test_secret");
    let expected = sign_request(
        &credentials,
        "POST",
        "/api/v2/markets/btc-clp/orders",
        Some(sent.body.as_slice()),
        nonce,
    )
    .unwrap();

    assert_eq!(signature, expected.signature);
    assert_eq!(signature.len(), 96);
}

#[tokio::test]
async fn test_nonces_increase_across_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/balances"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "balances": [] })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.balances().await.unwrap();
    client.balances().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let nonce = |i: usize| -> u128 {
        requests[i]
            .headers
            .get("X-SBTC-NONCE")
            .unwrap()
            .to_str()
            .unwrap()
            .parse()
            .unwrap()
    };

    assert!(nonce(1) > nonce(0), "nonces must be strictly increasing");
}

#[tokio::test]
async fn test_private_call_without_credentials_fails_fast() {
    let server = MockServer::start().await;

    let client = RestClient::builder().base_url(server.uri()).build();
    let error = client.balances().await.unwrap_err();

    assert!(matches!(error, BudaError::MissingCredentials));
    // No request may reach the wire.
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_balances_and_single_balance() {
    let server = MockServer::start().await;
    let balance = serde_json::json!({
        "id": "btc",
        "account_id": 51,
        "amount": ["1.5", "BTC"],
        "available_amount": ["1.2", "BTC"],
        "frozen_amount": ["0.3", "BTC"],
        "pending_withdraw_amount": ["0.0", "BTC"]
    });

    Mock::given(method("GET"))
        .and(path("/api/v2/balances"))
        .and(header_exists("X-SBTC-SIGNATURE"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "balances": [balance] })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/balances/btc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "balance": balance })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);

    let balances = client.balances().await.unwrap();
    assert_eq!(balances.len(), 1);
    assert_eq!(balances[0].id, "btc");

    let single = client.balance("btc").await.unwrap();
    assert_eq!(single.available_amount.amount, "1.2".parse().unwrap());
}

#[tokio::test]
async fn test_orders_listing_with_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/markets/btc-clp/orders"))
        .and(query_param("per", "10"))
        .and(query_param("state", "pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "orders": [order_fixture(1, "pending")["order"]],
            "meta": { "total_pages": 1, "total_count": 1, "current_page": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let query = OrdersQuery {
        per: Some(10),
        state: Some(OrderState::Pending),
        ..OrdersQuery::default()
    };
    let page = client.orders("btc-clp", &query).await.unwrap();

    assert_eq!(page.orders.len(), 1);
    assert_eq!(page.meta.unwrap().total_count, Some(1));
}

#[tokio::test]
async fn test_cancel_order_sends_canceling_state() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v2/orders/3262406"))
        .and(body_json(serde_json::json!({ "state": "canceling" })))
        .and(header_exists("X-SBTC-SIGNATURE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_fixture(3262406, "canceling")))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let order = client.cancel_order(3262406).await.unwrap();

    assert_eq!(order.state, OrderState::Canceling);
}

#[tokio::test]
async fn test_cancel_all_orders_for_market() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/orders"))
        .and(query_param("market", "btc-clp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "orders": [order_fixture(1, "canceling")["order"]]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let orders = client.cancel_all_orders(Some("btc-clp")).await.unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].state, OrderState::Canceling);
}

#[tokio::test]
async fn test_order_details() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/orders/588"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_fixture(588, "traded")))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let order = client.order_details(588).await.unwrap();

    assert_eq!(order.id, 588);
    assert_eq!(order.state, OrderState::Traded);
}

#[tokio::test]
async fn test_quotation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/markets/btc-clp/quotations"))
        .and(body_json(serde_json::json!({
            "quotation": { "type": "bid_given_earned_base", "amount": 0.01 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "quotation": {
                "type": "bid_given_earned_base",
                "base_exchanged": ["0.01", "BTC"],
                "quote_exchanged": ["8360.0", "CLP"],
                "fee": ["0.00008", "BTC"]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = QuotationRequest {
        quotation_type: QuotationType::BidGivenEarnedBase,
        amount: "0.01".parse().unwrap(),
        limit: None,
    };
    let quotation = client.quotation("btc-clp", &request).await.unwrap();

    assert_eq!(quotation.quotation_type, QuotationType::BidGivenEarnedBase);
    assert_eq!(
        quotation.quote_exchanged.unwrap().amount,
        "8360.0".parse().unwrap()
    );
}

#[tokio::test]
async fn test_withdrawal_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/currencies/btc/withdrawals"))
        .and(body_json(serde_json::json!({
            "amount": 2.5,
            "withdrawal_data": { "target_address": "mo366JJaDU5B1hmnPygyjQVMbUKnBC7DsY" }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "withdrawal": {
                "id": 19211,
                "state": "pending_confirmation",
                "amount": ["2.5", "BTC"],
                "currency": "BTC",
                "created_at": "2018-06-12T01:47:42.310Z",
                "withdrawal_data": {
                    "target_address": "mo366JJaDU5B1hmnPygyjQVMbUKnBC7DsY",
                    "tx_hash": ""
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = WithdrawalRequest::new(
        "2.5".parse().unwrap(),
        "mo366JJaDU5B1hmnPygyjQVMbUKnBC7DsY",
    );
    let withdrawal = client.new_withdrawal("btc", &request).await.unwrap();

    assert_eq!(withdrawal.id, 19211);
    let data = withdrawal.withdrawal_data.unwrap();
    assert_eq!(
        data.target_address.as_deref(),
        Some("mo366JJaDU5B1hmnPygyjQVMbUKnBC7DsY")
    );
    // Empty tx_hash means not yet broadcast.
    assert!(data.tx_hash.is_none());
}

#[tokio::test]
async fn test_deposits_listing_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/currencies/clp/deposits"))
        .and(query_param("page", "2"))
        .and(query_param("per", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "deposits": [{
                "id": 10001,
                "state": "confirmed",
                "amount": ["250000.0", "CLP"],
                "currency": "CLP",
                "created_at": "2018-06-12T01:47:42.310Z"
            }],
            "meta": { "total_pages": 3, "total_count": 11, "current_page": 2 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let page = client.deposits("clp", Some(2), Some(5)).await.unwrap();

    assert_eq!(page.deposits.len(), 1);
    assert_eq!(page.meta.unwrap().current_page, Some(2));
}

#[tokio::test]
async fn test_receive_address_roundtrip() {
    let server = MockServer::start().await;
    let address = serde_json::json!({
        "id": 30216,
        "address": "mo366JJaDU5B1hmnPygyjQVMbUKnBC7DsY",
        "created_at": "2018-06-12T01:47:42.310Z"
    });

    Mock::given(method("POST"))
        .and(path("/api/v2/currencies/btc/receive_addresses"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!({ "receive_address": address })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/currencies/btc/receive_addresses/30216"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "receive_address": address })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);

    let created = client.new_receive_address("btc").await.unwrap();
    assert_eq!(created.id, 30216);

    let fetched = client.receive_address("btc", 30216).await.unwrap();
    assert_eq!(fetched.address, created.address);
}
