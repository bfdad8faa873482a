//! Integration tests for the IEX clients.
//!
//! Every test runs against a local `wiremock` server, asserting the
//! exact request URLs the clients produce and the typed results (or
//! errors) they hand back. No test touches the real API.

use rust_decimal_macros::dec;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use iexcloud_rs::models::{BatchType, ChartRange, Period};
use iexcloud_rs::{
    ClientConfig, Credentials, Error, IexCloudClient, IexTradingClient, Symbol,
};

/// Cloud client pointed at a mock server, with a test token.
fn cloud_client(server: &MockServer) -> IexCloudClient {
    IexCloudClient::with_base_url(
        &server.uri(),
        Credentials::publishable("pk_test_token"),
        ClientConfig::default(),
    )
    .expect("client should build")
}

/// Legacy client pointed at a mock server. No token.
fn legacy_client(server: &MockServer) -> IexTradingClient {
    IexTradingClient::with_base_url(&server.uri(), ClientConfig::default())
        .expect("client should build")
}

// ============================================================================
// URL SHAPE
// ============================================================================

#[tokio::test]
async fn test_tops_joins_symbols_preserving_case_and_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tops"))
        .and(query_param("symbols", "aapl,msft"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"symbol": "aapl", "lastSalePrice": 192.25},
                {"symbol": "msft", "lastSalePrice": 402.25}]"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = cloud_client(&server);
    let tops = client.market().tops(&["aapl", "msft"]).await.unwrap();

    assert_eq!(tops.len(), 2);
    assert_eq!(tops[0].symbol, Symbol::new("aapl"));
    assert_eq!(tops[1].symbol, Symbol::new("msft"));
    assert_eq!(tops[0].last_sale_price, Some(dec!(192.25)));
}

#[tokio::test]
async fn test_company_path_carries_only_the_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stock/aapl/company"))
        .and(query_param("token", "pk_test_token"))
        .and(query_param_is_missing("symbols"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"symbol": "AAPL", "companyName": "Apple Inc.", "CEO": "Timothy Donald Cook"}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = cloud_client(&server);
    let company = client.stock().company("aapl").await.unwrap();

    assert_eq!(company.symbol, Symbol::new("AAPL"));
    assert_eq!(company.ceo.as_deref(), Some("Timothy Donald Cook"));
}

#[tokio::test]
async fn test_version_segment_sits_between_host_and_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stable/stock/aapl/quote"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"symbol": "AAPL", "latestPrice": 192.25}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/stable/", server.uri());
    let client = IexCloudClient::with_base_url(
        &base,
        Credentials::publishable("pk_test_token"),
        ClientConfig::default(),
    )
    .unwrap();

    let quote = client.stock().quote("aapl").await.unwrap();
    assert_eq!(quote.latest_price, Some(dec!(192.25)));
}

#[tokio::test]
async fn test_path_placeholders_are_percent_encoded() {
    let server = MockServer::start().await;

    // Catch-all mock; the assertion below inspects the raw request URL.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"symbol": "BRK.A/B"}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = cloud_client(&server);
    let quote = client.stock().quote("brk.a/b").await.unwrap();
    assert_eq!(quote.symbol, Symbol::new("BRK.A/B"));

    // A symbol with a slash must not create an extra path segment.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/stock/brk.a%2Fb/quote");
}

#[tokio::test]
async fn test_fundamentals_query_marshalling() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stock/aapl/balance-sheet/4"))
        .and(query_param("period", "quarter"))
        .and(query_param("token", "pk_test_token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"symbol": "AAPL", "balancesheet": [{"reportDate": "2023-12-30"}]}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = cloud_client(&server);
    let response = client
        .stock()
        .balance_sheet("aapl", Period::Quarter, 4)
        .await
        .unwrap();
    assert_eq!(response.balancesheet.len(), 1);
}

#[tokio::test]
async fn test_batch_market_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stock/market/batch"))
        .and(query_param("symbols", "aapl,msft"))
        .and(query_param("types", "quote,chart"))
        .and(query_param("range", "1m"))
        .and(query_param("last", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{
                "AAPL": {"quote": {"symbol": "AAPL"}, "chart": [{"date": "2024-01-26"}]},
                "MSFT": {"quote": {"symbol": "MSFT"}, "chart": []}
            }"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = cloud_client(&server);
    let batch = client
        .stock()
        .batch_market(
            &["aapl", "msft"],
            &[BatchType::Quote, BatchType::Chart],
            Some(ChartRange::OneMonth),
            1,
        )
        .await
        .unwrap();

    assert_eq!(batch.len(), 2);
    assert_eq!(
        batch["AAPL"].quote.as_ref().unwrap().symbol,
        Symbol::new("AAPL")
    );
    assert_eq!(batch["AAPL"].chart.as_ref().unwrap().len(), 1);
}

#[tokio::test]
async fn test_price_parses_bare_number_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stock/aapl/price"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("192.25", "application/json"))
        .mount(&server)
        .await;

    let client = cloud_client(&server);
    let price = client.stock().price("aapl").await.unwrap();
    assert_eq!(price, dec!(192.25));
}

// ============================================================================
// SYMBOL-LIST HANDLING
// ============================================================================

#[tokio::test]
async fn test_tops_empty_symbols_falls_back_to_all() {
    let server = MockServer::start().await;

    // The fallback form must not send a symbols parameter at all.
    Mock::given(method("GET"))
        .and(path("/tops"))
        .and(query_param_is_missing("symbols"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"[{"symbol": "ZVZZT"}]"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = legacy_client(&server);
    let tops = client.market().tops(&[]).await.unwrap();
    assert_eq!(tops.len(), 1);
}

#[tokio::test]
async fn test_deep_empty_symbols_is_an_argument_error() {
    let server = MockServer::start().await;
    let client = cloud_client(&server);

    let err = client.market().deep(&[]).await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(err.is_client_error());

    // Failed before any network I/O.
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_batch_empty_types_is_an_argument_error() {
    let server = MockServer::start().await;
    let client = cloud_client(&server);

    let err = client.stock().batch("aapl", &[], None, 1).await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// LEGACY (V1) CLIENT
// ============================================================================

#[tokio::test]
async fn test_legacy_client_sends_no_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tops/last"))
        .and(query_param("symbols", "aapl"))
        .and(query_param_is_missing("token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"symbol": "aapl", "price": 192.25, "size": 100, "time": 1480446905681}]"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = legacy_client(&server);
    let last = client.market().last(&["aapl"]).await.unwrap();
    assert_eq!(last[0].price, Some(dec!(192.25)));
}

#[tokio::test]
async fn test_legacy_batch_uses_v1_news_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stock/aapl/batch"))
        .and(query_param("types", "quote,news"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{
                "quote": {"symbol": "AAPL"},
                "news": [{"datetime": "2018-12-19T09:45:00-05:00", "headline": "Recall"}]
            }"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = legacy_client(&server);
    let batch = client
        .stock()
        .batch("aapl", &[BatchType::Quote, BatchType::News], None, 1)
        .await
        .unwrap();

    let news = batch.news.unwrap();
    assert_eq!(news[0].datetime.as_deref(), Some("2018-12-19T09:45:00-05:00"));
}

// ============================================================================
// ERROR TAXONOMY
// ============================================================================

#[tokio::test]
async fn test_malformed_body_yields_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stock/aapl/company"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json at all", "text/plain"))
        .mount(&server)
        .await;

    let client = cloud_client(&server);
    let err = client.stock().company("aapl").await.unwrap_err();

    match err {
        Error::Deserialize { body, .. } => assert_eq!(body, "not json at all"),
        other => panic!("expected Deserialize error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_success_status_yields_api_error_with_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stock/nope/quote"))
        .respond_with(ResponseTemplate::new(404).set_body_raw("Unknown symbol", "text/plain"))
        .mount(&server)
        .await;

    let client = cloud_client(&server);
    let err = client.stock().quote("nope").await.unwrap_err();

    match err {
        Error::Api { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Unknown symbol");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = cloud_client(&server);
    let err = client.market().us_market_volume().await.unwrap_err();
    assert!(err.is_server_error());

    // Exactly one request reached the server; the .expect(1) above
    // fails on drop if the client retried.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

// ============================================================================
// CONCURRENCY
// ============================================================================

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stock/aapl/price"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("192.25", "application/json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stock/msft/price"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("402.25", "application/json"))
        .mount(&server)
        .await;

    let client = cloud_client(&server);
    let stock = client.stock();
    let (aapl, msft) = tokio::join!(
        stock.price("aapl"),
        stock.price("msft"),
    );

    assert_eq!(aapl.unwrap(), dec!(192.25));
    assert_eq!(msft.unwrap(), dec!(402.25));
}
