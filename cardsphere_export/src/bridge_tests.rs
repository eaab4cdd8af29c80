//! Tests for the Multiverse Bridge client.

use std::time::Duration;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn bridge_card_json(name: &str, edition: &str, cn: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "edition": edition,
        "collector_number": cn,
        "cs_id": 12345,
        "price": "0.25"
    })
}

fn resolve_blocking(base_url: String, id: &'static str) -> Result<Vec<BridgeCard>> {
    let bridge = MultiverseBridge::new(base_url, Some(Duration::from_secs(5)))?;
    bridge.resolve(id)
}

// ── parse_cards ──────────────────────────────────────────────────────

#[test]
fn parses_array_of_cards_ignoring_extra_fields() {
    let body = serde_json::json!([
        bridge_card_json("Lightning Bolt", "The List", "M10-146"),
        bridge_card_json("Lightning Bolt", "Magic 2010", "146"),
    ])
    .to_string();

    let cards = parse_cards(&body, "id");
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].collector_number, "M10-146");
    assert_eq!(cards[1].edition, "Magic 2010");
}

#[test]
fn malformed_body_is_treated_as_no_match() {
    assert!(parse_cards("{\"error\": \"nope\"}", "id").is_empty());
    assert!(parse_cards("[{\"name\": \"Missing fields\"}]", "id").is_empty());
    assert!(parse_cards("<html>", "id").is_empty());
}

#[test]
fn url_joins_base_and_id() {
    let bridge = MultiverseBridge::new("http://localhost:1234/api/", None).unwrap();
    assert_eq!(bridge.url_for("abc"), "http://localhost:1234/api/abc");
}

// ── resolve ──────────────────────────────────────────────────────────

#[tokio::test]
async fn resolve_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/scryfall/abc-uuid"))
        .and(header("User-Agent", USER_AGENT))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([bridge_card_json(
                "Counterspell",
                "The List",
                "7ED-67"
            )])),
        )
        .mount(&mock_server)
        .await;

    let base_url = format!("{}/cards/scryfall", mock_server.uri());
    let cards = tokio::task::spawn_blocking(move || resolve_blocking(base_url, "abc-uuid"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        cards,
        vec![BridgeCard {
            name: "Counterspell".into(),
            edition: "The List".into(),
            collector_number: "7ED-67".into(),
        }]
    );
}

#[tokio::test]
async fn resolve_empty_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/unknown-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let cards = tokio::task::spawn_blocking(move || resolve_blocking(base_url, "unknown-id"))
        .await
        .unwrap()
        .unwrap();

    assert!(cards.is_empty());
}

async fn resolve_with_status(status: u16) -> Result<Vec<BridgeCard>> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/some-id"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    tokio::task::spawn_blocking(move || resolve_blocking(base_url, "some-id"))
        .await
        .unwrap()
}

#[tokio::test]
async fn resolve_not_found_is_no_match() {
    let cards = resolve_with_status(404).await.unwrap();
    assert!(cards.is_empty());
}

#[tokio::test]
async fn resolve_rate_limited_is_fatal() {
    match resolve_with_status(429).await {
        Err(ExportError::Status { catalog_id, status }) => {
            assert_eq!(catalog_id, "some-id");
            assert_eq!(status, reqwest::StatusCode::TOO_MANY_REQUESTS);
        }
        other => panic!("Expected ExportError::Status, got: {other:?}"),
    }
}

#[tokio::test]
async fn resolve_server_errors_are_fatal() {
    for code in [500, 503] {
        match resolve_with_status(code).await {
            Err(ExportError::Status { status, .. }) => assert_eq!(status.as_u16(), code),
            other => panic!("Expected ExportError::Status for {code}, got: {other:?}"),
        }
    }
}

#[tokio::test]
async fn resolve_unexpected_body_is_no_match() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/odd-id"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "error": "nope" })),
        )
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let cards = tokio::task::spawn_blocking(move || resolve_blocking(base_url, "odd-id"))
        .await
        .unwrap()
        .unwrap();

    assert!(cards.is_empty());
}

#[test]
fn resolve_connection_refused_is_fatal() {
    // Bind then drop a listener so nothing is accepting on the port
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let result = resolve_blocking(format!("http://127.0.0.1:{port}"), "abc");

    match result {
        Err(ExportError::Network { catalog_id, .. }) => assert_eq!(catalog_id, "abc"),
        other => panic!("Expected ExportError::Network, got: {other:?}"),
    }
}
