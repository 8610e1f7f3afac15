//! Tests for the QR image service client against a mock HTTP server.

use color_harmony::Rgb;
use devbench::config::QrConfig;
use devbench::error::QrError;
use devbench::services::{QrClient, QrRequest};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// PNG signature bytes, enough to stand in for a rendered image
fn png_bytes() -> Vec<u8> {
    vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]
}

fn client_for(server: &MockServer) -> QrClient {
    QrClient::new(&QrConfig {
        endpoint: format!("{}/render", server.uri()),
        timeout_secs: 5,
        ..QrConfig::default()
    })
    .expect("client builds")
}

fn request(data: &str, size: u32) -> QrRequest {
    QrRequest {
        data: data.to_string(),
        size,
        color: Rgb::new(0, 0, 0),
        bgcolor: Rgb::new(255, 255, 255),
    }
}

#[tokio::test]
async fn test_fetch_png_sends_expected_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/render"))
        .and(query_param("size", "250x250"))
        .and(query_param("data", "hello world"))
        .and(query_param("color", "000000"))
        .and(query_param("bgcolor", "ffffff"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(png_bytes())
                .insert_header("content-type", "image/png"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let bytes = client
        .fetch_png(&request("hello world", 250))
        .await
        .expect("fetch succeeds");

    assert_eq!(bytes, png_bytes());
}

#[tokio::test]
async fn test_fetch_png_custom_colors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/render"))
        .and(query_param("color", "112233"))
        .and(query_param("bgcolor", "eeeeee"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut req = request("x", 100);
    req.color = Rgb::new(0x11, 0x22, 0x33);
    req.bgcolor = Rgb::new(0xee, 0xee, 0xee);

    assert!(client.fetch_png(&req).await.is_ok());
}

#[tokio::test]
async fn test_fetch_png_server_error_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/render"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .fetch_png(&request("hello", 200))
        .await
        .expect_err("500 must be an error");

    assert!(matches!(err, QrError::Status(500)));
    assert_eq!(err.to_string(), "QR service returned HTTP 500");
}

#[tokio::test]
async fn test_size_validation_happens_before_any_request() {
    let server = MockServer::start().await;

    // No mock mounted: an out-of-range size must fail locally without
    // ever reaching the network.
    let client = client_for(&server);
    let err = client
        .fetch_png(&request("hello", 50))
        .await
        .expect_err("size 50 is below the minimum");

    assert!(matches!(err, QrError::SizeOutOfRange(50)));
}

#[tokio::test]
async fn test_connection_failure_is_an_error_value() {
    // Point at a closed port; the client reports a request error, not a panic
    let client = QrClient::new(&QrConfig {
        endpoint: "http://127.0.0.1:9".to_string(),
        timeout_secs: 1,
        ..QrConfig::default()
    })
    .expect("client builds");

    let err = client
        .fetch_png(&request("hello", 200))
        .await
        .expect_err("nothing listens on port 9");
    assert!(matches!(err, QrError::Request(_)));
}
