//! HTTP integration tests using a live axum server

use axum::extract::State;
use axum::{routing::post, Router};
use funpoint_core::{ParameterSet, SecretPair, CHECK_MAC_VALUE};
use funpoint_http::{CallbackAck, CallbackForm, ACK_MAC_ERROR, ACK_OK};
use funpoint_mac::{sign, verify};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

fn staging_secrets() -> SecretPair {
    SecretPair::new("265fIDjIvesceXWM", "pOOvhGd1V2pJbjfX").unwrap()
}

/// Notify handler mirroring a real merchant's callback route
async fn notify_handler(
    State(secrets): State<Arc<SecretPair>>,
    CallbackForm(params): CallbackForm,
) -> CallbackAck {
    CallbackAck::from_verified(verify(&params, &secrets))
}

/// Start a test server and return its address
async fn start_test_server() -> SocketAddr {
    let app = Router::new()
        .route("/notify", post(notify_handler))
        .with_state(Arc::new(staging_secrets()));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    addr
}

fn signed_callback() -> ParameterSet {
    let params: ParameterSet = [
        ("MerchantID", "1000031"),
        ("MerchantTradeNo", "T1"),
        ("RtnCode", "1"),
        ("RtnMsg", "Succeeded"),
        ("TotalAmount", "100"),
    ]
    .into_iter()
    .collect();

    funpoint_mac::signed(&params, &staging_secrets())
}

#[tokio::test]
async fn test_valid_callback_acknowledged() {
    let addr = start_test_server().await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/notify", addr))
        .form(&signed_callback())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), ACK_OK);
}

#[tokio::test]
async fn test_tampered_callback_rejected() {
    let addr = start_test_server().await;

    let mut params = signed_callback();
    params.insert("TotalAmount", "9999");

    let response = reqwest::Client::new()
        .post(format!("http://{}/notify", addr))
        .form(&params)
        .send()
        .await
        .unwrap();

    // Rejection still answers 200; the body carries the refusal.
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), ACK_MAC_ERROR);
}

#[tokio::test]
async fn test_callback_without_mac_rejected() {
    let addr = start_test_server().await;

    let mut params = signed_callback();
    params.remove(CHECK_MAC_VALUE);

    let response = reqwest::Client::new()
        .post(format!("http://{}/notify", addr))
        .form(&params)
        .send()
        .await
        .unwrap();

    assert_eq!(response.text().await.unwrap(), ACK_MAC_ERROR);
}

#[tokio::test]
async fn test_lowercased_mac_still_verifies() {
    let addr = start_test_server().await;

    let mut params = signed_callback();
    let mac = params.remove(CHECK_MAC_VALUE).unwrap();
    params.insert(CHECK_MAC_VALUE, mac.to_lowercase());

    let response = reqwest::Client::new()
        .post(format!("http://{}/notify", addr))
        .form(&params)
        .send()
        .await
        .unwrap();

    assert_eq!(response.text().await.unwrap(), ACK_OK);
}

#[tokio::test]
async fn test_empty_body_rejected_not_crashed() {
    let addr = start_test_server().await;

    // An empty form decodes to an empty set: deterministic MAC failure,
    // never a handler error.
    let response = reqwest::Client::new()
        .post(format!("http://{}/notify", addr))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), ACK_MAC_ERROR);
}

#[tokio::test]
async fn test_wrong_content_type_is_a_transport_error() {
    let addr = start_test_server().await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/notify", addr))
        .header("content-type", "application/json")
        .body("{}")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_values_keep_original_casing_through_decode() {
    let addr = start_test_server().await;

    // The MAC binds exact value bytes; if decoding changed casing or
    // trimmed whitespace, verification would fail.
    let params: ParameterSet = [("RtnMsg", "PayMent OK "), ("RtnCode", "1")]
        .into_iter()
        .collect();
    let params = funpoint_mac::signed(&params, &staging_secrets());

    // Sanity: the signature covers the trailing space.
    assert_eq!(sign(&params, &staging_secrets()), params.get(CHECK_MAC_VALUE).unwrap());

    let response = reqwest::Client::new()
        .post(format!("http://{}/notify", addr))
        .form(&params)
        .send()
        .await
        .unwrap();

    assert_eq!(response.text().await.unwrap(), ACK_OK);
}
