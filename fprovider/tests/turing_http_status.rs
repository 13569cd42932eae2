#![cfg(feature = "provider-turing")]

use std::net::SocketAddr;
use std::time::Duration;

use axum::{Router, http::StatusCode, routing::post};
use fprovider::adapters::turing::{TuringConfig, TuringProvider};
use fprovider::ProviderErrorKind;

async fn spawn_upstream(status: StatusCode, body: &'static str) -> SocketAddr {
    let app = Router::new().route("/openapi/api", post(move || async move { (status, body) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind upstream");
    let addr = listener.local_addr().expect("upstream addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

async fn fetch_against(status: StatusCode, body: &'static str) -> Result<String, ProviderErrorKind> {
    let addr = spawn_upstream(status, body).await;
    let config = TuringConfig::new(format!("http://{addr}/openapi/api"), "turing-key")
        .with_timeout(Duration::from_secs(2));
    let provider = TuringProvider::from_config(config).expect("config is valid");
    provider.fetch("hi").await.map_err(|err| err.kind)
}

#[tokio::test]
async fn success_status_returns_reply_text() {
    assert_eq!(
        fetch_against(StatusCode::OK, r#"{"text":"Hello!"}"#).await,
        Ok("Hello!".to_string())
    );
}

#[tokio::test]
async fn server_errors_map_to_unavailable() {
    for status in [
        StatusCode::INTERNAL_SERVER_ERROR,
        StatusCode::BAD_GATEWAY,
        StatusCode::SERVICE_UNAVAILABLE,
        StatusCode::GATEWAY_TIMEOUT,
    ] {
        assert_eq!(
            fetch_against(status, "upstream down").await,
            Err(ProviderErrorKind::Unavailable),
            "status {status}"
        );
    }
}

#[tokio::test]
async fn auth_statuses_map_to_authentication() {
    for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
        assert_eq!(
            fetch_against(status, "bad key").await,
            Err(ProviderErrorKind::Authentication),
            "status {status}"
        );
    }
}

#[tokio::test]
async fn request_timeout_status_maps_to_timeout() {
    assert_eq!(
        fetch_against(StatusCode::REQUEST_TIMEOUT, "slow").await,
        Err(ProviderErrorKind::Timeout)
    );
}

#[tokio::test]
async fn other_client_errors_map_to_transport() {
    for status in [StatusCode::NOT_FOUND, StatusCode::TOO_MANY_REQUESTS] {
        assert_eq!(
            fetch_against(status, "nope").await,
            Err(ProviderErrorKind::Transport),
            "status {status}"
        );
    }
}
