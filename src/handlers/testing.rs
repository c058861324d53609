use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::{header, HeaderMap};
use axum::Json;

use crate::models::TestingResponse;
use crate::utils::client_ip;

/// Echo of request metadata; no side effects.
pub async fn testing(
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
) -> Json<TestingResponse> {
    let language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    Json(TestingResponse {
        ip: client_ip(&headers, peer.map(|ConnectInfo(addr)| addr)),
        language,
    })
}
