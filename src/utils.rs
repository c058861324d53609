use std::net::SocketAddr;

use axum::http::HeaderMap;

/// The requester's address: the first entry of `X-Forwarded-For` when a
/// proxy set one, otherwise the socket peer.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
        .unwrap_or_else(|| match peer {
            Some(addr) => addr.ip().to_string(),
            None => "unknown".to_string(),
        })
}
