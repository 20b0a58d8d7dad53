//! Access logging with credential redaction

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Headers worth recording; credentials among them are redacted
const LOGGED_HEADERS: &[&str] = &[
    "authorization",
    "content-type",
    "content-length",
    "user-agent",
    "x-forwarded-for",
    "x-real-ip",
];

const REDACTED_HEADERS: &[&str] = &["authorization", "cookie", "proxy-authorization"];

/// Logs one line when a request arrives and one when it completes
///
/// Spans come from `TraceLayer`; this middleware only emits events.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = route_of(&request);
    let request_id = request_id_of(request.headers());

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        headers = %summarize_headers(request.headers()),
        "Incoming request"
    );

    let response = next.run(request).await;
    let status = response.status();
    let duration_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms,
            request_id = %request_id,
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms,
            request_id = %request_id,
            "Request completed"
        );
    }

    response
}

/// Route template when matched, raw path otherwise
pub(crate) fn route_of(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn request_id_of(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

fn summarize_headers(headers: &HeaderMap) -> String {
    LOGGED_HEADERS
        .iter()
        .filter_map(|name| {
            let value = headers.get(*name)?;
            let shown = if REDACTED_HEADERS.contains(name) {
                "[REDACTED]"
            } else {
                value.to_str().unwrap_or("[invalid]")
            };
            Some(format!("{}={}", name, shown))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_is_redacted() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer secret-token".parse().unwrap());
        headers.insert("user-agent", "curl/8.0".parse().unwrap());

        let summary = summarize_headers(&headers);

        assert!(summary.contains("authorization=[REDACTED]"));
        assert!(summary.contains("user-agent=curl/8.0"));
        assert!(!summary.contains("secret-token"));
    }

    #[test]
    fn test_unlisted_headers_are_skipped() {
        let mut headers = HeaderMap::new();
        headers.insert("etag", "\"abc\"".parse().unwrap());

        assert_eq!(summarize_headers(&headers), "");
    }

    #[test]
    fn test_request_id_is_propagated_or_generated() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, "req-42".parse().unwrap());
        assert_eq!(request_id_of(&headers), "req-42");

        let generated = request_id_of(&HeaderMap::new());
        assert!(uuid::Uuid::parse_str(&generated).is_ok());
    }
}
