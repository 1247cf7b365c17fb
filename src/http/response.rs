//! HTTP response building module
//!
//! Plain-text responses only. Builder failures are logged and fall back to a
//! bare response instead of panicking.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Response, StatusCode};

/// Build a `text/plain` response with the given status
pub fn build_text_response(
    status: StatusCode,
    body: impl Into<Bytes>,
    server_name: &str,
) -> Response<Full<Bytes>> {
    let body = body.into();
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain")
        .header("Server", server_name)
        .body(Full::new(body.clone()))
        .unwrap_or_else(|e| {
            log_build_error(status, &e);
            let mut resp = Response::new(Full::new(body));
            *resp.status_mut() = status;
            resp.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
            resp
        })
}

/// Build an error response whose body is the status reason phrase
///
/// Callers get no detail beyond the status, e.g. `400` always reads `Bad Request`.
pub fn build_error_response(status: StatusCode, server_name: &str) -> Response<Full<Bytes>> {
    build_text_response(
        status,
        status.canonical_reason().unwrap_or("Error"),
        server_name,
    )
}

/// Log response build error
fn log_build_error(status: StatusCode, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_response_headers() {
        let resp = build_text_response(StatusCode::OK, "hello", "motd/test");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
        assert_eq!(resp.headers()["Server"], "motd/test");
    }

    #[test]
    fn test_error_responses() {
        let resp = build_error_response(StatusCode::BAD_REQUEST, "s");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
        assert_eq!(
            build_error_response(StatusCode::NOT_FOUND, "s").status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_invalid_server_name_falls_back() {
        let resp = build_text_response(StatusCode::OK, "hello", "bad\nname");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get("Server").is_none());
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
    }
}
