//! Response construction for the gateway service.

use bytes::Bytes;
use http_body_util::Full;

use crate::dispatch::InvocationError;

/// Response body type used by the gateway service. Every response this
/// layer produces is a fully buffered JSON payload.
pub type GatewayBody = Full<Bytes>;

/// Content type for gateway responses.
pub const CONTENT_TYPE: &str = "application/json";

/// The default response for requests no route matched.
#[must_use]
pub fn not_found_response() -> http::Response<GatewayBody> {
    let body = serde_json::to_vec(&serde_json::json!({
        "message": "Not Found",
    }))
    .expect("JSON serialization of static body cannot fail");

    json_response(http::StatusCode::NOT_FOUND, body)
}

/// The response for a matched request whose handler invocation failed.
#[must_use]
pub fn invocation_error_response(error: &InvocationError) -> http::Response<GatewayBody> {
    let body = serde_json::to_vec(&serde_json::json!({
        "message": "Handler invocation failed",
        "error": error.to_string(),
    }))
    .expect("JSON serialization of error body cannot fail");

    json_response(http::StatusCode::BAD_GATEWAY, body)
}

/// Build a JSON response with the common gateway headers. The request id
/// header is stamped by the service layer.
#[must_use]
pub fn json_response(status: http::StatusCode, body: Vec<u8>) -> http::Response<GatewayBody> {
    http::Response::builder()
        .status(status)
        .header("content-type", CONTENT_TYPE)
        .header("server", "Rustless")
        .body(Full::new(Bytes::from(body)))
        .expect("valid JSON response")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_build_not_found_response() {
        let resp = not_found_response();
        assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);
        assert_eq!(resp.headers().get("content-type").unwrap(), CONTENT_TYPE);
    }

    #[test]
    fn test_should_build_invocation_error_response() {
        let err = InvocationError::new("process exited with status 1");
        let resp = invocation_error_response(&err);
        assert_eq!(resp.status(), http::StatusCode::BAD_GATEWAY);
        assert_eq!(resp.headers().get("server").unwrap(), "Rustless");
    }
}
