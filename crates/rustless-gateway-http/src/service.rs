//! Gateway HTTP service implementing the hyper `Service` trait.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use http_body_util::BodyExt;
use hyper::body::Incoming;
use percent_encoding::percent_decode_str;
use rustless_gateway_core::RouteTable;

use crate::dispatch::{HandlerInvocation, InvocationError, RouteHandler};
use crate::response::{GatewayBody, invocation_error_response, not_found_response};

/// Hyper `Service` that resolves requests against an immutable route table
/// and dispatches matches to a host-supplied [`RouteHandler`].
///
/// The table is shared read-only across connections; each request is a
/// stateless resolution over it, so cloning the service is cheap and no
/// locking is involved.
#[derive(Debug)]
pub struct GatewayHttpService<H: RouteHandler> {
    table: Arc<RouteTable>,
    handler: Arc<H>,
}

impl<H: RouteHandler> GatewayHttpService<H> {
    /// Create a new service over a built route table.
    pub fn new(table: RouteTable, handler: H) -> Self {
        Self {
            table: Arc::new(table),
            handler: Arc::new(handler),
        }
    }

    /// Process one request end to end: resolve the route, dispatch on a
    /// match, answer with the not-found response otherwise.
    pub async fn process<B>(&self, req: http::Request<B>) -> http::Response<GatewayBody>
    where
        B: http_body::Body + Send,
        B::Error: std::fmt::Display,
    {
        let (parts, body) = req.into_parts();

        // The route table matches on the percent-decoded path with the
        // query string already stripped (`Uri::path` never includes it).
        let path = percent_decode_str(parts.uri.path())
            .decode_utf8_lossy()
            .into_owned();

        let (handler_id, path_parameters) = {
            let resolved = self.table.resolve(parts.method.as_str(), &path);
            let Some(handler_id) = resolved.handler else {
                return not_found_response();
            };
            (handler_id.to_owned(), resolved.path_parameters)
        };

        let body = match body.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(e) => {
                let err = InvocationError::new(format!("failed to read request body: {e}"));
                return invocation_error_response(&err);
            }
        };

        let invocation = HandlerInvocation {
            handler: handler_id,
            path_parameters,
            parts,
            body,
        };

        match self.handler.invoke(invocation).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(error = %err, "handler invocation failed");
                invocation_error_response(&err)
            }
        }
    }
}

impl<H: RouteHandler> Clone for GatewayHttpService<H> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<H: RouteHandler> hyper::service::Service<http::Request<Incoming>> for GatewayHttpService<H> {
    type Response = http::Response<GatewayBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<Incoming>) -> Self::Future {
        let service = self.clone();
        let request_id = uuid::Uuid::new_v4().to_string();

        Box::pin(async move {
            tracing::debug!(
                request_id = %request_id,
                method = %req.method(),
                path = req.uri().path(),
                "incoming request",
            );
            let mut response = service.process(req).await;
            if let Ok(hv) = http::HeaderValue::from_str(&request_id) {
                response.headers_mut().insert("x-request-id", hv);
            }
            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::EchoRouteHandler;
    use bytes::Bytes;
    use http_body_util::Full;
    use rustless_gateway_model::FunctionDefinition;

    fn service(value: serde_json::Value) -> GatewayHttpService<EchoRouteHandler> {
        let functions: Vec<FunctionDefinition> = serde_json::from_value(value).unwrap();
        let table = RouteTable::build(&functions).unwrap();
        GatewayHttpService::new(table, EchoRouteHandler)
    }

    fn request(method: &str, uri: &str) -> http::Request<Full<Bytes>> {
        http::Request::builder()
            .method(method)
            .uri(uri)
            .body(Full::new(Bytes::new()))
            .unwrap()
    }

    async fn body_json(response: http::Response<GatewayBody>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_should_dispatch_matched_request_with_parameters() {
        let service = service(serde_json::json!([
            {"handler": "users.get", "events": [{"http": {"method": "GET", "path": "/users/{id}"}}]},
        ]));

        let response = service.process(request("GET", "/users/42")).await;
        assert_eq!(response.status(), http::StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["handler"], "users.get");
        assert_eq!(json["pathParameters"]["id"], "42");
    }

    #[tokio::test]
    async fn test_should_answer_not_found_when_no_route_matches() {
        let service = service(serde_json::json!([
            {"handler": "users.get", "events": [{"http": {"method": "GET", "path": "/users/{id}"}}]},
        ]));

        let response = service.process(request("POST", "/users/42")).await;
        assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_should_strip_query_string_before_matching() {
        let service = service(serde_json::json!([
            {"handler": "users.list", "events": [{"http": {"method": "GET", "path": "/users"}}]},
        ]));

        let response = service.process(request("GET", "/users?page=2")).await;
        assert_eq!(response.status(), http::StatusCode::OK);
    }

    #[tokio::test]
    async fn test_should_percent_decode_path_before_matching() {
        let service = service(serde_json::json!([
            {"handler": "users.get", "events": [{"http": {"method": "GET", "path": "/users/{id}"}}]},
        ]));

        let response = service.process(request("GET", "/users/a%20b")).await;
        let json = body_json(response).await;
        assert_eq!(json["pathParameters"]["id"], "a b");
    }

    #[tokio::test]
    async fn test_should_route_any_method_to_catch_all() {
        let service = service(serde_json::json!([
            {"handler": "fallback", "events": [{"http": "*"}]},
        ]));

        let response = service.process(request("PUT", "/anything/at/all")).await;
        let json = body_json(response).await;
        assert_eq!(json["handler"], "fallback");
        assert_eq!(json["pathParameters"], serde_json::json!({}));
    }
}
