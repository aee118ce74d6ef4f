//! Handler dispatch: the boundary between the HTTP layer and the host.
//!
//! The gateway core only resolves requests to an opaque handler
//! identifier; invoking the actual handler code (a process, a runtime API,
//! a test double) is the host's job. The host implements [`RouteHandler`]
//! and receives each matched request with its bound path parameters.

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use rustless_gateway_core::PathParams;

use crate::response::{GatewayBody, json_response};

/// A matched request handed to the host for invocation.
#[derive(Debug)]
pub struct HandlerInvocation {
    /// Identifier of the matched handler, as declared in the function
    /// definition.
    pub handler: String,
    /// Path parameters bound by the matched route's pattern.
    pub path_parameters: PathParams,
    /// Request head (method, URI, headers).
    pub parts: http::request::Parts,
    /// Fully collected request body.
    pub body: Bytes,
}

/// Error returned by a failed handler invocation.
///
/// The service converts it into the standard invocation-error response;
/// it never aborts the server.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct InvocationError {
    /// Human-readable failure description.
    pub message: String,
}

impl InvocationError {
    /// Create an invocation error from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Trait the host implements to run matched handlers.
///
/// Uses boxed futures so implementations can be held as `Arc<dyn
/// RouteHandler>` by the service layer.
pub trait RouteHandler: Send + Sync + 'static {
    /// Invoke the handler for a matched request and produce its response.
    fn invoke(
        &self,
        invocation: HandlerInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<http::Response<GatewayBody>, InvocationError>> + Send>>;
}

/// A [`RouteHandler`] that echoes the match result as JSON instead of
/// running any handler code.
///
/// This is what the bundled dev server uses: it turns the gateway into a
/// routing inspector, reporting which handler would receive the request
/// and with which path parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoRouteHandler;

impl RouteHandler for EchoRouteHandler {
    fn invoke(
        &self,
        invocation: HandlerInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<http::Response<GatewayBody>, InvocationError>> + Send>>
    {
        Box::pin(async move {
            let body = serde_json::to_vec(&serde_json::json!({
                "handler": invocation.handler,
                "pathParameters": invocation.path_parameters,
                "method": invocation.parts.method.as_str(),
                "path": invocation.parts.uri.path(),
            }))
            .map_err(|e| InvocationError::new(format!("failed to serialize echo body: {e}")))?;

            Ok(json_response(http::StatusCode::OK, body))
        })
    }
}
