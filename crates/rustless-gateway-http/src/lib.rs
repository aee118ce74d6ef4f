//! Hyper service layer for the Rustless API Gateway emulator.
//!
//! This crate is the transport collaborator around
//! [`rustless_gateway_core`]: it extracts method and path from wire-level
//! requests (percent-decoding the path and dropping the query string),
//! resolves them against the route table, and hands matched requests to a
//! host-supplied [`RouteHandler`] with the bound path parameters attached.
//! Unmatched requests get the default not-found response. Actually running
//! handler code stays with the host behind the [`RouteHandler`] trait.

mod dispatch;
mod response;
mod service;

pub use dispatch::{EchoRouteHandler, HandlerInvocation, InvocationError, RouteHandler};
pub use response::{GatewayBody, invocation_error_response, not_found_response};
pub use service::GatewayHttpService;
