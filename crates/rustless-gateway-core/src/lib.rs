//! Route table construction and request matching for the Rustless API
//! Gateway emulator.
//!
//! This crate reproduces API Gateway's request routing for local
//! development. From an ordered list of
//! [`FunctionDefinition`](rustless_gateway_model::FunctionDefinition)s it
//! builds an immutable [`RouteTable`]; each incoming request is then
//! resolved to the handler identifier of the first route it matches, in
//! declaration order, together with any path parameters bound by the
//! route's pattern.
//!
//! The table is built once at server startup and never mutated afterwards,
//! so it can be shared across concurrently handled requests without locks.

mod builder;
mod error;
mod matcher;
mod pattern;
mod route;

pub use error::{GatewayError, GatewayResult};
pub use matcher::RouteMatch;
pub use pattern::{CompiledPattern, PathParams};
pub use route::{MatchSpec, Method, Route, RouteTable};
