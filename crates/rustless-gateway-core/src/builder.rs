//! Route table construction from function definitions.
//!
//! For each function definition, in order, the builder takes the first
//! event carrying an HTTP trigger (either gateway protocol version),
//! normalizes its method and path, compiles the path pattern, and appends
//! one route to the table. Functions without an HTTP trigger (schedule- or
//! queue-only) are skipped silently: they are expected inputs, not errors.
//!
//! Malformed pattern syntax aborts the build immediately; no partial table
//! is ever returned.

use rustless_gateway_model::{FunctionDefinition, HttpTrigger};

use crate::error::{GatewayError, GatewayResult};
use crate::pattern::CompiledPattern;
use crate::route::{MatchSpec, Method, Route, RouteTable};

/// Wildcard marker used for unspecified methods and paths.
const WILDCARD: &str = "*";

impl RouteTable {
    /// Build a route table from an ordered, fully-resolved list of
    /// function definitions.
    ///
    /// Declaration order is preserved and duplicates are kept: if two
    /// definitions produce the same route key, the later one is
    /// unreachable by first-match-wins, which is intentional.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when an HTTP trigger carries malformed
    /// pattern syntax. The caller should surface it and abort startup.
    pub fn build(functions: &[FunctionDefinition]) -> GatewayResult<Self> {
        let mut routes = Vec::new();

        for function in functions {
            let Some(trigger) = function.first_http_trigger() else {
                tracing::debug!(handler = %function.handler, "function has no HTTP trigger, skipping");
                continue;
            };

            let spec = match trigger {
                HttpTrigger::Shorthand(value) => parse_shorthand(value)?,
                HttpTrigger::Config { method, path } => {
                    let method = Method::parse(method.as_deref().unwrap_or(WILDCARD));
                    make_spec(method, path.as_deref().unwrap_or(WILDCARD))?
                }
            };

            tracing::debug!(route = %spec, handler = %function.handler, "registered route");
            routes.push(Route {
                spec,
                handler: function.handler.clone(),
            });
        }

        Ok(Self { routes })
    }
}

/// Normalize a method/path pair into a match specification.
///
/// A wildcard method combined with a wildcard path collapses to the
/// catch-all; anything else compiles the path pattern as-is (so a route
/// with method `GET` and path `*` literal-matches the path `*`, exactly as
/// the gateway does).
fn make_spec(method: Method, path: &str) -> GatewayResult<MatchSpec> {
    if method == Method::Any && path == WILDCARD {
        return Ok(MatchSpec::CatchAll);
    }
    Ok(MatchSpec::Specific {
        method,
        pattern: CompiledPattern::compile(path)?,
    })
}

/// Parse the shorthand string form of an HTTP trigger: `"*"` or
/// `"METHOD /path"`.
fn parse_shorthand(value: &str) -> GatewayResult<MatchSpec> {
    let trimmed = value.trim();
    if trimmed == WILDCARD {
        return Ok(MatchSpec::CatchAll);
    }

    let Some((method, path)) = trimmed.split_once(' ') else {
        return Err(GatewayError::MalformedShorthand {
            value: value.to_owned(),
        });
    };

    make_spec(Method::parse(method), path.trim_start())
}
