//! Request matching against the route table.
//!
//! Matching is a stateless, single pass over the table in declaration
//! order: the first route whose method criterion and path pattern both
//! accept the request wins. Parameter bindings of candidates that fail
//! their pattern check are discarded along with the candidate.

use crate::pattern::PathParams;
use crate::route::{MatchSpec, RouteTable};

/// Outcome of resolving one request against the route table.
///
/// An unmatched request is an ordinary outcome, not an error: `handler` is
/// `None` and the bindings are empty, and the transport layer decides how
/// to answer (typically with a 404).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// Identifier of the matched handler, if any route matched.
    pub handler: Option<&'a str>,
    /// Path parameters bound by the matched pattern; empty when no route
    /// matched or the route carries no placeholders.
    pub path_parameters: PathParams,
}

impl RouteTable {
    /// Resolve a request to a handler identifier and path parameter
    /// bindings.
    ///
    /// `path` must already be percent-decoded and stripped of any query
    /// string; `method` is compared case-insensitively.
    #[must_use]
    pub fn resolve(&self, method: &str, path: &str) -> RouteMatch<'_> {
        for route in &self.routes {
            match &route.spec {
                MatchSpec::CatchAll => {
                    tracing::debug!(handler = %route.handler, "matched catch-all route");
                    return RouteMatch {
                        handler: Some(&route.handler),
                        path_parameters: PathParams::new(),
                    };
                }
                MatchSpec::Specific {
                    method: criterion,
                    pattern,
                } => {
                    if !criterion.matches(method) {
                        continue;
                    }
                    if let Some(path_parameters) = pattern.match_path(path) {
                        tracing::debug!(
                            route = %route.spec,
                            handler = %route.handler,
                            "matched route",
                        );
                        return RouteMatch {
                            handler: Some(&route.handler),
                            path_parameters,
                        };
                    }
                }
            }
        }

        tracing::debug!(%method, %path, "no route matched");
        RouteMatch::default()
    }
}
