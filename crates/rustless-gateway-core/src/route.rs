//! Route data model: methods, match specifications, and the route table.

use std::fmt;

use crate::pattern::CompiledPattern;

/// The method criterion of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// Matches every HTTP verb. Written as `*` or the literal `any` in
    /// function definitions.
    Any,
    /// A single HTTP verb, stored uppercase.
    Verb(String),
}

impl Method {
    /// Parse a method string from a function definition.
    ///
    /// `*` and the case-insensitive literal `any` normalize to
    /// [`Method::Any`]; everything else is an uppercased verb.
    #[must_use]
    pub fn parse(method: &str) -> Self {
        if method == "*" || method.eq_ignore_ascii_case("any") {
            Self::Any
        } else {
            Self::Verb(method.to_ascii_uppercase())
        }
    }

    /// Whether a request method satisfies this criterion.
    ///
    /// Verb comparison is case-insensitive; a route declared for `GET`
    /// matches a request with method `get`.
    #[must_use]
    pub fn matches(&self, request_method: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Verb(verb) => verb.eq_ignore_ascii_case(request_method),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Verb(verb) => f.write_str(verb),
        }
    }
}

/// What a route matches against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchSpec {
    /// Matches every request, regardless of method and path.
    CatchAll,
    /// Matches a method criterion plus a compiled path pattern.
    Specific {
        /// The method criterion.
        method: Method,
        /// The compiled path pattern.
        pattern: CompiledPattern,
    },
}

impl fmt::Display for MatchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatchAll => f.write_str("*"),
            Self::Specific { method, pattern } => write!(f, "{method} {pattern}"),
        }
    }
}

/// One entry of the route table: a match specification bound to a handler
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// What this route matches.
    pub spec: MatchSpec,
    /// Opaque identifier of the handler that processes matched requests.
    pub handler: String,
}

/// An ordered, immutable route table.
///
/// Order is declaration order and is significant: the first matching route
/// wins. Duplicate specifications are kept as-is; the later duplicate is
/// shadowed by the earlier one and simply never selected. The table is
/// never mutated after construction, so it can be shared across
/// concurrently handled requests without synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    pub(crate) routes: Vec<Route>,
}

impl RouteTable {
    /// The routes in declaration order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table holds no routes (every request then resolves to
    /// no handler).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_wildcard_methods() {
        assert_eq!(Method::parse("*"), Method::Any);
        assert_eq!(Method::parse("any"), Method::Any);
        assert_eq!(Method::parse("ANY"), Method::Any);
    }

    #[test]
    fn test_should_uppercase_parsed_verbs() {
        assert_eq!(Method::parse("get"), Method::Verb("GET".to_owned()));
        assert_eq!(Method::parse("Post"), Method::Verb("POST".to_owned()));
    }

    #[test]
    fn test_should_match_verbs_case_insensitively() {
        let get = Method::parse("GET");
        assert!(get.matches("GET"));
        assert!(get.matches("get"));
        assert!(!get.matches("POST"));
    }

    #[test]
    fn test_should_match_any_against_every_verb() {
        assert!(Method::Any.matches("GET"));
        assert!(Method::Any.matches("PUT"));
        assert!(Method::Any.matches("BREW"));
    }

    #[test]
    fn test_should_display_match_spec_as_route_key() {
        assert_eq!(MatchSpec::CatchAll.to_string(), "*");

        let spec = MatchSpec::Specific {
            method: Method::parse("get"),
            pattern: crate::CompiledPattern::compile("/users/{id}").unwrap(),
        };
        assert_eq!(spec.to_string(), "GET /users/{id}");
    }
}
