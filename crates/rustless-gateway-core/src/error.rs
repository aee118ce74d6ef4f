//! Error types for route table construction.
//!
//! All variants are configuration errors surfaced at build time; matching
//! never fails, it only reports the absence of a handler.

/// Error raised while building a route table from function definitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// A `{` placeholder delimiter was opened but never closed.
    #[error("unterminated placeholder in path pattern {pattern:?}")]
    UnterminatedPlaceholder {
        /// The offending path pattern.
        pattern: String,
    },

    /// A placeholder `{}` carries no name.
    #[error("empty placeholder name in path pattern {pattern:?}")]
    EmptyPlaceholder {
        /// The offending path pattern.
        pattern: String,
    },

    /// A placeholder does not span a whole path segment (e.g. `/pre{id}`).
    #[error("placeholder must span a whole path segment in {pattern:?} (segment {segment:?})")]
    EmbeddedPlaceholder {
        /// The offending path pattern.
        pattern: String,
        /// The segment mixing literal text with a placeholder.
        segment: String,
    },

    /// The same placeholder name appears more than once in one pattern.
    #[error("duplicate placeholder {name:?} in path pattern {pattern:?}")]
    DuplicatePlaceholder {
        /// The offending path pattern.
        pattern: String,
        /// The repeated placeholder name.
        name: String,
    },

    /// A shorthand HTTP event string is not `"*"` or `"METHOD /path"`.
    #[error("malformed shorthand HTTP event {value:?} (expected \"*\" or \"METHOD /path\")")]
    MalformedShorthand {
        /// The shorthand string as written in the definition.
        value: String,
    },
}

/// Convenience result type for route table construction.
pub type GatewayResult<T> = Result<T, GatewayError>;
