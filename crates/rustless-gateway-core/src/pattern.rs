//! Path pattern compilation and structural matching.
//!
//! Gateway path syntax mixes literal segments with named placeholders:
//! `/users/{id}/orders/{order}`. Patterns are compiled once at table-build
//! time into a typed segment list; matching is then a single pass over the
//! request path's segments. No regex is involved, so characters that would
//! be regex metacharacters in a literal segment (`.`, `+`, `(`, ...) need
//! no escaping and are always taken literally.

use std::collections::HashMap;

use crate::error::{GatewayError, GatewayResult};

/// Path parameter bindings produced by a successful pattern match, keyed by
/// placeholder name.
pub type PathParams = HashMap<String, String>;

/// One `/`-delimited piece of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternSegment {
    /// Matches exactly this text, case-sensitively.
    Literal(String),
    /// Matches any non-empty run of characters without `/`, bound under
    /// the given name.
    Param(String),
}

/// A path pattern compiled for repeated matching.
///
/// A pattern without placeholders compiles to a whole-string equality
/// check; `/abc` matches `/abc` and nothing else, not even `/abc/`. A
/// pattern with placeholders matches structurally: same segment count,
/// literal segments equal, each placeholder capturing one non-empty
/// segment.
///
/// Placeholder names must be unique within one pattern; [`compile`] rejects
/// duplicates at build time.
///
/// [`compile`]: CompiledPattern::compile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    raw: String,
    /// `None` for placeholder-free patterns (exact equality on `raw`).
    segments: Option<Vec<PatternSegment>>,
}

impl CompiledPattern {
    /// Compile a path pattern.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] for malformed placeholder syntax: an
    /// unterminated `{`, an empty `{}` name, a placeholder embedded inside
    /// a literal segment, or a duplicated placeholder name.
    pub fn compile(pattern: &str) -> GatewayResult<Self> {
        // A `}` without `{` is ordinary literal text.
        if !pattern.contains('{') {
            return Ok(Self {
                raw: pattern.to_owned(),
                segments: None,
            });
        }

        let mut segments = Vec::new();
        let mut names: Vec<&str> = Vec::new();

        for segment in pattern.split('/') {
            segments.push(Self::compile_segment(pattern, segment, &mut names)?);
        }

        Ok(Self {
            raw: pattern.to_owned(),
            segments: Some(segments),
        })
    }

    fn compile_segment<'a>(
        pattern: &str,
        segment: &'a str,
        names: &mut Vec<&'a str>,
    ) -> GatewayResult<PatternSegment> {
        let Some(rest) = segment.strip_prefix('{') else {
            if segment.contains('{') {
                return Err(GatewayError::EmbeddedPlaceholder {
                    pattern: pattern.to_owned(),
                    segment: segment.to_owned(),
                });
            }
            return Ok(PatternSegment::Literal(segment.to_owned()));
        };

        let Some(name) = rest.strip_suffix('}') else {
            if rest.contains('}') {
                // Trailing text after the closing brace, e.g. `{id}x`.
                return Err(GatewayError::EmbeddedPlaceholder {
                    pattern: pattern.to_owned(),
                    segment: segment.to_owned(),
                });
            }
            return Err(GatewayError::UnterminatedPlaceholder {
                pattern: pattern.to_owned(),
            });
        };

        if name.is_empty() {
            return Err(GatewayError::EmptyPlaceholder {
                pattern: pattern.to_owned(),
            });
        }
        if name.contains('{') || name.contains('}') {
            return Err(GatewayError::EmbeddedPlaceholder {
                pattern: pattern.to_owned(),
                segment: segment.to_owned(),
            });
        }
        if names.contains(&name) {
            return Err(GatewayError::DuplicatePlaceholder {
                pattern: pattern.to_owned(),
                name: name.to_owned(),
            });
        }

        names.push(name);
        Ok(PatternSegment::Param(name.to_owned()))
    }

    /// Match a request path against this pattern.
    ///
    /// Returns the placeholder bindings on a match (empty for
    /// placeholder-free patterns), `None` otherwise. Bindings of a failed
    /// candidate are discarded, never observable by the caller.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<PathParams> {
        let Some(segments) = &self.segments else {
            return (self.raw == path).then(PathParams::new);
        };

        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != segments.len() {
            return None;
        }

        let mut params = PathParams::new();
        for (segment, part) in segments.iter().zip(&parts) {
            match segment {
                PatternSegment::Literal(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                PatternSegment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), (*part).to_owned());
                }
            }
        }

        Some(params)
    }

    /// The pattern as written in the function definition.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether this pattern binds any path parameters.
    #[must_use]
    pub fn has_params(&self) -> bool {
        self.segments.is_some()
    }
}

impl std::fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
