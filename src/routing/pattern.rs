//! Route pattern compilation and segment matching.
//!
//! # Syntax
//! - Segments separated by `/`; a pattern must begin with `/`
//! - `{name}` with `name` in `[A-Za-z_][A-Za-z0-9_]*` is a placeholder
//! - Any other segment is a literal, matched case-sensitively
//! - `/` alone is the root pattern (zero segments)
//!
//! # Design Decisions
//! - No empty segments, so trailing slashes are rejected
//! - A brace-wrapped segment with a bad name is an error, not a literal
//! - No catch-all segments: segment count is fixed per pattern

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::routing::params::Params;

/// Reasons a route declaration is rejected at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPatternError {
    #[error("route pattern is empty")]
    Empty,

    #[error("route pattern `{0}` must start with '/'")]
    MissingLeadingSlash(String),

    #[error("route pattern `{0}` contains an empty segment")]
    EmptySegment(String),

    #[error("invalid placeholder name `{name}` in route pattern `{pattern}`")]
    InvalidParamName { pattern: String, name: String },

    #[error("duplicate placeholder `{name}` in route pattern `{pattern}`")]
    DuplicateParam { pattern: String, name: String },

    #[error("route method `{0}` is not a valid HTTP method")]
    InvalidMethod(String),
}

/// One compiled component of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
}

impl Segment {
    fn matches(&self, value: &str) -> bool {
        match self {
            Segment::Literal(text) => text == value,
            Segment::Param(_) => !value.is_empty(),
        }
    }
}

/// A compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Compile `source` into segment descriptors.
    ///
    /// ```
    /// use route_dispatch::routing::{Pattern, Segment};
    ///
    /// let pattern = Pattern::parse("/user/{id}").unwrap();
    /// assert_eq!(
    ///     pattern.segments(),
    ///     &[Segment::Literal("user".into()), Segment::Param("id".into())]
    /// );
    /// ```
    pub fn parse(source: &str) -> Result<Self, InvalidPatternError> {
        if source.is_empty() {
            return Err(InvalidPatternError::Empty);
        }

        let rest = source
            .strip_prefix('/')
            .ok_or_else(|| InvalidPatternError::MissingLeadingSlash(source.to_string()))?;

        let mut segments = Vec::new();
        if rest.is_empty() {
            return Ok(Self {
                source: source.to_string(),
                segments,
            });
        }

        let mut seen = HashSet::new();
        for raw in rest.split('/') {
            if raw.is_empty() {
                return Err(InvalidPatternError::EmptySegment(source.to_string()));
            }

            let segment = match raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(name) => {
                    if !is_identifier(name) {
                        return Err(InvalidPatternError::InvalidParamName {
                            pattern: source.to_string(),
                            name: name.to_string(),
                        });
                    }
                    if !seen.insert(name) {
                        return Err(InvalidPatternError::DuplicateParam {
                            pattern: source.to_string(),
                            name: name.to_string(),
                        });
                    }
                    Segment::Param(name.to_string())
                }
                None => Segment::Literal(raw.to_string()),
            };
            segments.push(segment);
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The pattern as it was registered.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match already-split path segments, binding placeholders on success.
    pub fn match_segments(&self, path: &[&str]) -> Option<Params> {
        if self.segments.len() != path.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, value) in self.segments.iter().zip(path) {
            if !segment.matches(value) {
                return None;
            }
            if let Segment::Param(name) = segment {
                params.insert(name.as_str(), *value);
            }
        }
        Some(params)
    }

    /// Returns true if every path matched by `other` is also matched by `self`.
    pub fn covers(&self, other: &Pattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(mine, theirs)| match (mine, theirs) {
                    (Segment::Param(_), _) => true,
                    (Segment::Literal(a), Segment::Literal(b)) => a == b,
                    (Segment::Literal(_), Segment::Param(_)) => false,
                })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Split a request path into segments. `/` yields no segments.
///
/// Returns `None` for paths that do not start with `/`.
pub fn split_path(path: &str) -> Option<Vec<&str>> {
    let rest = path.strip_prefix('/')?;
    if rest.is_empty() {
        return Some(Vec::new());
    }
    Some(rest.split('/').collect())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
