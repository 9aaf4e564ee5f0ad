//! Compiled pattern types

use serde::Serialize;
use std::fmt;

/// How a declared pattern participates in the decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Declared with a leading `+`: every required pattern must be granted
    Required,
    /// Declared with a leading `!`: denies when every forbidden pattern is granted
    Forbidden,
    /// No prefix: at least one optional pattern must be granted
    Optional,
}

impl Modifier {
    /// Splits the modifier prefix off a declared pattern
    pub fn strip(raw: &str) -> (Self, &str) {
        if let Some(rest) = raw.strip_prefix('+') {
            (Self::Required, rest)
        } else if let Some(rest) = raw.strip_prefix('!') {
            (Self::Forbidden, rest)
        } else {
            (Self::Optional, raw)
        }
    }

    /// Prefix character used in declared patterns, if any
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Required => "+",
            Self::Forbidden => "!",
            Self::Optional => "",
        }
    }
}

/// One typed segment of a compiled pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Segment {
    /// Matches a granted segment by exact equality
    Literal(String),
    /// Matches a granted segment the expression fully matches (written `/…/`)
    Regex(String),
    /// Matches the rest of a granted scope, including nothing (written `*`)
    WildcardAll,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{}", value),
            Self::Regex(expr) => write!(f, "/{}/", expr),
            Self::WildcardAll => write!(f, "*"),
        }
    }
}

/// A declared pattern after template resolution and wildcard truncation
///
/// No segment follows a [`Segment::WildcardAll`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledPattern {
    /// Decision group of this pattern
    pub modifier: Modifier,
    /// Typed segments, truncated after the first wildcard
    pub segments: Vec<Segment>,
    /// Segments rejoined with the delimiter, without the modifier prefix
    pub rendered: String,
}

impl CompiledPattern {
    /// Returns `true` if the pattern ends in a wildcard
    pub fn has_wildcard(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::WildcardAll))
    }

    /// Segments before the trailing wildcard, if any
    pub fn fixed_segments(&self) -> &[Segment] {
        if self.has_wildcard() {
            &self.segments[..self.segments.len() - 1]
        } else {
            &self.segments
        }
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.modifier.prefix(), self.rendered)
    }
}
