/// Scope type definitions
///
/// Provides a borrowed, delimiter-aware view over a scope string
/// with the positional ancestor relations used by reduction and matching.

use std::fmt;

/// Default scope delimiter
pub const DEFAULT_DELIMITER: &str = ":";

/// A hierarchical scope split into positional segments
///
/// Segment `i` is a child of segment `i - 1`; segments are never
/// reordered or compared out of position.
///
/// # Examples
///
/// ```
/// use scopecheck_authz::scope::Scope;
///
/// let parent = Scope::parse("orders", ":");
/// let child = Scope::parse("orders:create", ":");
///
/// assert!(parent.is_parent_of(&child));
/// assert_eq!(child.depth(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope<'a> {
    /// Original scope string
    raw: &'a str,
    /// Parsed segments
    segments: Vec<&'a str>,
}

impl<'a> Scope<'a> {
    /// Splits a scope string by `delimiter`
    ///
    /// Parsing never fails: an empty string is a scope with one empty segment.
    pub fn parse(raw: &'a str, delimiter: &str) -> Self {
        Self {
            raw,
            segments: raw.split(delimiter).collect(),
        }
    }

    /// Returns the segments of this scope
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Returns the raw scope string
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Returns the depth of this scope (number of segments)
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Checks if this scope is an ancestor of, or equal to, `other`
    ///
    /// Every segment of `self` must equal the segment at the same
    /// position in `other`, and `self` must not be deeper.
    pub fn covers(&self, other: &Scope<'_>) -> bool {
        self.segments.len() <= other.segments.len()
            && self
                .segments
                .iter()
                .zip(other.segments.iter())
                .all(|(a, b)| a == b)
    }

    /// Checks if this scope is a strict ancestor of `other`
    pub fn is_parent_of(&self, other: &Scope<'_>) -> bool {
        self.segments.len() < other.segments.len() && self.covers(other)
    }

    /// Checks if this scope is a strict descendant of `other`
    pub fn is_child_of(&self, other: &Scope<'_>) -> bool {
        other.is_parent_of(self)
    }
}

impl fmt::Display for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
