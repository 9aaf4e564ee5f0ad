//! Policy matching over effective scopes

use regex::Regex;
use tracing::{debug, warn};

use super::DeclaredPolicy;
use crate::error::{AuthzError, Result};
use crate::pattern::{compile_all, CompiledPattern, Modifier, PathLookup, Segment};
use crate::scope::EffectiveScopes;

/// A fixed (non-wildcard) pattern segment ready for matching
enum SegmentMatcher<'p> {
    Literal(&'p str),
    Regex(Regex),
}

impl SegmentMatcher<'_> {
    fn is_match(&self, granted: &str) -> bool {
        match self {
            Self::Literal(expected) => *expected == granted,
            Self::Regex(re) => re.is_match(granted),
        }
    }
}

fn compile_segment(pattern: &CompiledPattern, expr: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{})$", expr)).map_err(|source| {
        warn!(pattern = %pattern, error = %source, "Invalid regex segment in declared scope");
        AuthzError::MatchError {
            pattern: pattern.to_string(),
            source,
        }
    })
}

/// A compiled pattern with its regex segments built
struct PreparedPattern<'p> {
    pattern: &'p CompiledPattern,
    fixed: Vec<SegmentMatcher<'p>>,
    wildcard: bool,
}

impl<'p> PreparedPattern<'p> {
    fn new(pattern: &'p CompiledPattern) -> Result<Self> {
        let fixed = pattern
            .fixed_segments()
            .iter()
            .filter_map(|segment| match segment {
                Segment::Literal(value) => Some(Ok(SegmentMatcher::Literal(value.as_str()))),
                Segment::Regex(expr) => Some(compile_segment(pattern, expr).map(SegmentMatcher::Regex)),
                // Only ever trailing, and fixed_segments excludes it
                Segment::WildcardAll => None,
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            pattern,
            fixed,
            wildcard: pattern.has_wildcard(),
        })
    }

    /// Every position present in both the pattern and the scope agrees
    fn agrees(&self, scope: &[&str]) -> bool {
        self.fixed
            .iter()
            .zip(scope)
            .all(|(matcher, granted)| matcher.is_match(granted))
    }

    /// Grant direction: the scope equals the pattern, is an ancestor of
    /// it, or extends past a trailing wildcard.
    fn granted_by(&self, scope: &[&str]) -> bool {
        self.agrees(scope) && (scope.len() <= self.fixed.len() || self.wildcard)
    }

    /// Forward direction: the pattern accounts for the whole scope.
    /// An ancestor of the pattern does not match.
    fn describes(&self, scope: &[&str]) -> bool {
        let depth = self.fixed.len();
        self.agrees(scope)
            && (scope.len() == depth || (self.wildcard && scope.len() > depth))
    }

    fn matches_any(&self, effective: &EffectiveScopes, delimiter: &str) -> bool {
        effective.iter().any(|scope| {
            if scope == self.pattern.rendered {
                return true;
            }
            let segments: Vec<&str> = scope.split(delimiter).collect();
            match self.pattern.modifier {
                Modifier::Forbidden => self.describes(&segments),
                Modifier::Required | Modifier::Optional => self.granted_by(&segments),
            }
        })
    }
}

/// Checks whether a granted scope covers a compiled pattern
///
/// This is the grant direction used for required and optional patterns:
/// a broad scope covers every narrower pattern below it, and a pattern
/// ending in `*` is covered by any scope agreeing on its fixed segments.
///
/// # Errors
///
/// Returns [`AuthzError::MatchError`] if a regex segment does not compile.
pub fn subsumes(pattern: &CompiledPattern, scope: &str, delimiter: &str) -> Result<bool> {
    let prepared = PreparedPattern::new(pattern)?;
    let segments: Vec<&str> = scope.split(delimiter).collect();
    Ok(scope == pattern.rendered || prepared.granted_by(&segments))
}

/// Evaluates a declared policy against effective scopes
///
/// Every declared entry is compiled against `request_data` first.
///
/// # Errors
///
/// Returns [`AuthzError::MatchError`] if any regex segment does not compile,
/// regardless of whether it would have influenced the decision.
pub fn evaluate<L: PathLookup + ?Sized>(
    effective: &EffectiveScopes,
    declared: &DeclaredPolicy,
    request_data: &L,
    delimiter: &str,
) -> Result<bool> {
    let patterns = compile_all(declared.entries(), delimiter, request_data);
    evaluate_compiled(effective, &patterns, delimiter)
}

/// Evaluates already compiled patterns against effective scopes
pub fn evaluate_compiled(
    effective: &EffectiveScopes,
    patterns: &[CompiledPattern],
    delimiter: &str,
) -> Result<bool> {
    let prepared = patterns
        .iter()
        .map(PreparedPattern::new)
        .collect::<Result<Vec<_>>>()?;

    let group = |modifier: Modifier| {
        prepared
            .iter()
            .filter(move |p| p.pattern.modifier == modifier)
            .map(|p| p.matches_any(effective, delimiter))
            .collect::<Vec<bool>>()
    };

    let required = group(Modifier::Required);
    let forbidden = group(Modifier::Forbidden);
    let optional = group(Modifier::Optional);

    let required_ok = required.iter().all(|&matched| matched);
    let forbidden_ok = forbidden.is_empty() || !forbidden.iter().all(|&matched| matched);
    let optional_ok = optional.is_empty() || optional.iter().any(|&matched| matched);

    let allowed = required_ok && forbidden_ok && optional_ok;

    debug!(
        required = required.len(),
        forbidden = forbidden.len(),
        optional = optional.len(),
        required_ok,
        forbidden_ok,
        optional_ok,
        allowed,
        "Evaluated scope policy"
    );

    Ok(allowed)
}
