//! Declared pattern compilation
//!
//! Turns one declared policy entry into a [`CompiledPattern`]: the modifier
//! prefix is decided once, segments after the first wildcard are dropped,
//! and `{dotted.path}` templates in literal segments are resolved against
//! the request data.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use super::lookup::PathLookup;
use super::types::{CompiledPattern, Modifier, Segment};

/// Wildcard segment text
pub const WILDCARD: &str = "*";

/// `{dotted.path}` placeholder
static TEMPLATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(.*?)\}").expect("template pattern is a valid regex"));

/// Compiles a declared pattern
///
/// Compilation never fails. Regex segments are kept as text and
/// validated when the pattern is matched.
///
/// # Arguments
///
/// * `raw` - Declared pattern, optionally prefixed with `+` or `!`
/// * `delimiter` - Segment delimiter
/// * `request_data` - Source for `{dotted.path}` template values
///
/// # Examples
///
/// ```
/// use scopecheck_authz::pattern::{compile, Modifier, NoRequestData, Segment};
///
/// let pattern = compile("+scope:*:*", ":", &NoRequestData);
/// assert_eq!(pattern.modifier, Modifier::Required);
/// assert_eq!(
///     pattern.segments,
///     vec![Segment::Literal("scope".to_string()), Segment::WildcardAll]
/// );
/// ```
pub fn compile<L: PathLookup + ?Sized>(
    raw: &str,
    delimiter: &str,
    request_data: &L,
) -> CompiledPattern {
    let (modifier, body) = Modifier::strip(raw);

    let mut raw_segments: Vec<&str> = body.split(delimiter).collect();
    if let Some(pos) = raw_segments.iter().position(|s| *s == WILDCARD) {
        raw_segments.truncate(pos + 1);
    }

    let segments: Vec<Segment> = raw_segments
        .into_iter()
        .map(|segment| classify(segment, request_data))
        .collect();

    let rendered = segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(delimiter);

    debug!(declared = raw, compiled = %rendered, ?modifier, "Compiled scope pattern");

    CompiledPattern {
        modifier,
        segments,
        rendered,
    }
}

/// Compiles every entry of a declared policy, preserving order
pub fn compile_all<S, L>(declared: &[S], delimiter: &str, request_data: &L) -> Vec<CompiledPattern>
where
    S: AsRef<str>,
    L: PathLookup + ?Sized,
{
    declared
        .iter()
        .map(|raw| compile(raw.as_ref(), delimiter, request_data))
        .collect()
}

fn classify<L: PathLookup + ?Sized>(segment: &str, request_data: &L) -> Segment {
    if segment.len() >= 2 && segment.starts_with('/') && segment.ends_with('/') {
        Segment::Regex(segment[1..segment.len() - 1].to_string())
    } else if segment == WILDCARD {
        Segment::WildcardAll
    } else {
        Segment::Literal(substitute(segment, request_data))
    }
}

/// Replaces every `{dotted.path}` placeholder in `text`
///
/// A placeholder without a value becomes the empty string.
pub fn substitute<L: PathLookup + ?Sized>(text: &str, request_data: &L) -> String {
    TEMPLATE
        .replace_all(text, |caps: &Captures<'_>| {
            request_data.lookup(&caps[1]).unwrap_or_default()
        })
        .into_owned()
}
