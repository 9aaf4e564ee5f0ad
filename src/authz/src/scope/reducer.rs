/// Effective scope reduction
///
/// Canonicalizes a granted scope set by dropping every scope that a
/// broader granted ancestor already covers.

use std::collections::btree_set::{self, BTreeSet};

use serde::Serialize;
use tracing::debug;

use super::types::Scope;

/// Granted scopes with redundant specializations removed
///
/// No element is a strict descendant of another element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EffectiveScopes {
    scopes: BTreeSet<String>,
}

impl EffectiveScopes {
    /// Returns `true` if `scope` is in the effective set
    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    /// Number of effective scopes
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Returns `true` if no scope survived reduction
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Iterates the effective scopes in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a EffectiveScopes {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.scopes.iter()
    }
}

/// Reduces granted scopes to their effective set
///
/// A scope is kept only if no other distinct granted scope is its
/// ancestor. Duplicates collapse. Quadratic in the number of granted
/// scopes, which are expected to number in the tens.
///
/// # Arguments
///
/// * `granted` - Raw scopes granted to the principal
/// * `delimiter` - Segment delimiter
///
/// # Examples
///
/// ```
/// use scopecheck_authz::scope::reduce;
///
/// let effective = reduce(&["scope", "scope:subscope", "other"], ":");
/// assert_eq!(effective.iter().collect::<Vec<_>>(), vec!["other", "scope"]);
/// ```
pub fn reduce<S: AsRef<str>>(granted: &[S], delimiter: &str) -> EffectiveScopes {
    let parsed: Vec<Scope<'_>> = granted
        .iter()
        .map(|s| Scope::parse(s.as_ref(), delimiter))
        .collect();

    let scopes: BTreeSet<String> = parsed
        .iter()
        .filter(|s1| {
            !parsed
                .iter()
                .any(|s2| s1.as_str() != s2.as_str() && s2.covers(s1))
        })
        .map(|s| s.as_str().to_string())
        .collect();

    debug!(
        granted = granted.len(),
        effective = scopes.len(),
        "Reduced granted scopes"
    );

    EffectiveScopes { scopes }
}
