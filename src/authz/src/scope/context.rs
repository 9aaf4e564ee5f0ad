//! Scope context tree
//!
//! Folds an effective scope set into a nested mapping keyed by segment so
//! downstream code can branch on which sub-scope was granted.

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

use super::reducer::EffectiveScopes;

/// Nested view of granted scopes
///
/// Keys are scope segments; a key whose node has no children is a leaf,
/// and its presence alone means the scope ending there was granted.
/// Serializes as nested JSON objects, e.g. `{"scope1": {"subscope1": {}}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeContext {
    children: BTreeMap<String, ScopeContext>,
}

impl ScopeContext {
    /// Creates an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a single-branch context from one scope's segments
    fn from_segments(segments: &[&str]) -> Self {
        segments.iter().rev().fold(Self::new(), |child, segment| {
            let mut node = Self::new();
            node.children.insert((*segment).to_string(), child);
            node
        })
    }

    /// Merges another context into this one, unioning shared prefixes
    pub fn merge(&mut self, other: ScopeContext) {
        for (segment, subtree) in other.children {
            match self.children.entry(segment) {
                btree_map::Entry::Vacant(entry) => {
                    entry.insert(subtree);
                }
                btree_map::Entry::Occupied(mut entry) => entry.get_mut().merge(subtree),
            }
        }
    }

    /// Returns the child node for `segment`
    pub fn get(&self, segment: &str) -> Option<&ScopeContext> {
        self.children.get(segment)
    }

    /// Returns `true` if the path described by `scope` exists in the tree
    ///
    /// `contains("scope1:subscope1", ":")` is true for the context of
    /// `scope1:subscope1` and for deeper grants below it.
    pub fn contains(&self, scope: &str, delimiter: &str) -> bool {
        scope
            .split(delimiter)
            .try_fold(self, |node, segment| node.get(segment))
            .is_some()
    }

    /// Returns `true` if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if nothing was granted
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Iterates direct child segments in lexicographic order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// Iterates direct children with their segment
    pub fn iter(&self) -> btree_map::Iter<'_, String, ScopeContext> {
        self.children.iter()
    }
}

impl<'a> IntoIterator for &'a ScopeContext {
    type Item = (&'a String, &'a ScopeContext);
    type IntoIter = btree_map::Iter<'a, String, ScopeContext>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

/// Builds the scope context for an effective scope set
///
/// Each scope becomes its own single-branch tree and the trees are merged.
/// A branch ends at the first empty segment, so `a::b` contributes only `a`
/// and an empty scope contributes nothing.
///
/// # Examples
///
/// ```
/// use scopecheck_authz::scope::{build_context, reduce};
///
/// let effective = reduce(&["scope1:subscope1", "scope1:subscope2", "scope2"], ":");
/// let context = build_context(&effective, ":");
///
/// assert!(context.contains("scope1:subscope2", ":"));
/// assert!(context.get("scope2").unwrap().is_leaf());
/// ```
pub fn build_context(effective: &EffectiveScopes, delimiter: &str) -> ScopeContext {
    effective
        .iter()
        .map(|scope| {
            let segments: Vec<&str> = scope
                .split(delimiter)
                .take_while(|segment| !segment.is_empty())
                .collect();
            ScopeContext::from_segments(&segments)
        })
        .fold(ScopeContext::new(), |mut context, branch| {
            context.merge(branch);
            context
        })
}
