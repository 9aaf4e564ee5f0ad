//! Hierarchical scope handling
//!
//! This module reduces granted scopes to their effective set and folds
//! that set into a nested [`ScopeContext`] for downstream introspection.
//!
//! # Examples
//!
//! ```
//! use scopecheck_authz::scope::{build_context, reduce};
//!
//! let effective = reduce(&["scope", "scope:subscope", "other:child"], ":");
//! assert!(effective.contains("scope"));
//! assert!(!effective.contains("scope:subscope"));
//!
//! let context = build_context(&effective, ":");
//! assert!(context.contains("other:child", ":"));
//! ```

mod context;
mod reducer;
mod types;


pub use context::{build_context, ScopeContext};
pub use reducer::{reduce, EffectiveScopes};
pub use types::{Scope, DEFAULT_DELIMITER};
