//! Declared policy pattern compilation
//!
//! A declared pattern is a scope string with an optional modifier prefix
//! (`+` required, `!` forbidden) whose segments may be literals with
//! `{dotted.path}` templates, `/regex/` segments, or a `*` wildcard.
//!
//! # Examples
//!
//! ```
//! use scopecheck_authz::pattern::{compile, Modifier, Segment};
//! use serde_json::json;
//!
//! let request = json!({ "params": { "tenant": "acme" } });
//! let pattern = compile("!tenant:{params.tenant}:*", ":", &request);
//!
//! assert_eq!(pattern.modifier, Modifier::Forbidden);
//! assert_eq!(pattern.rendered, "tenant:acme:*");
//! assert_eq!(pattern.segments.last(), Some(&Segment::WildcardAll));
//! ```

mod compiler;
mod lookup;
mod types;

pub use compiler::{compile, compile_all, substitute, WILDCARD};
pub use lookup::{resolve_path, NoRequestData, PathLookup};
pub use types::{CompiledPattern, Modifier, Segment};
