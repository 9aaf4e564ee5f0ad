//! # Scopecheck Authorization Engine
//!
//! Hierarchical scope authorization: decides whether a principal's granted
//! scopes satisfy a resource's declared scope policy, and exposes what was
//! granted as a nested scope context.
//!
//! ## Features
//!
//! - **Effective scope reduction**: `scope` already covers `scope:subscope`
//! - **Declared patterns** with `+required`, `!forbidden` and optional entries
//! - **Regex segments** (`scope:/sub.*/`) and **wildcard truncation** (`scope:*`)
//! - **Request-bound templates** (`{params.id}`) resolved per check
//! - **Scope context** tree for branching handler logic on granted sub-scopes
//! - **Pure and synchronous**: no I/O, no shared state, safe to call from any thread
//!
//! ## Example
//!
//! ```rust
//! use scopecheck_authz::{ScopeEngine, ScopeSettings, AuthzError};
//! use serde_json::json;
//!
//! let engine = ScopeEngine::new(ScopeSettings::default())?;
//!
//! let request = json!({
//!     "auth": { "credentials": { "scope": ["orders", "users:read"] } },
//!     "params": { "action": "create" }
//! });
//! let policy = json!(["+orders:{params.action}", "!users:delete"]);
//!
//! let context = engine.authorize(&request, Some(&policy))?;
//! assert!(context.contains("users:read", ":"));
//! # Ok::<(), AuthzError>(())
//! ```

pub mod engine;
pub mod error;
pub mod pattern;
pub mod policy;
pub mod scope;

// Re-export commonly used types
pub use engine::{authorize, Authorization, ScopeAccessor, ScopeEngine, ScopeSettings};
pub use error::{AuthzError, Result};
pub use pattern::{compile, CompiledPattern, Modifier, PathLookup, Segment};
pub use policy::{evaluate, DeclaredPolicy};
pub use scope::{build_context, reduce, EffectiveScopes, ScopeContext};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
