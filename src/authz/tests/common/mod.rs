//! Shared helpers for integration tests

#![allow(dead_code)]

use scopecheck_authz::{Result, ScopeContext, ScopeEngine};
use serde_json::{json, Value};

/// Builds a request document carrying `scope` at the default accessor path
pub fn request_with_scope(scope: &[&str]) -> Value {
    json!({ "auth": { "credentials": { "scope": scope } } })
}

/// Builds a request document with scopes and route parameters
pub fn request_with_params(scope: &[&str], params: Value) -> Value {
    json!({ "auth": { "credentials": { "scope": scope } }, "params": params })
}

/// Authorizes `granted` against `declared` with the default engine
pub fn authorize(granted: &[&str], declared: &[&str]) -> Result<ScopeContext> {
    ScopeEngine::default().authorize(&request_with_scope(granted), Some(&json!(declared)))
}

/// Returns `true` if `granted` satisfies `declared`
pub fn allows(granted: &[&str], declared: &[&str]) -> bool {
    authorize(granted, declared).is_ok()
}
