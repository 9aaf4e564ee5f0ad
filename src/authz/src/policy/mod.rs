//! Declared scope policies and their evaluation
//!
//! A resource declares a list of scope patterns. The list is evaluated
//! against a principal's effective scopes with three groups:
//!
//! - `+pattern` (required): every required pattern must be granted
//! - `!pattern` (forbidden): denies when every forbidden pattern is granted
//! - `pattern` (optional): at least one optional pattern must be granted
//!
//! Empty groups impose nothing, so an empty policy allows everyone.

mod matcher;

pub use matcher::{evaluate, evaluate_compiled, subsumes};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AuthzError, Result};

/// Scope patterns declared by a resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclaredPolicy {
    entries: Vec<String>,
}

impl DeclaredPolicy {
    /// Creates a policy from pattern strings
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads a policy from resource configuration
    ///
    /// # Errors
    ///
    /// Returns [`AuthzError::UnknownPolicy`] unless `value` is an array of strings.
    pub fn from_value(value: &Value) -> Result<Self> {
        let items = value.as_array().ok_or_else(|| {
            AuthzError::UnknownPolicy(format!("expected a list of scopes, got {}", value))
        })?;

        let entries = items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    AuthzError::UnknownPolicy(format!("expected a scope string, got {}", item))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// Declared pattern strings in order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns `true` if no pattern was declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        let policy = DeclaredPolicy::from_value(&json!(["+scope1", "!scope2:sub"])).unwrap();
        assert_eq!(policy.entries(), &["+scope1".to_string(), "!scope2:sub".to_string()]);

        let empty = DeclaredPolicy::from_value(&json!([])).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_from_value_rejects_non_list() {
        for value in [json!("scope"), json!({ "scope": true }), json!(42), json!(null)] {
            assert!(matches!(
                DeclaredPolicy::from_value(&value),
                Err(AuthzError::UnknownPolicy(_))
            ));
        }
    }

    #[test]
    fn test_from_value_rejects_non_string_entries() {
        let result = DeclaredPolicy::from_value(&json!(["scope", 7]));
        assert!(matches!(result, Err(AuthzError::UnknownPolicy(msg)) if msg.contains('7')));
    }

    #[test]
    fn test_deserialize() {
        let policy: DeclaredPolicy = serde_json::from_value(json!(["scope"])).unwrap();
        assert_eq!(policy, DeclaredPolicy::new(["scope"]));
    }
}
