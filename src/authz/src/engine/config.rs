//! Engine settings and scope access

use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::error::{AuthzError, Result};
use crate::pattern::resolve_path;
use crate::scope::DEFAULT_DELIMITER;

/// Default location of granted scopes in the request document
pub const DEFAULT_SCOPE_PATH: &str = "auth.credentials.scope";

/// Custom scope extraction function
pub type ScopeFn = dyn Fn(&Value) -> Option<Vec<String>> + Send + Sync;

/// Locates the principal's granted scopes in a request
///
/// Deserializes from a dotted path string.
#[derive(Clone, Deserialize)]
#[serde(from = "String")]
pub enum ScopeAccessor {
    /// Dotted path into the request document
    Path(String),
    /// Caller-supplied extraction
    Custom(Arc<ScopeFn>),
}

impl ScopeAccessor {
    /// Creates a path accessor
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    /// Creates an accessor from a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Option<Vec<String>> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Extracts granted scopes from a request
    ///
    /// Returns `None` when the request carries no usable scope: the path is
    /// missing or holds anything other than a list of strings. An empty list
    /// is a usable, empty grant.
    pub fn scopes(&self, request: &Value) -> Option<Vec<String>> {
        match self {
            Self::Path(path) => match resolve_path(request, path)? {
                Value::Array(items) => items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect(),
                _ => None,
            },
            Self::Custom(f) => f(request),
        }
    }
}

impl Default for ScopeAccessor {
    fn default() -> Self {
        Self::path(DEFAULT_SCOPE_PATH)
    }
}

impl From<String> for ScopeAccessor {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl fmt::Debug for ScopeAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Custom(_) => f.debug_tuple("Custom").field(&"<fn>").finish(),
        }
    }
}

/// Scope engine settings
///
/// Defaults are applied when the settings are built: delimiter `:` and
/// scopes read from `auth.credentials.scope`.
///
/// # Examples
///
/// ```
/// use scopecheck_authz::ScopeSettings;
/// use serde_json::json;
///
/// let settings = ScopeSettings::from_value(json!({ "scopeDelimiter": ";" })).unwrap();
/// assert_eq!(settings.scope_delimiter, ";");
///
/// assert!(ScopeSettings::from_value(json!({ "invalidProperty": true })).is_err());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ScopeSettings {
    /// Segment delimiter for scopes and declared patterns
    pub scope_delimiter: String,

    /// Where granted scopes are read from
    pub scope_accessor: ScopeAccessor,
}

impl Default for ScopeSettings {
    fn default() -> Self {
        Self {
            scope_delimiter: DEFAULT_DELIMITER.to_string(),
            scope_accessor: ScopeAccessor::default(),
        }
    }
}

impl ScopeSettings {
    /// Creates settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates settings from a JSON options object
    ///
    /// # Errors
    ///
    /// Returns [`AuthzError::InvalidConfig`] for unknown keys, wrongly typed
    /// values, or an empty delimiter.
    pub fn from_value(value: Value) -> Result<Self> {
        let settings: Self = serde_json::from_value(value)
            .map_err(|e| AuthzError::InvalidConfig(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Sets the segment delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.scope_delimiter = delimiter.into();
        self
    }

    /// Sets the scope accessor
    pub fn with_accessor(mut self, accessor: ScopeAccessor) -> Self {
        self.scope_accessor = accessor;
        self
    }

    /// Checks the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.scope_delimiter.is_empty() {
            return Err(AuthzError::InvalidConfig(
                "scopeDelimiter must not be empty".to_string(),
            ));
        }
        if let ScopeAccessor::Path(path) = &self.scope_accessor {
            if path.is_empty() {
                return Err(AuthzError::InvalidConfig(
                    "scopeAccessor path must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
