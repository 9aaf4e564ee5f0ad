//! Scope authorization engine
//!
//! Runs one complete check for a request: reads the granted scopes,
//! reduces them, builds the scope context, and evaluates the resource's
//! declared policy.

pub mod config;
pub mod decision;

pub use config::{ScopeAccessor, ScopeFn, ScopeSettings, DEFAULT_SCOPE_PATH};
pub use decision::Authorization;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{AuthzError, Result};
use crate::policy::{evaluate, DeclaredPolicy};
use crate::scope::{build_context, reduce, EffectiveScopes, ScopeContext};

/// Stateless scope authorization engine
///
/// # Architecture
///
/// ```text
/// Request → ScopeAccessor → reduce → EffectiveScopes ─┬→ build_context → ScopeContext
///                                                     │
/// DeclaredPolicy + request data → compile → evaluate ─┴→ allow / deny
/// ```
///
/// The engine holds only validated settings. Checks share nothing and
/// may run concurrently from any thread.
#[derive(Debug, Clone, Default)]
pub struct ScopeEngine {
    settings: ScopeSettings,
}

impl ScopeEngine {
    /// Creates an engine after validating its settings
    ///
    /// # Errors
    ///
    /// Returns [`AuthzError::InvalidConfig`] if the settings are unusable.
    pub fn new(settings: ScopeSettings) -> Result<Self> {
        settings.validate()?;

        info!(
            delimiter = %settings.scope_delimiter,
            accessor = ?settings.scope_accessor,
            "ScopeEngine initialized"
        );

        Ok(Self { settings })
    }

    /// Returns the engine settings
    pub fn settings(&self) -> &ScopeSettings {
        &self.settings
    }

    /// Returns the segment delimiter
    pub fn delimiter(&self) -> &str {
        &self.settings.scope_delimiter
    }

    /// Reads and reduces the granted scopes of a request
    ///
    /// # Errors
    ///
    /// Returns [`AuthzError::MissingScope`] if the request carries no usable scope.
    pub fn effective_scopes(&self, request: &Value) -> Result<EffectiveScopes> {
        let granted = self
            .settings
            .scope_accessor
            .scopes(request)
            .ok_or(AuthzError::MissingScope)?;

        Ok(reduce(&granted, self.delimiter()))
    }

    /// Runs a check and reports the outcome without failing on a denial
    ///
    /// `declared` is the resource's policy as configured. When it is `None`
    /// the check is skipped and the request is allowed with an empty context.
    /// Template placeholders in the policy resolve against `request`.
    ///
    /// # Errors
    ///
    /// - [`AuthzError::MissingScope`] if the request carries no usable scope
    /// - [`AuthzError::UnknownPolicy`] if `declared` is not a list of strings
    /// - [`AuthzError::MatchError`] if a regex segment does not compile
    pub fn check(&self, request: &Value, declared: Option<&Value>) -> Result<Authorization> {
        let Some(declared) = declared else {
            debug!("No declared scope policy, skipping check");
            return Ok(Authorization::skipped());
        };

        let effective = self.effective_scopes(request)?;

        let policy = DeclaredPolicy::from_value(declared).map_err(|e| {
            warn!(error = %e, "Declared scope policy is invalid");
            e
        })?;

        let context = build_context(&effective, self.delimiter());
        let allowed = evaluate(&effective, &policy, request, self.delimiter())?;

        debug!(
            effective = ?effective.iter().collect::<Vec<_>>(),
            declared = ?policy.entries(),
            allowed,
            "Scope check complete"
        );

        Ok(Authorization::evaluated(allowed, context))
    }

    /// Authorizes a request against a declared policy
    ///
    /// Returns the scope context on success.
    ///
    /// # Errors
    ///
    /// Every error denies: [`AuthzError::InsufficientScope`] when the policy
    /// is not satisfied, plus the errors of [`ScopeEngine::check`].
    pub fn authorize(&self, request: &Value, declared: Option<&Value>) -> Result<ScopeContext> {
        self.check(request, declared)?.into_result()
    }
}

/// Authorizes a request with the given settings
///
/// Convenience wrapper around [`ScopeEngine::authorize`].
///
/// # Examples
///
/// ```
/// use scopecheck_authz::{authorize, ScopeSettings};
/// use serde_json::json;
///
/// let request = json!({ "auth": { "credentials": { "scope": ["scope"] } } });
/// let policy = json!(["scope:subscope"]);
///
/// let context = authorize(&request, Some(&policy), &ScopeSettings::default()).unwrap();
/// assert!(context.get("scope").is_some());
/// ```
pub fn authorize(
    request: &Value,
    declared: Option<&Value>,
    settings: &ScopeSettings,
) -> Result<ScopeContext> {
    ScopeEngine::new(settings.clone())?.authorize(request, declared)
}
