//! Authorization outcome

use serde::Serialize;

use crate::error::{AuthzError, Result};
use crate::scope::ScopeContext;

/// Outcome of a completed scope check
///
/// The context is built from the effective scopes before the policy is
/// evaluated, so it is available for diagnostics on a denied check too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Authorization {
    /// Whether the declared policy is satisfied
    pub allowed: bool,

    /// Whether a declared policy was evaluated at all
    pub evaluated: bool,

    /// Nested view of the effective scopes
    pub context: ScopeContext,
}

impl Authorization {
    /// Check skipped because the resource declares no policy
    pub fn skipped() -> Self {
        Self {
            allowed: true,
            evaluated: false,
            context: ScopeContext::default(),
        }
    }

    /// Evaluated check
    pub fn evaluated(allowed: bool, context: ScopeContext) -> Self {
        Self {
            allowed,
            evaluated: true,
            context,
        }
    }

    /// Converts a denial into [`AuthzError::InsufficientScope`]
    pub fn into_result(self) -> Result<ScopeContext> {
        if self.allowed {
            Ok(self.context)
        } else {
            Err(AuthzError::InsufficientScope)
        }
    }
}
