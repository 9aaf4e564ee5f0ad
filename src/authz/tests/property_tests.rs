//! Property-based tests for scope reduction and policy evaluation

use proptest::prelude::*;
use scopecheck_authz::scope::Scope;
use scopecheck_authz::{build_context, reduce, ScopeEngine};
use serde_json::json;

/// Small alphabet so generated scopes often share ancestors
fn scope_strategy() -> impl Strategy<Value = String> {
    "[a-c]{1,2}(:[a-c]{1,2}){0,3}"
}

fn granted_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(scope_strategy(), 0..8)
}

proptest! {
    #[test]
    fn test_reduce_is_idempotent(granted in granted_strategy()) {
        let once = reduce(&granted, ":");
        let twice = reduce(&once.iter().collect::<Vec<_>>(), ":");
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_every_grant_is_covered(granted in granted_strategy()) {
        let effective = reduce(&granted, ":");

        for scope in &granted {
            let scope = Scope::parse(scope, ":");
            prop_assert!(
                effective.iter().any(|e| Scope::parse(e, ":").covers(&scope)),
                "{} is not covered", scope
            );
        }
    }

    #[test]
    fn test_no_effective_scope_specializes_another(granted in granted_strategy()) {
        let effective = reduce(&granted, ":");

        for a in effective.iter() {
            for b in effective.iter() {
                let (a, b) = (Scope::parse(a, ":"), Scope::parse(b, ":"));
                prop_assert!(!a.is_parent_of(&b), "{} specializes {}", b, a);
            }
        }
    }

    #[test]
    fn test_context_contains_every_effective_scope(granted in granted_strategy()) {
        let effective = reduce(&granted, ":");
        let context = build_context(&effective, ":");

        for scope in effective.iter() {
            prop_assert!(context.contains(scope, ":"), "{} missing from context", scope);
        }
    }

    #[test]
    fn test_broad_scope_grants_narrow_pattern(
        scope in scope_strategy(),
        suffix in "[a-z]{1,5}(:[a-z]{1,5}){0,2}"
    ) {
        let request = json!({ "auth": { "credentials": { "scope": [scope.clone()] } } });
        let policy = json!([format!("+{}:{}", scope, suffix)]);

        prop_assert!(ScopeEngine::default().authorize(&request, Some(&policy)).is_ok());
    }

    #[test]
    fn test_narrow_scope_does_not_grant_broad_pattern(
        scope in scope_strategy(),
        suffix in "[a-z]{1,5}"
    ) {
        let request = json!({ "auth": { "credentials": { "scope": [format!("{}:{}", scope, suffix)] } } });
        let policy = json!([format!("+{}", scope)]);

        prop_assert!(ScopeEngine::default().authorize(&request, Some(&policy)).is_err());
    }

    #[test]
    fn test_decision_determinism(
        granted in granted_strategy(),
        declared in prop::collection::vec("[+!]?[a-c]{1,2}(:[a-c*]{1,2}){0,2}", 0..4)
    ) {
        let engine = ScopeEngine::default();
        let request = json!({ "auth": { "credentials": { "scope": granted } } });
        let policy = json!(declared);

        let first = engine.check(&request, Some(&policy)).unwrap();
        let second = engine.check(&request, Some(&policy)).unwrap();
        prop_assert_eq!(first, second);
    }
}
