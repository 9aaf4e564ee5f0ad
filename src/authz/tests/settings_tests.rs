//! Integration tests for engine settings

mod common;

use common::request_with_scope;
use scopecheck_authz::{authorize, AuthzError, ScopeAccessor, ScopeEngine, ScopeSettings};
use serde_json::{json, Value};

#[test]
fn test_engine_with_default_settings() {
    let engine = ScopeEngine::new(ScopeSettings::from_value(json!({})).unwrap()).unwrap();
    assert_eq!(engine.delimiter(), ":");

    let context = engine
        .authorize(&request_with_scope(&["scope"]), Some(&json!(["scope:subscope"])))
        .unwrap();
    assert!(context.get("scope").is_some());
}

#[test]
fn test_engine_with_configured_delimiter() {
    let settings = ScopeSettings::from_value(json!({ "scopeDelimiter": ";" })).unwrap();
    let engine = ScopeEngine::new(settings).unwrap();

    let context = engine
        .authorize(
            &request_with_scope(&["scope;subscope1", "scope;subscope1;subscope2"]),
            Some(&json!(["scope;subscope1"])),
        )
        .unwrap();

    assert!(context.contains("scope;subscope1", ";"));
    assert!(!context.contains("scope;subscope1;subscope2", ";"));
}

#[test]
fn test_default_delimiter_is_plain_text_with_other_delimiter() {
    let settings = ScopeSettings::default().with_delimiter(";");
    let request = request_with_scope(&["scope"]);

    // "scope:subscope" is a single segment under ";"
    let result = authorize(&request, Some(&json!(["scope:subscope"])), &settings);
    assert!(matches!(result, Err(AuthzError::InsufficientScope)));
}

#[test]
fn test_engine_with_configured_accessor_path() {
    let settings = ScopeSettings::from_value(json!({ "scopeAccessor": "session.grants" })).unwrap();
    let engine = ScopeEngine::new(settings).unwrap();

    let request = json!({ "session": { "grants": ["orders:read"] } });
    assert!(engine.authorize(&request, Some(&json!(["+orders:read"]))).is_ok());

    let result = engine.authorize(&request_with_scope(&["orders:read"]), Some(&json!(["+orders:read"])));
    assert!(matches!(result, Err(AuthzError::MissingScope)));
}

#[test]
fn test_engine_with_custom_accessor() {
    let accessor = ScopeAccessor::custom(|request: &Value| {
        let role = request.pointer("/user/role")?.as_str()?;
        Some(vec![format!("role:{}", role)])
    });
    let engine = ScopeEngine::new(ScopeSettings::default().with_accessor(accessor)).unwrap();

    let request = json!({ "user": { "role": "admin" } });
    assert!(engine.authorize(&request, Some(&json!(["+role:admin"]))).is_ok());
    assert!(matches!(
        engine.authorize(&json!({}), Some(&json!(["+role:admin"]))),
        Err(AuthzError::MissingScope)
    ));
}

#[test]
fn test_invalid_options_are_rejected() {
    for options in [
        json!({ "invalidProperty": "invalidProperty" }),
        json!({ "scopeDelimiter": 1 }),
        json!({ "scopeDelimiter": "" }),
        json!({ "scopeAccessor": "" }),
        json!("scopeDelimiter"),
    ] {
        let result = ScopeSettings::from_value(options.clone());
        match result {
            Err(e) => assert!(e.is_configuration_error(), "{}: {}", options, e),
            Ok(_) => panic!("options should be rejected: {}", options),
        }
    }
}

#[test]
fn test_engine_rejects_unvalidated_settings() {
    let settings = ScopeSettings::default().with_accessor(ScopeAccessor::path(""));
    assert!(matches!(ScopeEngine::new(settings), Err(AuthzError::InvalidConfig(_))));
}
