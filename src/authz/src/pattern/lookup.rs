//! Request-bound value lookup for `{dotted.path}` templates

use serde_json::Value;
use std::collections::HashMap;

/// Resolves a dotted path to a plain string value
///
/// Implementations must be side-effect free. Any asynchronous or
/// fallible retrieval belongs to the caller, before matching starts.
pub trait PathLookup {
    /// Returns the value at `path`, or `None` if there is none
    fn lookup(&self, path: &str) -> Option<String>;
}

/// Returns the JSON node at a dotted path
///
/// Object keys are matched by name and numeric segments index arrays.
pub fn resolve_path<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(root, |node, key| match node {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Walks a JSON document by dotted path
///
/// Strings resolve to their contents, numbers and booleans to their
/// textual form; `null`, arrays and objects do not resolve.
impl PathLookup for Value {
    fn lookup(&self, path: &str) -> Option<String> {
        match resolve_path(self, path)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Flat lookup: the whole dotted path is the key
impl PathLookup for HashMap<String, String> {
    fn lookup(&self, path: &str) -> Option<String> {
        self.get(path).cloned()
    }
}

impl<T: PathLookup + ?Sized> PathLookup for &T {
    fn lookup(&self, path: &str) -> Option<String> {
        (**self).lookup(path)
    }
}

/// Request data that resolves nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRequestData;

impl PathLookup for NoRequestData {
    fn lookup(&self, _path: &str) -> Option<String> {
        None
    }
}
