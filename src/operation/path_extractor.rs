//! Path-based value extraction from JSON responses
//!
//! Paths use '/' as separator (`PhoneNumber/Status`). When a path walks into
//! an array, the remaining path is applied to every item and the non-null
//! results are collected, so `PhoneNumbers/E164PhoneNumber` yields the list
//! of numbers on a page.

use serde_json::Value;

/// Split a selector path into its non-empty segments
pub fn path_segments(path: &str) -> Vec<&str> {
    path.trim_start_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}

/// Extract a value from JSON using a path expression.
///
/// Returns `Value::Null` if nothing matches.
pub fn extract_by_path(json: &Value, path: &str) -> Value {
    if path.is_empty() || path == "/" {
        return json.clone();
    }

    extract_by_parts(json, &path_segments(path))
}

fn extract_by_parts(json: &Value, parts: &[&str]) -> Value {
    let Some((part, remaining)) = parts.split_first() else {
        return json.clone();
    };

    match json {
        Value::Object(map) => match map.get(*part) {
            Some(value) => extract_by_parts(value, remaining),
            None => Value::Null,
        },
        Value::Array(arr) => {
            let results: Vec<Value> = arr
                .iter()
                .map(|item| extract_by_parts(item, parts))
                .filter(|v| !v.is_null())
                .collect();

            if results.is_empty() {
                Value::Null
            } else {
                Value::Array(results)
            }
        }
        _ => Value::Null,
    }
}
