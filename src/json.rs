//! JSON fixture conversion
//!
//! Test fixtures frequently arrive as JSON documents. `from_json` converts a
//! `serde_json::Value` into this crate's [`Value`] so it can participate in
//! structural comparison. JSON objects become plain objects preserving
//! member order; JSON arrays become index-keyed objects (`"0"`, `"1"`, ...)
//! so that length and element differences surface as ordinary missing/extra
//! key failures.

use crate::value::{Object, Value};

/// Convert a parsed JSON document into an assertable [`Value`].
///
/// # Example
///
/// ```
/// use objassert::{are_same, json::from_json};
///
/// let expected = from_json(&serde_json::json!({"msg": "hi"}));
/// let actual = from_json(&serde_json::json!({"msg": "hi"}));
/// assert!(are_same(&expected, &actual).is_ok());
/// ```
pub fn from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::from(s.as_str()),
        serde_json::Value::Array(items) => {
            let mut obj = Object::new();
            for (index, item) in items.iter().enumerate() {
                obj.set(index.to_string(), from_json(item));
            }
            Value::from(obj)
        }
        serde_json::Value::Object(members) => {
            let mut obj = Object::new();
            for (key, member) in members {
                obj.set(key.as_str(), from_json(member));
            }
            Value::from(obj)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::are_same;

    #[test]
    fn test_scalars() {
        assert_eq!(from_json(&serde_json::json!(null)), Value::Null);
        assert_eq!(from_json(&serde_json::json!(true)), Value::Boolean(true));
        assert_eq!(from_json(&serde_json::json!(1.5)), Value::Number(1.5));
        assert_eq!(from_json(&serde_json::json!("hi")), Value::from("hi"));
    }

    #[test]
    fn test_array_becomes_index_keyed_object() {
        let value = from_json(&serde_json::json!(["a", "b"]));
        let obj = value.as_object().unwrap().borrow();
        assert_eq!(obj.get_own("0"), Some(Value::from("a")));
        assert_eq!(obj.get_own("1"), Some(Value::from("b")));
        assert_eq!(obj.own_enumerable_len(), 2);
    }

    #[test]
    fn test_nested_fixtures_compare() {
        let expected = from_json(&serde_json::json!({"msg": {"to": "Alice", "text": "hi"}}));
        let actual = from_json(&serde_json::json!({"msg": {"to": "Alice", "text": "ho"}}));
        let err = are_same(&expected, &actual).unwrap_err();
        assert_eq!(err.to_string(), "\nExpected: hi (string)\nActual: ho (string)");
    }
}
