//! Structural deep-equality comparison
//!
//! `are_same` compares two values for own-enumerable-property structural
//! equality, recursively. Only properties owned by an instance participate;
//! anything visible solely through a prototype chain is treated as absent on
//! either side. When a nested comparison fails, the reported values are the
//! innermost differing pair, not the path that led to them.

use crate::error::{AssertError, Verdict};
use crate::value::Value;

/// Assert that `expected` and `actual` are structurally the same.
///
/// Identical references (and equal primitives) pass immediately. Two objects
/// pass when every own enumerable key of `expected` is owned by `actual`
/// with a recursively-same value, and `actual` owns no keys that `expected`
/// does not. A value pair that is not two objects falls back to strict
/// value equality.
///
/// # Example
///
/// ```
/// use objassert::{are_same, Value};
///
/// let expected = Value::object_from([("msg", Value::from("hi"))]);
/// let actual = Value::object_from([("msg", Value::from("hi"))]);
/// assert!(are_same(&expected, &actual).is_ok());
/// ```
pub fn are_same(expected: &Value, actual: &Value) -> Verdict {
    // Identity and primitive equality. Also what keeps comparison of a
    // self-referential structure against itself from recursing forever.
    if expected.strict_equals(actual) {
        return Ok(());
    }

    let (Some(expected_obj), Some(actual_obj)) = (expected.as_object(), actual.as_object()) else {
        return Err(AssertError::value_mismatch(expected, actual));
    };

    let expected_obj = expected_obj.borrow();
    let actual_obj = actual_obj.borrow();

    for key in expected_obj.own_enumerable_keys() {
        let expected_value = expected_obj
            .get_own(key.as_str())
            .unwrap_or(Value::Undefined);
        // Inherited properties on the actual side do not count as owned.
        let Some(actual_value) = actual_obj.get_own(key.as_str()) else {
            return Err(AssertError::missing_key(&expected_value));
        };
        are_same(&expected_value, &actual_value)?;
    }

    // Symmetric sweep: keys owned by `actual` that `expected` lacks.
    for key in actual_obj.own_enumerable_keys() {
        if !expected_obj.has_own(key.as_str()) {
            let actual_value = actual_obj.get_own(key.as_str()).unwrap_or(Value::Undefined);
            return Err(AssertError::extra_key(&actual_value));
        }
    }

    Ok(())
}
