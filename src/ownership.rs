//! Property-ownership assertions
//!
//! Five operations over one core check: does a value have a property named
//! `key`, restricted to a given [`OwnershipScope`]? A non-object value owns
//! no keys, so the single- and multi-key checks fail through the same lookup
//! logic and `owns_no_keys` passes.

use crate::error::{AssertError, Verdict};
use crate::value::Value;

/// How far property lookup is allowed to reach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipScope {
    /// Only properties declared directly on the instance
    Own,
    /// Properties on the instance or anywhere on its prototype chain
    OwnOrInherited,
}

/// Core lookup shared by every ownership assertion: does `object` have a
/// property named `key` within `scope`?
pub fn has_key(object: &Value, key: &str, scope: OwnershipScope) -> bool {
    match object.as_object() {
        Some(obj) => match scope {
            OwnershipScope::Own => obj.borrow().has_own(key),
            OwnershipScope::OwnOrInherited => obj.borrow().has_property(key),
        },
        None => false,
    }
}

/// Assert that `object` owns `key` directly on the instance.
///
/// A key that is only reachable through the prototype chain does not count.
pub fn owns_key(key: &str, object: &Value) -> Verdict {
    if has_key(object, key, OwnershipScope::Own) {
        Ok(())
    } else {
        Err(AssertError::key_not_owned(key))
    }
}

/// Assert that `object` owns every key in `keys` directly on the instance.
///
/// Keys are checked in list order; the first one not owned is the one
/// reported.
pub fn owns_keys(keys: &[&str], object: &Value) -> Verdict {
    for key in keys {
        owns_key(key, object)?;
    }
    Ok(())
}

/// Assert that `key` resolves on `object` or its prototype chain.
pub fn owns_or_inherits_key(key: &str, object: &Value) -> Verdict {
    if has_key(object, key, OwnershipScope::OwnOrInherited) {
        Ok(())
    } else {
        Err(AssertError::key_not_found(key))
    }
}

/// Assert that every key in `keys` resolves on `object` or its prototype
/// chain, reporting the first absent key in list order.
pub fn owns_or_inherits_keys(keys: &[&str], object: &Value) -> Verdict {
    for key in keys {
        owns_or_inherits_key(key, object)?;
    }
    Ok(())
}

/// Assert that `object` owns no enumerable properties.
pub fn owns_no_keys(object: &Value) -> Verdict {
    let count = match object.as_object() {
        Some(obj) => obj.borrow().own_enumerable_len(),
        None => 0,
    };
    if count == 0 {
        Ok(())
    } else {
        Err(AssertError::unexpected_keys(count))
    }
}
