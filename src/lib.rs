//! Structural object assertions for embedding in test harnesses
//!
//! Two operation families over a dynamically-typed, prototype-linked value
//! model: structural deep equality ([`are_same`]) and property ownership
//! ([`owns_key`], [`owns_keys`], [`owns_or_inherits_key`],
//! [`owns_or_inherits_keys`], [`owns_no_keys`]).
//!
//! Every assertion is a pure, synchronous predicate returning a [`Verdict`]:
//! `Ok(())` on pass, or an [`AssertError`] whose `Display` output is the
//! fixed-format message a test harness records against the failing test
//! case. Nothing is shared across calls, so independent assertions can run
//! from parallel test code as long as each thread builds its own values.
//!
//! # Example
//!
//! ```
//! use objassert::{are_same, owns_key, Value};
//!
//! let expected = Value::object_from([("msg", Value::from("hi"))]);
//! let actual = Value::object_from([("msg", Value::from("hi"))]);
//! assert!(are_same(&expected, &actual).is_ok());
//! assert!(owns_key("msg", &actual).is_ok());
//!
//! let err = owns_key("note", &actual).unwrap_err();
//! assert_eq!(err.to_string(), "Property 'note' not found on object instance.");
//! ```

pub mod compare;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod ownership;
pub mod value;

pub use compare::are_same;
pub use error::AssertError;
pub use error::Verdict;
pub use ownership::owns_key;
pub use ownership::owns_keys;
pub use ownership::owns_no_keys;
pub use ownership::owns_or_inherits_key;
pub use ownership::owns_or_inherits_keys;
pub use ownership::OwnershipScope;
pub use value::CheapClone;
pub use value::Object;
pub use value::ObjectRef;
pub use value::Property;
pub use value::SharedStr;
pub use value::Value;
