#![forbid(unsafe_code)]
//! seqlinq-core: the dynamic element model shared by every query operator.
//!
//! Design intent:
//! - Keep this crate pure and synchronous (no async, no I/O).
//! - `Value` is the one element type that flows through pipelines; operators
//!   that need runtime type information read its `Kind` discriminant instead
//!   of reflecting on Rust types.
//! - Equality and hashing are defined together so membership sets (distinct,
//!   except, union) behave like the comparison operators do: numerics are
//!   equal across `Int`/`Float`, and NaN is reflexive.

pub mod compare;
pub mod prelude;
pub mod value;

pub use compare::value_cmp;
pub use value::{Kind, Value, VALUE_SLOT};
