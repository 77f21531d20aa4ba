//! Convenient re-exports for downstream crates.

pub use crate::compare::value_cmp;
pub use crate::value::{Kind, Value, VALUE_SLOT};
