use thiserror::Error;

use seqlinq_core::Kind;

/// Canonical result for the query layer.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// `bind`/`annotate` asked to write the field name that holds the
    /// original element. Raised at call time, before any element flows.
    #[error("field name '{0}' is reserved for the element slot")]
    ReservedField(String),

    /// A selector-less numeric aggregate met an element with no numeric
    /// view. Raised when the offending element is processed, never eagerly.
    #[error("non-numeric {0} element in numeric aggregation")]
    NonNumeric(Kind),
}
