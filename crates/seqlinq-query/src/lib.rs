#![forbid(unsafe_code)]
//! seqlinq-query: the deferred-execution pipeline engine.
//!
//! Design intent:
//! - Pure and synchronous; no async, no threads, no I/O. Consumption is
//!   cooperative pull: one element at a time through every chained layer.
//! - Operators are decorator objects behind `SequenceOp`, not eager
//!   transformations; nothing runs until a terminal operator or iteration
//!   consumes the chain.
//! - The only buffering points are the sort path, `reverse`, and the
//!   eagerly-realized exclusion set of `except`.

pub mod concat;
pub mod distinct;
pub mod error;
pub mod filter;
pub mod map;
pub mod query;
pub mod random;
pub mod reverse;
pub mod slice;
pub mod sort;
pub mod source;
pub mod traits;

pub use error::{Error, Result};
pub use query::{as_query, as_query_with, Query};
pub use sort::Comparator;
pub use source::Source;
pub use traits::{SequenceOp, ValueIter};
