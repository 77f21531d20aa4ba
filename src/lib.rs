#![forbid(unsafe_code)]
//! seqlinq: a lazy, chainable query layer over value sequences.
//!
//! Build a pipeline of transformations (filter, project, sort, dedupe,
//! slice) over any enumerable source without materializing intermediates;
//! elements are pulled only when the pipeline is consumed.
//!
//! ```
//! use seqlinq::{as_query, Value};
//!
//! let evens_scaled = as_query(vec![1, 2, 3, 4])
//!     .filter(|v| v.as_f64().is_some_and(|n| n as i64 % 2 == 0))
//!     .select(|v| Value::Float(v.as_f64().unwrap_or(0.0) * 10.0))
//!     .to_vec();
//! assert_eq!(evens_scaled, vec![Value::Float(20.0), Value::Float(40.0)]);
//! ```

pub use seqlinq_core::{value_cmp, Kind, Value};
pub use seqlinq_query::{as_query, as_query_with, Error, Query, Result, SequenceOp, ValueIter};

pub mod prelude {
    //! Convenient re-exports for consumers.
    pub use seqlinq_core::prelude::*;
    pub use seqlinq_query::{as_query, as_query_with, Error, Query, Result};
}
