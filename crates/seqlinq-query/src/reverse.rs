//! Order reversal.

use seqlinq_core::Value;

use crate::query::Query;
use crate::traits::{SequenceOp, ValueIter};

/// Materialize the input on traversal and yield it back-to-front.
pub struct Reverse {
    pub(crate) input: Query,
}

impl SequenceOp for Reverse {
    fn name(&self) -> &'static str {
        "reverse"
    }

    fn open(&self) -> ValueIter<'_> {
        let buf: Vec<Value> = self.input.iter().collect();
        #[cfg(feature = "tracing")]
        tracing::trace!(rows = buf.len(), "reverse materialized upstream");
        Box::new(buf.into_iter().rev())
    }
}
