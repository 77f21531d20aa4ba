//! Filtering operators.

use std::collections::HashSet;

use seqlinq_core::Value;

use crate::query::Query;
use crate::traits::{Predicate, SequenceOp, ValueIter};

/// Keep the elements the predicate accepts.
pub struct Filter {
    pub(crate) input: Query,
    pub(crate) pred: Predicate,
}

impl SequenceOp for Filter {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn open(&self) -> ValueIter<'_> {
        Box::new(self.input.iter().filter(move |v| (self.pred)(v)))
    }
}

/// Exclude members of a pre-built set.
///
/// The excluded side was realized once, at operator construction; only the
/// kept side stays lazy.
pub struct Except {
    pub(crate) input: Query,
    pub(crate) excluded: HashSet<Value>,
}

impl SequenceOp for Except {
    fn name(&self) -> &'static str {
        "except"
    }

    fn open(&self) -> ValueIter<'_> {
        Box::new(self.input.iter().filter(move |v| !self.excluded.contains(v)))
    }
}
