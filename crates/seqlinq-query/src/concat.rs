//! Sequence-joining operators.

use std::iter;

use seqlinq_core::Value;

use crate::query::Query;
use crate::traits::{SequenceOp, ValueIter};

/// All of the input, then one extra element.
pub struct Append {
    pub(crate) input: Query,
    pub(crate) item: Value,
}

impl SequenceOp for Append {
    fn name(&self) -> &'static str {
        "append"
    }

    fn open(&self) -> ValueIter<'_> {
        Box::new(self.input.iter().chain(iter::once(self.item.clone())))
    }
}

/// One extra element, then all of the input.
pub struct Prepend {
    pub(crate) input: Query,
    pub(crate) item: Value,
}

impl SequenceOp for Prepend {
    fn name(&self) -> &'static str {
        "prepend"
    }

    fn open(&self) -> ValueIter<'_> {
        Box::new(iter::once(self.item.clone()).chain(self.input.iter()))
    }
}

/// All of the input, then all of another pipeline. Both sides stay lazy.
pub struct Chain {
    pub(crate) input: Query,
    pub(crate) other: Query,
}

impl SequenceOp for Chain {
    fn name(&self) -> &'static str {
        "concat"
    }

    fn open(&self) -> ValueIter<'_> {
        Box::new(self.input.iter().chain(self.other.iter()))
    }
}
