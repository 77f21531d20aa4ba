//! Positional slicing operators.

use crate::query::Query;
use crate::traits::{SequenceOp, ValueIter};

/// First `count` elements. Never pulls the source past what it yields.
pub struct Take {
    pub(crate) input: Query,
    pub(crate) count: usize,
}

impl SequenceOp for Take {
    fn name(&self) -> &'static str {
        "take"
    }

    fn open(&self) -> ValueIter<'_> {
        Box::new(self.input.iter().take(self.count))
    }
}

/// Everything after the first `count` elements.
pub struct Skip {
    pub(crate) input: Query,
    pub(crate) count: usize,
}

impl SequenceOp for Skip {
    fn name(&self) -> &'static str {
        "skip"
    }

    fn open(&self) -> ValueIter<'_> {
        Box::new(self.input.iter().skip(self.count))
    }
}
