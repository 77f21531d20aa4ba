//! First-seen-wins deduplication.

use std::collections::HashSet;

use crate::query::Query;
use crate::traits::{SequenceOp, ValueIter};

/// Yield each value the first time it is seen; suppress later equals.
///
/// The membership set lives inside one traversal and is rebuilt on every
/// fresh iteration.
pub struct Distinct {
    pub(crate) input: Query,
}

impl SequenceOp for Distinct {
    fn name(&self) -> &'static str {
        "distinct"
    }

    fn open(&self) -> ValueIter<'_> {
        let mut seen = HashSet::new();
        Box::new(self.input.iter().filter(move |v| seen.insert(v.clone())))
    }
}
