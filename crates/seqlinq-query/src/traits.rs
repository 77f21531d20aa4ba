//! Operator trait + common interfaces.
//!
//! Each deferred operator is a decorator object over its upstream node.
//! `open` starts one traversal: all per-traversal state (dedupe sets,
//! position counters) lives inside the returned iterator, so opening again
//! replays the pipeline from scratch.

use seqlinq_core::Value;

/// One in-flight traversal of a pipeline stage.
pub type ValueIter<'a> = Box<dyn Iterator<Item = Value> + 'a>;

/// Caller-supplied element test.
pub type Predicate = Box<dyn Fn(&Value) -> bool>;

/// Caller-supplied element projection.
pub type Projection = Box<dyn Fn(&Value) -> Value>;

/// Trait that all deferred operators implement.
///
/// Invariants:
/// - `open` must not mutate the operator; a `SequenceOp` is immutable after
///   construction and may be opened any number of times.
/// - `open` does no upstream work by itself; elements are pulled one at a
///   time as the returned iterator is advanced.
pub trait SequenceOp {
    /// Human-readable operator name (stable), used for trace output.
    fn name(&self) -> &'static str;

    /// Begin a fresh traversal of this operator's output sequence.
    fn open(&self) -> ValueIter<'_>;
}
