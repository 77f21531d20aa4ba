//! Source adapter: one internal notion of "a repeatable producer of a
//! sequence".
//!
//! Three caller-facing shapes are normalized here: a concrete collection, a
//! zero-argument factory (Rust's `IntoIterator` covers both the
//! fresh-iterator and fresh-iterable forms at the constructor), and the two
//! internal shapes the engine itself produces while chaining. Repeatability
//! of a factory is the caller's responsibility; the adapter only invokes it
//! once per consumption request.

use std::rc::Rc;

use seqlinq_core::Value;

use crate::query::Query;
use crate::traits::{SequenceOp, ValueIter};

/// A factory invoked once per traversal, yielding a fresh iterator.
pub type FactoryFn = dyn Fn() -> Box<dyn Iterator<Item = Value>>;

pub enum Source {
    /// Concrete, already-materialized collection. Re-traversed in place;
    /// the adapter never copies it.
    Items(Rc<Vec<Value>>),
    /// Zero-argument factory producing a fresh iterator per consumption.
    Factory(Rc<FactoryFn>),
    /// A deferred operator over an upstream node.
    Op(Rc<dyn SequenceOp>),
    /// A wrapped upstream node (used by the ordering operators, which add a
    /// comparator without reshaping the element stream).
    Node(Rc<Query>),
}

impl Source {
    /// Begin one traversal of the underlying sequence.
    pub fn open(&self) -> ValueIter<'_> {
        match self {
            Source::Items(items) => Box::new(items.iter().cloned()),
            Source::Factory(factory) => factory(),
            Source::Op(op) => op.open(),
            Source::Node(node) => node.iter(),
        }
    }

    /// Name of the producing stage, for trace output.
    pub fn name(&self) -> &'static str {
        match self {
            Source::Items(_) => "items",
            Source::Factory(_) => "factory",
            Source::Op(op) => op.name(),
            Source::Node(_) => "node",
        }
    }
}

impl Clone for Source {
    fn clone(&self) -> Self {
        match self {
            Source::Items(items) => Source::Items(Rc::clone(items)),
            Source::Factory(factory) => Source::Factory(Rc::clone(factory)),
            Source::Op(op) => Source::Op(Rc::clone(op)),
            Source::Node(node) => Source::Node(Rc::clone(node)),
        }
    }
}
