//! Uniform sampling over a materialized buffer.
//!
//! Sorting on random per-element keys produces a biased permutation, so the
//! sampling terminals go through a Fisher-Yates shuffle instead.

use rand::seq::{IndexedRandom, SliceRandom};

use seqlinq_core::Value;

/// One uniformly chosen element, or `None` if the buffer is empty.
pub fn pick_one(buf: &[Value]) -> Option<Value> {
    buf.choose(&mut rand::rng()).cloned()
}

/// Up to `count` elements of a uniform permutation of the buffer.
pub fn pick(mut buf: Vec<Value>, count: usize) -> Vec<Value> {
    buf.shuffle(&mut rand::rng());
    buf.truncate(count);
    buf
}
