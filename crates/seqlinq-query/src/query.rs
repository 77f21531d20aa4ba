//! The pipeline node: one producer, one optional comparator, and the fluent
//! operator surface.
//!
//! Chaining never traverses anything. Every intermediate operator allocates a
//! new node whose source is a decorator over the previous node, so the chain
//! is a singly-linked DAG from newest node back to the original producer.
//! Work happens only when a node is consumed: iteration pulls one element at
//! a time through every layer, except that a node carrying a comparator first
//! materializes its upstream into a buffer and stable-sorts it. Nodes are
//! immutable after construction; cloning is cheap and shares the producer
//! chain structurally.

use std::collections::HashSet;
use std::rc::Rc;

use seqlinq_core::{Kind, Value, VALUE_SLOT};

use crate::concat::{Append, Chain, Prepend};
use crate::distinct::Distinct;
use crate::error::{Error, Result};
use crate::filter::{Except, Filter};
use crate::map::{Annotate, Bind, Select, SelectMany};
use crate::random;
use crate::reverse::Reverse;
use crate::slice::{Skip, Take};
use crate::sort::{self, Comparator};
use crate::source::Source;
use crate::traits::{SequenceOp, ValueIter};

/// Wrap a concrete collection into a pipeline node.
///
/// The collection is held once and re-traversed on every consumption.
pub fn as_query<I>(source: I) -> Query
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let items: Vec<Value> = source.into_iter().map(Into::into).collect();
    Query::from_source(Source::Items(Rc::new(items)))
}

/// Wrap a zero-argument factory into a pipeline node.
///
/// The factory is invoked once per consumption request. A factory backed by
/// single-pass state is legal but meaningfully consumable only once; the
/// engine does not enforce repeatability.
pub fn as_query_with<F, I>(factory: F) -> Query
where
    F: Fn() -> I + 'static,
    I: IntoIterator<Item = Value>,
    I::IntoIter: 'static,
{
    let factory = move || Box::new(factory().into_iter()) as Box<dyn Iterator<Item = Value>>;
    Query::from_source(Source::Factory(Rc::new(factory)))
}

#[derive(Clone)]
pub struct Query {
    source: Source,
    comparer: Option<Comparator>,
}

impl std::fmt::Debug for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query")
            .field("source", &self.source.name())
            .field("comparer", &self.comparer.is_some())
            .finish()
    }
}

impl Query {
    pub(crate) fn from_source(source: Source) -> Self {
        Query {
            source,
            comparer: None,
        }
    }

    /// New node over a deferred operator.
    fn over(op: impl SequenceOp + 'static) -> Self {
        Query::from_source(Source::Op(Rc::new(op)))
    }

    /// New node wrapping `self`, carrying a comparator fixed at construction.
    fn ordered(self, comparer: Comparator) -> Self {
        Query {
            source: Source::Node(Rc::new(self)),
            comparer: Some(comparer),
        }
    }

    /// Begin one traversal of this node's sequence.
    ///
    /// Without a comparator this delegates straight to the source and
    /// streams. With one, the upstream sequence is realized into a buffer,
    /// stable-sorted, and the buffer is streamed; operators chained after
    /// this node still pull lazily from the sorted buffer.
    pub fn iter(&self) -> ValueIter<'_> {
        let upstream = self.source.open();
        match &self.comparer {
            None => upstream,
            Some(comparer) => {
                let mut buf: Vec<Value> = upstream.collect();
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    rows = buf.len(),
                    source = self.source.name(),
                    "sort materialized upstream"
                );
                buf.sort_by(|a, b| (**comparer)(a, b));
                Box::new(buf.into_iter())
            }
        }
    }

    // ---- intermediate (deferred) operators -------------------------------

    /// All of self, then `item`.
    pub fn append(self, item: impl Into<Value>) -> Query {
        Query::over(Append {
            input: self,
            item: item.into(),
        })
    }

    /// `item`, then all of self.
    pub fn prepend(self, item: impl Into<Value>) -> Query {
        Query::over(Prepend {
            input: self,
            item: item.into(),
        })
    }

    /// All of self, then all of `other`.
    pub fn concat(self, other: Query) -> Query {
        Query::over(Chain { input: self, other })
    }

    /// Keep elements the predicate accepts.
    pub fn filter<P>(self, pred: P) -> Query
    where
        P: Fn(&Value) -> bool + 'static,
    {
        Query::over(Filter {
            input: self,
            pred: Box::new(pred),
        })
    }

    /// Keep elements the predicate rejects.
    pub fn filter_not<P>(self, pred: P) -> Query
    where
        P: Fn(&Value) -> bool + 'static,
    {
        self.filter(move |v| !pred(v))
    }

    /// Keep elements whose runtime kind matches the discriminant.
    pub fn filter_kind(self, kind: Kind) -> Query {
        self.filter(move |v| v.kind() == kind)
    }

    /// Project each element through `project`.
    pub fn select<F>(self, project: F) -> Query
    where
        F: Fn(&Value) -> Value + 'static,
    {
        Query::over(Select {
            input: self,
            project: Box::new(project),
        })
    }

    /// Expand each element into a sub-sequence and flatten.
    pub fn select_many<F>(self, expand: F) -> Query
    where
        F: Fn(&Value) -> Vec<Value> + 'static,
    {
        Query::over(SelectMany {
            input: self,
            expand: Box::new(expand),
            combine: None,
        })
    }

    /// Expand, then combine each (outer, inner) pair into one result.
    pub fn select_many_with<F, R>(self, expand: F, combine: R) -> Query
    where
        F: Fn(&Value) -> Vec<Value> + 'static,
        R: Fn(&Value, &Value) -> Value + 'static,
    {
        Query::over(SelectMany {
            input: self,
            expand: Box::new(expand),
            combine: Some(Box::new(combine)),
        })
    }

    /// Exclude members of `other`.
    ///
    /// `other` is fully realized into a membership set here, at call time;
    /// only the kept side stays deferred.
    pub fn except(self, other: Query) -> Query {
        let excluded: HashSet<Value> = other.iter().collect();
        #[cfg(feature = "tracing")]
        tracing::trace!(excluded = excluded.len(), "except realized exclusion set");
        Query::over(Except {
            input: self,
            excluded,
        })
    }

    /// Concatenate, then dedupe.
    pub fn union(self, other: Query) -> Query {
        self.concat(other).distinct()
    }

    /// Yield back-to-front. Materializes on traversal.
    pub fn reverse(self) -> Query {
        Query::over(Reverse { input: self })
    }

    /// First `count` elements.
    pub fn take(self, count: usize) -> Query {
        Query::over(Take { input: self, count })
    }

    /// Everything after the first `count` elements.
    pub fn skip(self, count: usize) -> Query {
        Query::over(Skip { input: self, count })
    }

    /// Suppress repeats of values already seen in this traversal.
    pub fn distinct(self) -> Query {
        Query::over(Distinct { input: self })
    }

    // ---- ordering --------------------------------------------------------

    /// Sort ascending by the elements themselves.
    pub fn order(self) -> Query {
        self.ordered(sort::natural(false))
    }

    /// Sort descending by the elements themselves.
    pub fn order_descending(self) -> Query {
        self.ordered(sort::natural(true))
    }

    /// Sort ascending by `key(element)`.
    pub fn order_by<K>(self, key: K) -> Query
    where
        K: Fn(&Value) -> Value + 'static,
    {
        self.ordered(sort::by_key(key, false))
    }

    /// Sort descending by `key(element)`.
    pub fn order_by_descending<K>(self, key: K) -> Query
    where
        K: Fn(&Value) -> Value + 'static,
    {
        self.ordered(sort::by_key(key, true))
    }

    /// Add an ascending tie-breaker to this node's ordering.
    ///
    /// On a node with no ordering this silently becomes a primary ascending
    /// sort. The combined comparator goes onto a new node; the ancestor's
    /// comparator is never touched.
    pub fn then_by<K>(self, key: K) -> Query
    where
        K: Fn(&Value) -> Value + 'static,
    {
        match self.comparer.clone() {
            None => self.order_by(key),
            Some(primary) => {
                let combined = sort::chain(primary, sort::by_key(key, false));
                self.ordered(combined)
            }
        }
    }

    /// Add a descending tie-breaker; same fallback as `then_by`.
    pub fn then_by_descending<K>(self, key: K) -> Query
    where
        K: Fn(&Value) -> Value + 'static,
    {
        match self.comparer.clone() {
            None => self.order_by_descending(key),
            Some(primary) => {
                let combined = sort::chain(primary, sort::by_key(key, true));
                self.ordered(combined)
            }
        }
    }

    // ---- record tagging --------------------------------------------------

    /// Wrap each element into a record: the element under the reserved slot,
    /// plus `field: produce(element)`. Rejects the reserved name here, before
    /// any element is produced.
    pub fn bind<F>(self, field: &str, produce: F) -> Result<Query>
    where
        F: Fn(&Value) -> Value + 'static,
    {
        reserved_check(field)?;
        Ok(Query::over(Bind {
            input: self,
            field: field.to_string(),
            produce: Box::new(produce),
        }))
    }

    /// Add `field: produce(element)` to each record element; non-records
    /// pass through unchanged. Same reserved-name rejection as `bind`.
    pub fn annotate<F>(self, field: &str, produce: F) -> Result<Query>
    where
        F: Fn(&Value) -> Value + 'static,
    {
        reserved_check(field)?;
        Ok(Query::over(Annotate {
            input: self,
            field: field.to_string(),
            produce: Box::new(produce),
        }))
    }

    // ---- terminal (eager) operators --------------------------------------

    /// True if the sequence has any element at all. Short-circuits.
    pub fn any(&self) -> bool {
        self.iter().next().is_some()
    }

    /// True if any element satisfies the predicate. Short-circuits.
    pub fn any_where<P>(&self, pred: P) -> bool
    where
        P: Fn(&Value) -> bool,
    {
        self.iter().any(|v| pred(&v))
    }

    /// True only if every element satisfies the predicate. Short-circuits on
    /// the first failure.
    pub fn all<P>(&self, pred: P) -> bool
    where
        P: Fn(&Value) -> bool,
    {
        self.iter().all(|v| pred(&v))
    }

    /// True if any element is value-equal to `item`.
    pub fn contains(&self, item: &Value) -> bool {
        self.iter().any(|v| &v == item)
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn count_where<P>(&self, pred: P) -> usize
    where
        P: Fn(&Value) -> bool,
    {
        self.iter().filter(|v| pred(v)).count()
    }

    /// Numeric accumulation; zero for an empty sequence. Fails at the first
    /// non-numeric element, which a filtered or take-limited traversal may
    /// never reach.
    pub fn sum(&self) -> Result<f64> {
        let mut total = 0.0;
        for v in self.iter() {
            total += numeric(&v)?;
        }
        Ok(total)
    }

    /// Accumulate `selector(element)`; the selector narrows statically, so
    /// this cannot fail.
    pub fn sum_by<S>(&self, selector: S) -> f64
    where
        S: Fn(&Value) -> f64,
    {
        self.iter().map(|v| selector(&v)).sum()
    }

    /// The element achieving the numeric minimum; first wins on ties.
    pub fn min_element(&self) -> Result<Option<Value>> {
        let mut best: Option<(f64, Value)> = None;
        for v in self.iter() {
            let n = numeric(&v)?;
            let replace = match &best {
                None => true,
                Some((m, _)) => n < *m,
            };
            if replace {
                best = Some((n, v));
            }
        }
        Ok(best.map(|(_, v)| v))
    }

    /// The element minimizing `selector(element)`; first wins on ties.
    pub fn min_element_by<S>(&self, selector: S) -> Option<Value>
    where
        S: Fn(&Value) -> f64,
    {
        let mut best: Option<(f64, Value)> = None;
        for v in self.iter() {
            let n = selector(&v);
            let replace = match &best {
                None => true,
                Some((m, _)) => n < *m,
            };
            if replace {
                best = Some((n, v));
            }
        }
        best.map(|(_, v)| v)
    }

    /// The element achieving the numeric maximum; first wins on ties.
    pub fn max_element(&self) -> Result<Option<Value>> {
        let mut best: Option<(f64, Value)> = None;
        for v in self.iter() {
            let n = numeric(&v)?;
            let replace = match &best {
                None => true,
                Some((m, _)) => n > *m,
            };
            if replace {
                best = Some((n, v));
            }
        }
        Ok(best.map(|(_, v)| v))
    }

    /// The element maximizing `selector(element)`; first wins on ties.
    pub fn max_element_by<S>(&self, selector: S) -> Option<Value>
    where
        S: Fn(&Value) -> f64,
    {
        let mut best: Option<(f64, Value)> = None;
        for v in self.iter() {
            let n = selector(&v);
            let replace = match &best {
                None => true,
                Some((m, _)) => n > *m,
            };
            if replace {
                best = Some((n, v));
            }
        }
        best.map(|(_, v)| v)
    }

    /// The minimum numeric value; `None` on an empty sequence.
    pub fn min(&self) -> Result<Option<f64>> {
        Ok(self.min_element()?.and_then(|v| v.as_f64()))
    }

    /// The minimum of `selector(element)`; `None` on an empty sequence.
    pub fn min_by<S>(&self, selector: S) -> Option<f64>
    where
        S: Fn(&Value) -> f64,
    {
        self.iter().map(|v| selector(&v)).fold(None, |acc, n| {
            Some(match acc {
                None => n,
                Some(m) => {
                    if n < m {
                        n
                    } else {
                        m
                    }
                }
            })
        })
    }

    /// The maximum numeric value; `None` on an empty sequence.
    pub fn max(&self) -> Result<Option<f64>> {
        Ok(self.max_element()?.and_then(|v| v.as_f64()))
    }

    /// The maximum of `selector(element)`; `None` on an empty sequence.
    pub fn max_by<S>(&self, selector: S) -> Option<f64>
    where
        S: Fn(&Value) -> f64,
    {
        self.iter().map(|v| selector(&v)).fold(None, |acc, n| {
            Some(match acc {
                None => n,
                Some(m) => {
                    if n > m {
                        n
                    } else {
                        m
                    }
                }
            })
        })
    }

    /// `sum / count`, dividing even when the count is zero: an empty
    /// sequence yields NaN rather than an error.
    pub fn average(&self) -> Result<f64> {
        let count = self.count();
        let sum = self.sum()?;
        Ok(sum / count as f64)
    }

    /// Elements matching `pred` as the denominator, the sum of `selector`
    /// over *all* elements as the numerator. The numerator is deliberately
    /// unfiltered; callers wanting both sides filtered should filter first.
    pub fn average_with<P, S>(&self, pred: P, selector: S) -> f64
    where
        P: Fn(&Value) -> bool,
        S: Fn(&Value) -> f64,
    {
        let count = self.count_where(|v| pred(v));
        let sum = self.sum_by(selector);
        sum / count as f64
    }

    /// First element, if any. Pulls at most one.
    pub fn first(&self) -> Option<Value> {
        self.iter().next()
    }

    /// First element satisfying the predicate. Short-circuits.
    pub fn first_where<P>(&self, pred: P) -> Option<Value>
    where
        P: Fn(&Value) -> bool,
    {
        self.iter().find(|v| pred(v))
    }

    /// Last element. Costs a full traversal regardless of the source shape.
    pub fn last(&self) -> Option<Value> {
        let buf: Vec<Value> = self.iter().collect();
        buf.into_iter().next_back()
    }

    /// Last element satisfying the predicate. Full traversal, then a
    /// backward scan.
    pub fn last_where<P>(&self, pred: P) -> Option<Value>
    where
        P: Fn(&Value) -> bool,
    {
        let buf: Vec<Value> = self.iter().collect();
        buf.into_iter().rev().find(|v| pred(v))
    }

    /// One uniformly chosen element, or `None` if the sequence is empty.
    pub fn random_one(&self) -> Option<Value> {
        let buf: Vec<Value> = self.iter().collect();
        random::pick_one(&buf)
    }

    /// One uniformly chosen element among those matching the predicate.
    pub fn random_one_where<P>(&self, pred: P) -> Option<Value>
    where
        P: Fn(&Value) -> bool,
    {
        let buf: Vec<Value> = self.iter().filter(|v| pred(v)).collect();
        random::pick_one(&buf)
    }

    /// Up to `count` elements of a uniform permutation of the sequence.
    pub fn random(&self, count: usize) -> Vec<Value> {
        random::pick(self.iter().collect(), count)
    }

    /// Materialize into an ordered sequence.
    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().collect()
    }

    /// Materialize into a uniqueness-enforcing set.
    pub fn to_set(&self) -> HashSet<Value> {
        self.iter().collect()
    }

    /// Apply `f` to every element for its side effects.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&Value),
    {
        for v in self.iter() {
            f(&v);
        }
    }
}

impl<'a> IntoIterator for &'a Query {
    type Item = Value;
    type IntoIter = ValueIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn reserved_check(field: &str) -> Result<()> {
    if field == VALUE_SLOT {
        return Err(Error::ReservedField(field.to_string()));
    }
    Ok(())
}

fn numeric(v: &Value) -> Result<f64> {
    v.as_f64().ok_or_else(|| Error::NonNumeric(v.kind()))
}
