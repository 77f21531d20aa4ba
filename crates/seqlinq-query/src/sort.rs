//! Comparator construction and composition.
//!
//! A comparator is a total-order closure over element pairs. Ordering
//! operators build one from a key selector plus a direction flag; tie-breaker
//! operators chain a second comparator after the first. Composition always
//! allocates a new closure: an ancestor node's comparator is never touched.

use std::cmp::Ordering;
use std::rc::Rc;

use seqlinq_core::{value_cmp, Value};

/// Shared so a child node can capture its parent's comparator while the
/// parent keeps it. Single consumer thread; see the concurrency model.
pub type Comparator = Rc<dyn Fn(&Value, &Value) -> Ordering>;

/// Comparator over the elements themselves, no key extraction.
pub fn natural(descending: bool) -> Comparator {
    if descending {
        Rc::new(|a: &Value, b: &Value| value_cmp(b, a))
    } else {
        Rc::new(|a: &Value, b: &Value| value_cmp(a, b))
    }
}

/// Comparator over `key(element)`, ascending or descending.
pub fn by_key<F>(key: F, descending: bool) -> Comparator
where
    F: Fn(&Value) -> Value + 'static,
{
    if descending {
        Rc::new(move |a: &Value, b: &Value| value_cmp(&key(b), &key(a)))
    } else {
        Rc::new(move |a: &Value, b: &Value| value_cmp(&key(a), &key(b)))
    }
}

/// Primary/secondary composition: `second` decides only where `first` ties.
pub fn chain(first: Comparator, second: Comparator) -> Comparator {
    Rc::new(move |a: &Value, b: &Value| match (*first)(a, b) {
        Ordering::Equal => (*second)(a, b),
        decided => decided,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_descending_reverses() {
        let asc = natural(false);
        let desc = natural(true);
        let one = Value::Int(1);
        let two = Value::Int(2);
        assert_eq!((*asc)(&one, &two), Ordering::Less);
        assert_eq!((*desc)(&one, &two), Ordering::Greater);
    }

    #[test]
    fn chain_breaks_ties_only() {
        let primary = by_key(|v| v.get("a").cloned().unwrap_or(Value::Null), false);
        let secondary = by_key(|v| v.get("b").cloned().unwrap_or(Value::Null), false);
        let combined = chain(primary, secondary);

        let mut left = Value::record();
        left.insert("a".into(), Value::Int(1));
        left.insert("b".into(), Value::Int(2));
        let mut right = Value::record();
        right.insert("a".into(), Value::Int(1));
        right.insert("b".into(), Value::Int(1));

        assert_eq!(
            (*combined)(&Value::Record(left), &Value::Record(right)),
            Ordering::Greater
        );
    }
}
