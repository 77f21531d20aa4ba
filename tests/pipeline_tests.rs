//! Deferred operator tests: chaining, laziness, re-iteration.


use std::cell::Cell;
use std::rc::Rc;

use seqlinq::{as_query, as_query_with, Value};
use test_data_gen::{int_values, ints};

#[test]
fn filter_and_select_stream_through() {
    // Concrete scenario: evens scaled by ten.
    let result = ints(&[1, 2, 3, 4])
        .filter(|v| matches!(v, Value::Int(n) if n % 2 == 0))
        .select(|v| match v {
            Value::Int(n) => Value::Int(n * 10),
            other => other.clone(),
        })
        .to_vec();
    assert_eq!(result, int_values(&[20, 40]));
}

#[test]
fn filter_not_negates() {
    let result = ints(&[1, 2, 3, 4])
        .filter_not(|v| matches!(v, Value::Int(n) if n % 2 == 0))
        .to_vec();
    assert_eq!(result, int_values(&[1, 3]));
}

#[test]
fn filter_kind_matches_discriminant() {
    let mixed = vec![
        Value::Int(1),
        Value::Str("x".into()),
        Value::Int(2),
        Value::Null,
    ];
    let result = as_query(mixed).filter_kind(seqlinq::Kind::Int).to_vec();
    assert_eq!(result, int_values(&[1, 2]));
}

#[test]
fn chaining_defers_all_work() {
    let calls = Rc::new(Cell::new(0usize));
    let observed = Rc::clone(&calls);
    let q = as_query_with(move || {
        observed.set(observed.get() + 1);
        int_values(&[1, 2, 3])
    });

    // Building the chain must not invoke the producer.
    let chained = q
        .filter(|v| matches!(v, Value::Int(n) if *n > 1))
        .select(|v| v.clone());
    assert_eq!(calls.get(), 0);

    assert_eq!(chained.to_vec(), int_values(&[2, 3]));
    assert_eq!(calls.get(), 1);

    // Re-iteration restarts the producer chain from scratch.
    assert_eq!(chained.to_vec(), int_values(&[2, 3]));
    assert_eq!(calls.get(), 2);
}

#[test]
fn take_streams_from_an_endless_factory() {
    let q = as_query_with(|| (0i64..).map(Value::Int));
    assert_eq!(q.take(3).to_vec(), int_values(&[0, 1, 2]));
}

#[test]
fn take_and_skip_slice_by_position() {
    assert_eq!(ints(&[1, 2, 3, 4, 5]).take(2).to_vec(), int_values(&[1, 2]));
    assert_eq!(ints(&[1, 2, 3, 4, 5]).skip(3).to_vec(), int_values(&[4, 5]));
    assert_eq!(ints(&[1, 2]).take(0).to_vec(), vec![]);
    assert_eq!(ints(&[1, 2]).take(10).to_vec(), int_values(&[1, 2]));
    assert_eq!(ints(&[1, 2]).skip(10).to_vec(), vec![]);
}

#[test]
fn append_prepend_concat_order() {
    assert_eq!(ints(&[2, 3]).append(4i64).to_vec(), int_values(&[2, 3, 4]));
    assert_eq!(ints(&[2, 3]).prepend(1i64).to_vec(), int_values(&[1, 2, 3]));
    assert_eq!(
        ints(&[1, 2]).concat(ints(&[3, 4])).to_vec(),
        int_values(&[1, 2, 3, 4])
    );
}

#[test]
fn select_many_flattens() {
    // Each n expands to [n, n].
    let result = ints(&[1, 2])
        .select_many(|v| vec![v.clone(), v.clone()])
        .to_vec();
    assert_eq!(result, int_values(&[1, 1, 2, 2]));
}

#[test]
fn select_many_with_combines_outer_and_inner() {
    let result = ints(&[10, 20])
        .select_many_with(
            |_| int_values(&[1, 2]),
            |outer, inner| match (outer, inner) {
                (Value::Int(o), Value::Int(i)) => Value::Int(o + i),
                _ => Value::Null,
            },
        )
        .to_vec();
    assert_eq!(result, int_values(&[11, 12, 21, 22]));
}

#[test]
fn distinct_keeps_first_seen_order() {
    assert_eq!(
        ints(&[1, 1, 2, 3, 3]).distinct().to_vec(),
        int_values(&[1, 2, 3])
    );
}

#[test]
fn distinct_state_resets_between_iterations() {
    let q = ints(&[1, 1, 2]).distinct();
    assert_eq!(q.to_vec(), int_values(&[1, 2]));
    assert_eq!(q.to_vec(), int_values(&[1, 2]));
}

#[test]
fn distinct_crosses_numeric_kinds() {
    let mixed = vec![Value::Int(1), Value::Float(1.0), Value::Int(2)];
    assert_eq!(
        as_query(mixed).distinct().to_vec(),
        vec![Value::Int(1), Value::Int(2)]
    );
}

#[test]
fn except_excludes_members_of_other() {
    let result = ints(&[1, 2, 3, 4]).except(ints(&[2, 4])).to_vec();
    assert_eq!(result, int_values(&[1, 3]));
}

#[test]
fn except_realizes_other_once_up_front() {
    let calls = Rc::new(Cell::new(0usize));
    let observed = Rc::clone(&calls);
    let other = as_query_with(move || {
        observed.set(observed.get() + 1);
        int_values(&[2])
    });

    let q = ints(&[1, 2, 3]).except(other);
    assert_eq!(calls.get(), 1);

    assert_eq!(q.to_vec(), int_values(&[1, 3]));
    assert_eq!(q.to_vec(), int_values(&[1, 3]));
    // The exclusion side is never traversed again.
    assert_eq!(calls.get(), 1);
}

#[test]
fn union_is_concat_then_distinct() {
    let result = ints(&[1, 2, 2]).union(ints(&[2, 3])).to_vec();
    assert_eq!(result, int_values(&[1, 2, 3]));
}

#[test]
fn reverse_yields_back_to_front() {
    assert_eq!(ints(&[1, 2, 3]).reverse().to_vec(), int_values(&[3, 2, 1]));
}

#[test]
fn double_reverse_is_identity() {
    assert_eq!(
        ints(&[3, 1, 2]).reverse().reverse().to_vec(),
        int_values(&[3, 1, 2])
    );
}

#[test]
fn branches_share_the_producer_chain() {
    let base = ints(&[1, 2, 3, 4]).filter(|v| matches!(v, Value::Int(n) if *n > 1));
    let doubled = base.clone().select(|v| match v {
        Value::Int(n) => Value::Int(n * 2),
        other => other.clone(),
    });
    let kept = base.take(2);
    assert_eq!(doubled.to_vec(), int_values(&[4, 6, 8]));
    assert_eq!(kept.to_vec(), int_values(&[2, 3]));
}

#[test]
fn for_loop_iterates_a_node() {
    let q = ints(&[1, 2, 3]);
    let mut total = 0i64;
    for v in &q {
        if let Value::Int(n) = v {
            total += n;
        }
    }
    assert_eq!(total, 6);
}
