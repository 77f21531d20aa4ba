//! Record-tagging operator tests: bind, annotate, reserved-name rejection.


use seqlinq::{as_query, Error, Value};
use test_data_gen::{field, ints};

#[test]
fn bind_wraps_elements_into_records() {
    let tagged = ints(&[2, 3])
        .bind("doubled", |v| match v {
            Value::Int(n) => Value::Int(n * 2),
            other => other.clone(),
        })
        .expect("legal field name")
        .to_vec();

    assert_eq!(tagged.len(), 2);
    assert_eq!(field(&tagged[0], "value"), Value::Int(2));
    assert_eq!(field(&tagged[0], "doubled"), Value::Int(4));
    assert_eq!(field(&tagged[1], "value"), Value::Int(3));
    assert_eq!(field(&tagged[1], "doubled"), Value::Int(6));
}

#[test]
fn annotate_extends_existing_records() {
    let tagged = ints(&[5])
        .bind("squared", |v| match v {
            Value::Int(n) => Value::Int(n * n),
            other => other.clone(),
        })
        .expect("legal field name")
        .annotate("original_plus_one", |v| match v.get("value") {
            Some(Value::Int(n)) => Value::Int(n + 1),
            _ => Value::Null,
        })
        .expect("legal field name")
        .to_vec();

    assert_eq!(tagged.len(), 1);
    assert_eq!(field(&tagged[0], "value"), Value::Int(5));
    assert_eq!(field(&tagged[0], "squared"), Value::Int(25));
    assert_eq!(field(&tagged[0], "original_plus_one"), Value::Int(6));
}

#[test]
fn annotate_passes_non_records_through() {
    let result = ints(&[1, 2])
        .annotate("tag", |_| Value::Bool(true))
        .expect("legal field name")
        .to_vec();
    assert_eq!(result, vec![Value::Int(1), Value::Int(2)]);
}

#[test]
fn reserved_field_is_rejected_at_call_time() {
    // Before any element is produced, including on a non-empty source.
    let err = ints(&[1, 2, 3]).bind("value", |v| v.clone()).unwrap_err();
    assert_eq!(err, Error::ReservedField("value".to_string()));

    let err = ints(&[]).annotate("value", |v| v.clone()).unwrap_err();
    assert_eq!(err, Error::ReservedField("value".to_string()));
}

#[test]
fn bind_then_sort_by_tag() {
    let sorted = ints(&[3, 1, 2])
        .bind("negated", |v| match v {
            Value::Int(n) => Value::Int(-n),
            other => other.clone(),
        })
        .expect("legal field name")
        .order_by(|v| field(v, "negated"))
        .select(|v| field(v, "value"))
        .to_vec();
    assert_eq!(sorted, vec![Value::Int(3), Value::Int(2), Value::Int(1)]);
}

#[test]
fn re_iterating_an_annotated_chain_is_idempotent() {
    let q = as_query(vec![Value::Record(Value::record())])
        .annotate("n", |_| Value::Int(1))
        .expect("legal field name");
    let first = q.to_vec();
    let second = q.to_vec();
    assert_eq!(first, second);
}
