//! Total order over `Value` pairs.
//!
//! Comparators in the query layer are all built from `value_cmp`: it must be
//! a genuine total order (antisymmetric, transitive, total) or a stable sort
//! over it is meaningless. Numerics compare numerically across `Int`/`Float`;
//! mixed, non-numeric kinds fall back to a fixed kind rank.

use std::cmp::Ordering;

use crate::value::Value;

/// Compare two values under the engine's canonical total order.
///
/// - `Null` sorts before everything else.
/// - `Int` vs `Float` compares numerically; floats use `total_cmp`, so NaN
///   has a definite place (after all other numbers) instead of poisoning the
///   sort.
/// - Lists compare lexicographically, then by length; records compare by
///   their ordered (field, value) entries the same way.
pub fn value_cmp(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => x.total_cmp(y),
        (Value::Int(x), Value::Float(y)) => (*x as f64).total_cmp(y),
        (Value::Float(x), Value::Int(y)) => x.total_cmp(&(*y as f64)),
        (Value::Str(x), Value::Str(y)) => x.cmp(y),
        (Value::Bytes(x), Value::Bytes(y)) => x.cmp(y),
        (Value::List(x), Value::List(y)) => seq_cmp(x.iter(), y.iter()),
        (Value::Record(x), Value::Record(y)) => {
            for ((ka, va), (kb, vb)) in x.iter().zip(y.iter()) {
                match ka.cmp(kb) {
                    Ordering::Equal => {}
                    other => return other,
                }
                match value_cmp(va, vb) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            x.len().cmp(&y.len())
        }
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn seq_cmp<'a>(
    a: impl Iterator<Item = &'a Value>,
    b: impl Iterator<Item = &'a Value>,
) -> Ordering {
    let mut a = a;
    let mut b = b;
    loop {
        match (a.next(), b.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match value_cmp(x, y) {
                Ordering::Equal => {}
                other => return other,
            },
        }
    }
}

/// Rank used only when two kinds are otherwise incomparable. Int and Float
/// share a rank; the numeric arms above always catch them first.
fn kind_rank(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::Str(_) => 3,
        Value::Bytes(_) => 4,
        Value::List(_) => 5,
        Value::Record(_) => 6,
    }
}
