//! Projection operators, including the record-tagging pair.

use seqlinq_core::{Value, VALUE_SLOT};

use crate::query::Query;
use crate::traits::{Projection, SequenceOp, ValueIter};

/// Project each element through a closure.
pub struct Select {
    pub(crate) input: Query,
    pub(crate) project: Projection,
}

impl SequenceOp for Select {
    fn name(&self) -> &'static str {
        "select"
    }

    fn open(&self) -> ValueIter<'_> {
        Box::new(self.input.iter().map(move |v| (self.project)(&v)))
    }
}

/// Flatten: expand each element into a sub-sequence, optionally combining
/// (outer, inner) pairs into one result.
pub struct SelectMany {
    pub(crate) input: Query,
    pub(crate) expand: Box<dyn Fn(&Value) -> Vec<Value>>,
    pub(crate) combine: Option<Box<dyn Fn(&Value, &Value) -> Value>>,
}

impl SequenceOp for SelectMany {
    fn name(&self) -> &'static str {
        "select_many"
    }

    fn open(&self) -> ValueIter<'_> {
        Box::new(self.input.iter().flat_map(move |outer| {
            let inners = (self.expand)(&outer);
            let produced: Vec<Value> = match &self.combine {
                Some(combine) => inners.iter().map(|inner| combine(&outer, inner)).collect(),
                None => inners,
            };
            produced.into_iter()
        }))
    }
}

/// Wrap each element into a record holding the element in the reserved slot
/// plus one computed field. The reserved-name check happened at construction.
pub struct Bind {
    pub(crate) input: Query,
    pub(crate) field: String,
    pub(crate) produce: Projection,
}

impl SequenceOp for Bind {
    fn name(&self) -> &'static str {
        "bind"
    }

    fn open(&self) -> ValueIter<'_> {
        Box::new(self.input.iter().map(move |v| {
            let tag = (self.produce)(&v);
            let mut fields = Value::record();
            fields.insert(VALUE_SLOT.to_string(), v);
            fields.insert(self.field.clone(), tag);
            Value::Record(fields)
        }))
    }
}

/// Add one computed field to each record element.
///
/// Non-record elements pass through unchanged; the tag closure still runs on
/// them, so its side effects happen whether or not the write lands.
pub struct Annotate {
    pub(crate) input: Query,
    pub(crate) field: String,
    pub(crate) produce: Projection,
}

impl SequenceOp for Annotate {
    fn name(&self) -> &'static str {
        "annotate"
    }

    fn open(&self) -> ValueIter<'_> {
        Box::new(self.input.iter().map(move |v| {
            let tag = (self.produce)(&v);
            match v {
                Value::Record(mut fields) => {
                    fields.insert(self.field.clone(), tag);
                    Value::Record(fields)
                }
                other => other,
            }
        }))
    }
}
