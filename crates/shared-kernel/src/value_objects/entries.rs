// crates/shared-kernel/src/value_objects/entries.rs
use serde_json::Value;

/// Either a single record or an ordered run of records.
///
/// This is the normalisation point for everything handed to a grouper: a
/// single record is treated as a one-element sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entries<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Entries<T> {
    pub fn one(record: T) -> Self {
        Self::One(record)
    }

    pub fn many(records: impl IntoIterator<Item = T>) -> Self {
        Self::Many(records.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(record) => vec![record],
            Self::Many(records) => records,
        }
    }

    /// Appends the records to `target`, keeping their order.
    pub fn append_to(self, target: &mut Vec<T>) {
        match self {
            Self::One(record) => target.push(record),
            Self::Many(mut records) => target.append(&mut records),
        }
    }
}

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<T> From<Vec<T>> for Entries<T> {
    fn from(records: Vec<T>) -> Self {
        Self::Many(records)
    }
}

impl<T, const N: usize> From<[T; N]> for Entries<T> {
    fn from(records: [T; N]) -> Self {
        Self::Many(records.into())
    }
}

impl<T: Clone> From<&[T]> for Entries<T> {
    fn from(records: &[T]) -> Self {
        Self::Many(records.to_vec())
    }
}

/// JSON arrays are sequences; every other value (`null` included) is one record.
impl From<Value> for Entries<Value> {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(records) => Self::Many(records),
            other => Self::One(other),
        }
    }
}

impl<T> IntoIterator for Entries<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<T> FromIterator<T> for Entries<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::many(iter)
    }
}
