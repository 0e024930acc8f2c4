use group_reduce_shared_kernel::GroupKey;
use serde::{Deserialize, Serialize};

/// Records sharing one key, in working-collection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket<T> {
    pub key: GroupKey,
    pub records: Vec<T>,
}

impl<T> Bucket<T> {
    pub fn new(key: GroupKey, first: T) -> Self {
        Self { key, records: vec![first] }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_parts(self) -> (GroupKey, Vec<T>) {
        (self.key, self.records)
    }
}
