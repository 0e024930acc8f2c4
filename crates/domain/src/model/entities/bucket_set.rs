use std::collections::HashMap;

use group_reduce_shared_kernel::GroupKey;
use log::trace;

use super::Bucket;

/// Buckets in first-seen key order with a text index on the side.
#[derive(Debug, Clone)]
pub struct BucketSet<T> {
    buckets: Vec<Bucket<T>>,
    index: HashMap<GroupKey, usize>,
}

impl<T> BucketSet<T> {
    pub fn new() -> Self {
        Self { buckets: Vec::new(), index: HashMap::new() }
    }

    /// Adds `record` under `key`, opening a bucket at the end if the key is new.
    ///
    /// Returns `true` when a bucket was opened.
    pub fn insert(&mut self, key: GroupKey, record: T) -> bool {
        if let Some(&pos) = self.index.get(key.as_str()) {
            self.buckets[pos].records.push(record);
            return false;
        }
        trace!("opening bucket #{} for key {:?}", self.buckets.len(), key.as_str());
        self.index.insert(key.clone(), self.buckets.len());
        self.buckets.push(Bucket::new(key, record));
        true
    }

    pub fn get(&self, key: &str) -> Option<&Bucket<T>> {
        self.index.get(key).map(|&pos| &self.buckets[pos])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.buckets.iter().map(|bucket| &bucket.key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bucket<T>> {
        self.buckets.iter()
    }

    pub fn as_slice(&self) -> &[Bucket<T>] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
        self.index.clear();
    }
}

impl<T> Default for BucketSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for BucketSet<T> {
    type Item = Bucket<T>;
    type IntoIter = std::vec::IntoIter<Bucket<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a BucketSet<T> {
    type Item = &'a Bucket<T>;
    type IntoIter = std::slice::Iter<'a, Bucket<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}
