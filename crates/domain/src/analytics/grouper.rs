use std::{collections::HashMap, convert::Infallible};

use group_reduce_shared_kernel::{Entries, GroupKey};
use log::debug;

use crate::{
    analytics::selector::{FieldAccess, Selector},
    config::{GroupOptions, RegroupPolicy},
    model::{Bucket, BucketSet},
};

/// Fluent group-by/reduce pipeline over an in-memory collection.
///
/// `and` appends records, `by` partitions the current records into buckets,
/// and `reduce`/`map` fold each bucket into a summary. Buckets come out in
/// the order their key was first seen, never sorted.
///
/// ```
/// use group_reduce_domain::analytics::Grouper;
///
/// let sums = Grouper::new(vec![(1, 10), (2, 5), (1, 3)])
///     .by(|&(id, _)| id)
///     .reduce(|key, rows| (key.into_string(), rows.iter().map(|(_, n)| n).sum::<i32>()));
/// assert_eq!(sums, vec![("1".to_string(), 13), ("2".to_string(), 5)]);
/// ```
#[derive(Debug, Clone)]
pub struct Grouper<T> {
    records: Vec<T>,
    buckets: BucketSet<T>,
    options: GroupOptions,
}

impl<T> Grouper<T> {
    pub fn new(initial: impl Into<Entries<T>>) -> Self {
        Self::with_options(initial, GroupOptions::default())
    }

    pub fn with_options(initial: impl Into<Entries<T>>, options: GroupOptions) -> Self {
        Self { records: initial.into().into_vec(), buckets: BucketSet::new(), options }
    }

    /// Appends records after the existing ones. Buckets are left alone until the next `by`.
    #[must_use]
    pub fn and(mut self, entries: impl Into<Entries<T>>) -> Self {
        entries.into().append_to(&mut self.records);
        self
    }

    /// The working collection.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Buckets computed by the last `by`, in first-seen order.
    pub fn buckets(&self) -> &[Bucket<T>] {
        self.buckets.as_slice()
    }

    pub fn options(&self) -> &GroupOptions {
        &self.options
    }

    /// Number of records in the working collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Folds every bucket into a summary, in bucket order.
    pub fn reduce<S>(self, mut reducer: impl FnMut(GroupKey, Vec<T>) -> S) -> Vec<S> {
        debug!("reducing {} buckets", self.buckets.len());
        self.into_ordered_buckets().into_iter().map(|bucket| reducer(bucket.key, bucket.records)).collect()
    }

    /// Like [`Grouper::reduce`], stopping at the first reducer error.
    ///
    /// # Errors
    ///
    /// Returns the reducer's own error; summaries computed before it are dropped.
    pub fn try_reduce<S, E>(self, mut reducer: impl FnMut(GroupKey, Vec<T>) -> Result<S, E>) -> Result<Vec<S>, E> {
        debug!("reducing {} buckets", self.buckets.len());
        self.into_ordered_buckets().into_iter().map(|bucket| reducer(bucket.key, bucket.records)).collect()
    }

    /// Folds every bucket into a summary keyed by the bucket's key text.
    pub fn map<S>(self, mut reducer: impl FnMut(GroupKey, Vec<T>) -> S) -> HashMap<String, S> {
        debug!("mapping {} buckets", self.buckets.len());
        self.into_ordered_buckets()
            .into_iter()
            .map(|bucket| {
                let text = bucket.key.as_str().to_owned();
                (text, reducer(bucket.key, bucket.records))
            })
            .collect()
    }

    /// Like [`Grouper::map`], stopping at the first reducer error.
    ///
    /// # Errors
    ///
    /// Returns the reducer's own error; no partial map is produced.
    pub fn try_map<S, E>(
        self,
        mut reducer: impl FnMut(GroupKey, Vec<T>) -> Result<S, E>,
    ) -> Result<HashMap<String, S>, E> {
        debug!("mapping {} buckets", self.buckets.len());
        self.into_ordered_buckets()
            .into_iter()
            .map(|bucket| {
                let text = bucket.key.as_str().to_owned();
                reducer(bucket.key, bucket.records).map(|summary| (text, summary))
            })
            .collect()
    }

    fn into_ordered_buckets(self) -> Vec<Bucket<T>> {
        let mut buckets: Vec<Bucket<T>> = self.buckets.into_iter().collect();
        self.options.key_order.arrange(&mut buckets, |bucket| &bucket.key);
        buckets
    }
}

impl<T: Clone> Grouper<T> {
    /// Partitions the working collection by the key `selector` returns.
    #[must_use]
    pub fn by<K: Into<GroupKey>>(self, mut selector: impl FnMut(&T) -> K) -> Self {
        match self.try_by(|record| Ok::<_, Infallible>(selector(record))) {
            Ok(grouper) => grouper,
            Err(never) => match never {},
        }
    }

    /// Like [`Grouper::by`] with a selector that may fail.
    ///
    /// # Errors
    ///
    /// Returns the selector's own error for the first record it rejects.
    pub fn try_by<K, E>(mut self, mut selector: impl FnMut(&T) -> Result<K, E>) -> Result<Self, E>
    where
        K: Into<GroupKey>,
    {
        if self.options.regroup == RegroupPolicy::Rebuild {
            self.buckets.clear();
        }
        for record in &self.records {
            let key = selector(record)?.into();
            self.buckets.insert(key, record.clone());
        }
        debug!(
            "grouped {} records into {} buckets ({})",
            self.records.len(),
            self.buckets.len(),
            self.options.regroup
        );
        Ok(self)
    }
}

impl<T: Clone + FieldAccess> Grouper<T> {
    /// Partitions by the value of a named field.
    #[must_use]
    pub fn by_field(self, name: &str) -> Self {
        self.by_selector(Selector::field(name))
    }

    #[must_use]
    pub fn by_selector(self, selector: Selector<'_, T>) -> Self {
        let key_fn = selector.resolve(GroupKey::new(self.options.missing_key.clone()));
        self.by(key_fn)
    }
}
