//! Group records by a derived key and reduce each group to a summary.
//!
//! ```
//! use group_reduce::group;
//! use serde_json::json;
//!
//! let totals = group(json!([
//!     { "id": 1, "count": 1 },
//!     { "id": 1, "count": 2 },
//!     { "id": 2, "count": 3 },
//! ]))
//! .by_field("id")
//! .reduce(|key, rows| {
//!     let sum: i64 = rows.iter().filter_map(|r| r["count"].as_i64()).sum();
//!     (key.parse::<i64>().unwrap(), sum)
//! });
//! assert_eq!(totals, vec![(1, 3), (2, 3)]);
//! ```
#![allow(clippy::multiple_crate_versions)]

pub use group_reduce_domain::{
    Bucket, BucketSet, FieldAccess, GroupOptions, GroupOptionsBuilder, Grouper, KeyOrder, RegroupPolicy, Selector,
};
pub use group_reduce_shared_kernel::{Entries, GroupKey, GroupReduceError, Result, UNDEFINED_KEY};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Starts a grouping pipeline over `initial`.
///
/// A `Vec`, array or JSON array is taken as the starting collection; anything
/// wrapped in [`Entries::one`] (or any non-array JSON value) becomes a
/// one-record collection.
pub fn group<T>(initial: impl Into<Entries<T>>) -> Grouper<T> {
    Grouper::new(initial)
}

/// Same as [`group`] with explicit options.
pub fn group_with<T>(initial: impl Into<Entries<T>>, options: GroupOptions) -> Grouper<T> {
    Grouper::with_options(initial, options)
}
