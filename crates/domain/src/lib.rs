#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod model;

pub use analytics::{FieldAccess, Grouper, Selector};
pub use config::{GroupOptions, GroupOptionsBuilder, KeyOrder, RegroupPolicy};
pub use model::{Bucket, BucketSet};
