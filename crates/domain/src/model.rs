pub mod entities;

pub use entities::{Bucket, BucketSet};
