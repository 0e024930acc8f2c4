pub mod bucket;
pub mod bucket_set;

pub use bucket::Bucket;
pub use bucket_set::BucketSet;
