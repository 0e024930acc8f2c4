// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{GroupReduceError, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::{Entries, GroupKey, UNDEFINED_KEY};
