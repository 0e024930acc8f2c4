// crates/shared-kernel/src/value_objects/mod.rs
pub mod entries;
pub mod key;

pub use entries::Entries;
pub use key::{GroupKey, UNDEFINED_KEY};
