pub mod aggregates;
pub mod value_objects;

pub use aggregates::{GroupOptions, GroupOptionsBuilder, GroupOptionsBuilderError};
pub use value_objects::{KeyOrder, RegroupPolicy};
