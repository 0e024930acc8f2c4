pub mod options;

pub use options::{GroupOptions, GroupOptionsBuilder, GroupOptionsBuilderError};
