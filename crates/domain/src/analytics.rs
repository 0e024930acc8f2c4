pub mod grouper;
pub mod selector;

pub use grouper::Grouper;
pub use selector::{FieldAccess, KeyFn, Selector};
