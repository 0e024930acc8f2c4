pub mod key_order;
pub mod regroup_policy;

pub use key_order::KeyOrder;
pub use regroup_policy::RegroupPolicy;
