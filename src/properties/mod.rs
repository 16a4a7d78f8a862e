//! Ownable assets and their factory.
//!
//! ## Key Types
//!
//! - `PropertyKind`: Land / Station / Utility
//! - `Property`: listing data plus mutable table state
//! - `PropertyFactory`: tag-driven construction, the only fallible
//!   creation path

pub mod factory;
pub mod property;

pub use factory::PropertyFactory;
pub use property::{Property, PropertyKind, MAX_HOUSES};
