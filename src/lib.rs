//! # landlord
//!
//! A Monopoly-style property and rent rules engine.
//!
//! ## Design Principles
//!
//! 1. **Explicit context**: the [`Bank`] is a value you create and pass
//!    by reference, never process-global state.
//!
//! 2. **Tagged variants**: Land, Station and Utility are one
//!    [`PropertyKind`] enum. Behavior that differs per kind matches on
//!    it instead of dispatching through a class hierarchy.
//!
//! 3. **Pure rules**: rent is decided by a fixed-order pipeline of pure
//!    rules ([`RentChain`]). Rules hold no state and no links, so one
//!    chain serves any number of assessments.
//!
//! ## Modules
//!
//! - `core`: ownership tags and the bank context
//! - `properties`: ownable assets and their factory
//! - `rent`: the rent rule pipeline
//! - `players`: players, the name-keyed store, the sheet view/controller
//! - `board`: ordered squares with forward traversal

pub mod board;
pub mod core;
pub mod error;
pub mod players;
pub mod properties;
pub mod rent;

// Re-export commonly used types
pub use crate::board::{Board, Square};
pub use crate::core::{Bank, Owner};
pub use crate::error::{Error, Result};
pub use crate::players::{Player, PlayerController, PlayerStore, PlayerView};
pub use crate::properties::{Property, PropertyFactory, PropertyKind, MAX_HOUSES};
pub use crate::rent::{Exemption, RentBasis, RentChain, RentRule, RentVerdict, HOUSE_RENT};
