//! Rent assessment: ordered pure rules in a fixed pipeline.
//!
//! The chain consults the property's owner, mortgage flag and house
//! count, in that precedence order, and never mutates either input.
//! Money moves elsewhere; the chain only says how much is owed.
//!
//! ## Key Types
//!
//! - `RentRule`: one predicate + outcome (BankOwned / OwnerVisit /
//!   Mortgaged / Houses)
//! - `RentChain`: the fixed-order driver
//! - `RentVerdict`: exempt, due (with its basis), or explicitly
//!   unassessed when the pipeline runs dry

pub mod chain;
pub mod rules;

pub use chain::RentChain;
pub use rules::{Exemption, RentBasis, RentRule, RentVerdict, HOUSE_RENT};
