//! Ownable board assets: land, stations, utilities.
//!
//! A `Property` carries both its immutable listing data (name, kind,
//! price, derived base rent) and its mutable table state (owner,
//! mortgage flag, house count).

use serde::{Deserialize, Serialize};

use crate::core::Owner;

/// Most houses a land property can carry.
///
/// The rent table has one entry per count; counts past this bound are a
/// domain error at assessment time.
pub const MAX_HOUSES: u8 = 5;

/// The three ownable asset kinds.
///
/// Only [`Land`](PropertyKind::Land) builds houses; the other kinds
/// never accumulate any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    /// Buildable land; rent scales with houses.
    Land,
    /// Railway station.
    Station,
    /// Service company (water, electricity).
    Utility,
}

/// An ownable board asset.
///
/// Name, kind, price and base rent are fixed at creation; owner,
/// mortgage flag and house count mutate through setters. Base rent is
/// 10% of the price, truncated.
///
/// ## Example
///
/// ```
/// use landlord::properties::{Property, PropertyKind};
///
/// let land = Property::new(PropertyKind::Land, "Rue de la Paix", 400);
/// assert_eq!(land.base_rent(), 40);
/// assert!(land.owner().is_bank());
/// assert!(!land.is_mortgaged());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    name: String,
    kind: PropertyKind,
    price: i64,
    owner: Owner,
    mortgaged: bool,
    houses: u8,
    base_rent: i64,
}

impl Property {
    /// Create a bank-owned property.
    ///
    /// Starts unmortgaged with zero houses. Panics if `price` is
    /// negative.
    #[must_use]
    pub fn new(kind: PropertyKind, name: impl Into<String>, price: i64) -> Self {
        Self::with_owner(kind, name, price, Owner::Bank)
    }

    /// Create a property with an explicit initial owner.
    #[must_use]
    pub fn with_owner(
        kind: PropertyKind,
        name: impl Into<String>,
        price: i64,
        owner: Owner,
    ) -> Self {
        assert!(price >= 0, "Property price must be non-negative");
        Self {
            name: name.into(),
            kind,
            price,
            owner,
            mortgaged: false,
            houses: 0,
            base_rent: price / 10,
        }
    }

    /// Property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Asset kind.
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Purchase price.
    #[must_use]
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Current holder.
    #[must_use]
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Reassign the holder. No uniqueness or existence checks.
    pub fn set_owner(&mut self, owner: Owner) {
        self.owner = owner;
    }

    /// Whether the property is pledged to the bank.
    #[must_use]
    pub fn is_mortgaged(&self) -> bool {
        self.mortgaged
    }

    /// Pledge the property to the bank.
    pub fn mortgage(&mut self) {
        self.mortgaged = true;
    }

    /// Lift the pledge.
    pub fn unmortgage(&mut self) {
        self.mortgaged = false;
    }

    /// Houses built on the property.
    #[must_use]
    pub fn houses(&self) -> u8 {
        self.houses
    }

    /// Set the house count.
    ///
    /// Only meaningful for [`PropertyKind::Land`]. Keeping the count
    /// within `0..=MAX_HOUSES` is the caller's responsibility; rent
    /// assessment rejects larger counts with a domain error rather than
    /// indexing past the table.
    pub fn set_houses(&mut self, houses: u8) {
        self.houses = houses;
    }

    /// Rent with no houses built, fixed at creation from the price.
    #[must_use]
    pub fn base_rent(&self) -> i64 {
        self.base_rent
    }

    /// Human-readable description; content differs per kind.
    ///
    /// Land shows the full table state; stations and utilities show only
    /// name and price.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            PropertyKind::Land => {
                let status = if self.mortgaged {
                    "mortgaged"
                } else {
                    "not mortgaged"
                };
                format!(
                    "Land: {} - price: {} - owner: {} - {} - houses: {}",
                    self.name, self.price, self.owner, status, self.houses
                )
            }
            PropertyKind::Station => format!("Station: {} - price: {}", self.name, self.price),
            PropertyKind::Utility => format!("Utility: {} - price: {}", self.name, self.price),
        }
    }
}
