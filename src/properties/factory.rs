//! Tag-driven property construction.
//!
//! The factory is the one place creation can fail: an unrecognized tag
//! aborts with [`Error::UnknownPropertyKind`].

use crate::error::{Error, Result};

use super::property::{Property, PropertyKind};

impl PropertyKind {
    /// Parse a kind tag: `"land"`, `"station"` or `"utility"`.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "land" => Ok(PropertyKind::Land),
            "station" => Ok(PropertyKind::Station),
            "utility" => Ok(PropertyKind::Utility),
            other => Err(Error::UnknownPropertyKind(other.to_string())),
        }
    }

    /// The tag this kind parses from.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            PropertyKind::Land => "land",
            PropertyKind::Station => "station",
            PropertyKind::Utility => "utility",
        }
    }
}

/// Builds bank-owned properties from kind tags.
///
/// ## Example
///
/// ```
/// use landlord::properties::{PropertyFactory, PropertyKind};
///
/// let factory = PropertyFactory::new();
/// let land = factory.create("land", "Rue de la Paix", 400).unwrap();
/// assert_eq!(land.kind(), PropertyKind::Land);
///
/// assert!(factory.create("casino", "Lucky Strike", 999).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PropertyFactory;

impl PropertyFactory {
    /// Create a new factory.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Create a bank-owned property from a kind tag.
    pub fn create(&self, tag: &str, name: impl Into<String>, price: i64) -> Result<Property> {
        let kind = PropertyKind::from_tag(tag)?;
        Ok(Property::new(kind, name, price))
    }
}
