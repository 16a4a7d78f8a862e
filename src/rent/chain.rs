//! The rent pipeline driver.
//!
//! The pipeline is a fixed ordered list of pure rules walked by one
//! driver. Rules hold no state and no links, so a chain is reusable
//! across any number of assessments.

use log::debug;
use smallvec::SmallVec;

use crate::error::Result;
use crate::players::Player;
use crate::properties::Property;

use super::rules::{RentRule, RentVerdict};

/// Ordered rent rule pipeline.
///
/// The standard order is Bank → Owner → Mortgage → Houses; precedence
/// is strict, so a mortgaged property with houses is exempt and a
/// bank-owned one is exempt whatever its other state.
///
/// ## Example
///
/// ```
/// use landlord::core::Owner;
/// use landlord::players::Player;
/// use landlord::properties::{Property, PropertyKind};
/// use landlord::rent::RentChain;
///
/// let chain = RentChain::standard();
/// let visitor = Player::new("Alice", 1500);
///
/// let mut land = Property::new(PropertyKind::Land, "Rue de la Paix", 400);
/// assert_eq!(chain.compute(&land, &visitor).unwrap(), 0); // bank-owned
///
/// land.set_owner(Owner::player("Bob"));
/// land.set_houses(1);
/// assert_eq!(chain.compute(&land, &visitor).unwrap(), 50);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RentChain {
    rules: SmallVec<[RentRule; 4]>,
}

impl RentChain {
    /// The standard pipeline: Bank → Owner → Mortgage → Houses.
    #[must_use]
    pub fn standard() -> Self {
        Self::new([
            RentRule::BankOwned,
            RentRule::OwnerVisit,
            RentRule::Mortgaged,
            RentRule::Houses,
        ])
    }

    /// Build a pipeline with a custom rule order.
    pub fn new(rules: impl IntoIterator<Item = RentRule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// The rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[RentRule] {
        &self.rules
    }

    /// Assess a visit: walk the rules in order, return the first
    /// verdict.
    ///
    /// Exhausting the pipeline yields [`RentVerdict::Unassessed`]
    /// (amount zero). Only reads the property and the player; neither
    /// is mutated.
    pub fn assess(&self, property: &Property, visitor: &Player) -> Result<RentVerdict> {
        for rule in &self.rules {
            if let Some(verdict) = rule.evaluate(property, visitor)? {
                debug!(
                    "{:?} claimed {}'s visit to {}: {:?}",
                    rule,
                    visitor.name(),
                    property.name(),
                    verdict
                );
                return Ok(verdict);
            }
        }

        debug!(
            "no rule claimed {}'s visit to {}",
            visitor.name(),
            property.name()
        );
        Ok(RentVerdict::Unassessed)
    }

    /// Amount-only convenience over [`assess`](Self::assess).
    pub fn compute(&self, property: &Property, visitor: &Player) -> Result<i64> {
        Ok(self.assess(property, visitor)?.amount())
    }
}

impl Default for RentChain {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Owner;
    use crate::properties::PropertyKind;
    use crate::rent::rules::Exemption;

    #[test]
    fn test_standard_order() {
        let chain = RentChain::standard();
        assert_eq!(
            chain.rules(),
            [
                RentRule::BankOwned,
                RentRule::OwnerVisit,
                RentRule::Mortgaged,
                RentRule::Houses,
            ]
        );
        assert_eq!(RentChain::default(), chain);
    }

    #[test]
    fn test_first_claim_wins() {
        let chain = RentChain::standard();
        let alice = Player::new("Alice", 1500);

        // Self-owned AND mortgaged: the owner rule sits earlier, so the
        // exemption reason is OwnerVisit.
        let mut land = Property::new(PropertyKind::Land, "Rue de la Paix", 400);
        land.set_owner(Owner::player("Alice"));
        land.mortgage();

        assert_eq!(
            chain.assess(&land, &alice).unwrap(),
            RentVerdict::Exempt(Exemption::OwnerVisit)
        );

        // Flip the order and the mortgage rule claims it first.
        let flipped = RentChain::new([RentRule::Mortgaged, RentRule::OwnerVisit, RentRule::Houses]);
        assert_eq!(
            flipped.assess(&land, &alice).unwrap(),
            RentVerdict::Exempt(Exemption::Mortgaged)
        );
    }

    #[test]
    fn test_exhausted_pipeline_is_unassessed() {
        let alice = Player::new("Alice", 1500);
        let mut land = Property::new(PropertyKind::Land, "Rue de la Paix", 400);
        land.set_owner(Owner::player("Bob"));

        // Third-party owned and unmortgaged: none of these rules claim it.
        let truncated = RentChain::new([
            RentRule::BankOwned,
            RentRule::OwnerVisit,
            RentRule::Mortgaged,
        ]);
        assert_eq!(
            truncated.assess(&land, &alice).unwrap(),
            RentVerdict::Unassessed
        );
        assert_eq!(truncated.compute(&land, &alice).unwrap(), 0);

        // Degenerate case: no rules at all.
        let empty = RentChain::new([]);
        assert_eq!(empty.assess(&land, &alice).unwrap(), RentVerdict::Unassessed);
    }

    #[test]
    fn test_chain_reuse_does_not_mutate() {
        let chain = RentChain::standard();
        let alice = Player::new("Alice", 1500);

        let mut land = Property::new(PropertyKind::Land, "Rue de la Paix", 400);
        land.set_owner(Owner::player("Bob"));
        land.set_houses(2);

        let before = land.clone();
        for _ in 0..3 {
            assert_eq!(chain.compute(&land, &alice).unwrap(), 150);
        }
        assert_eq!(land, before);
        assert_eq!(alice.cash(), 1500);
    }
}
