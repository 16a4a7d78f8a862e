//! Individual rent rules and their verdicts.
//!
//! Each rule is a pure predicate plus outcome over a single visit. A
//! rule either claims the visit with a [`RentVerdict`] or returns
//! `None`, leaving the decision to the next rule in the pipeline. Rules
//! hold no state and never mutate the property or the player.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::players::Player;
use crate::properties::{Property, MAX_HOUSES};

/// Rent owed per house count, indexed by `houses - 1`.
pub const HOUSE_RENT: [i64; MAX_HOUSES as usize] = [50, 150, 450, 1000, 2000];

/// Why a visit is exempt from rent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exemption {
    /// Unpurchased property; the bank charges nothing.
    BankOwned,
    /// The visitor owns the property themselves.
    OwnerVisit,
    /// The property is pledged to the bank.
    Mortgaged,
}

/// What a due amount was derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentBasis {
    /// No houses: the property's base rent.
    Base,
    /// Table lookup for this many houses.
    Houses(u8),
}

/// Outcome of a rent assessment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentVerdict {
    /// Nothing owed, with the exempting reason.
    Exempt(Exemption),
    /// Rent owed.
    Due {
        /// Amount owed.
        amount: i64,
        /// Where the amount came from.
        basis: RentBasis,
    },
    /// No rule in the pipeline claimed the visit. Amount zero.
    ///
    /// Unreachable with the standard pipeline, whose last rule always
    /// decides; custom or truncated pipelines can end here. Kept as a
    /// named outcome so the zero is visible to callers instead of being
    /// an implicit default.
    Unassessed,
}

impl RentVerdict {
    /// The amount owed under this verdict.
    #[must_use]
    pub fn amount(&self) -> i64 {
        match self {
            RentVerdict::Due { amount, .. } => *amount,
            RentVerdict::Exempt(_) | RentVerdict::Unassessed => 0,
        }
    }

    /// Check if this verdict charges nothing.
    #[must_use]
    pub fn is_exempt(&self) -> bool {
        self.amount() == 0
    }
}

/// A single rent rule: pure predicate plus outcome.
///
/// Rules are evaluated in pipeline order by [`RentChain`]; the first
/// three exempt and the last one prices the visit.
///
/// [`RentChain`]: crate::rent::RentChain
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RentRule {
    /// Bank-owned properties charge nothing.
    BankOwned,
    /// Visiting a property you own charges nothing.
    OwnerVisit,
    /// Mortgaged properties charge nothing.
    Mortgaged,
    /// Houses price the visit: table lookup, or base rent with none
    /// built. Always claims the visit.
    Houses,
}

impl RentRule {
    /// Evaluate this rule for a visit.
    ///
    /// `Ok(None)` means the rule has no opinion and the next rule in
    /// the pipeline decides. The only error is a house count past the
    /// rent table.
    pub fn evaluate(self, property: &Property, visitor: &Player) -> Result<Option<RentVerdict>> {
        match self {
            RentRule::BankOwned => Ok(property
                .owner()
                .is_bank()
                .then_some(RentVerdict::Exempt(Exemption::BankOwned))),
            RentRule::OwnerVisit => Ok(property
                .owner()
                .is_player(visitor.name())
                .then_some(RentVerdict::Exempt(Exemption::OwnerVisit))),
            RentRule::Mortgaged => Ok(property
                .is_mortgaged()
                .then_some(RentVerdict::Exempt(Exemption::Mortgaged))),
            RentRule::Houses => {
                let houses = property.houses();
                if houses == 0 {
                    return Ok(Some(RentVerdict::Due {
                        amount: property.base_rent(),
                        basis: RentBasis::Base,
                    }));
                }
                if houses > MAX_HOUSES {
                    return Err(Error::HouseCountOutOfRange(houses));
                }
                Ok(Some(RentVerdict::Due {
                    amount: HOUSE_RENT[houses as usize - 1],
                    basis: RentBasis::Houses(houses),
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Owner;
    use crate::properties::PropertyKind;

    fn third_party_land() -> Property {
        Property::with_owner(PropertyKind::Land, "Rue de la Paix", 400, Owner::player("Bob"))
    }

    #[test]
    fn test_bank_owned_rule() {
        let visitor = Player::new("Alice", 1500);

        let bank_owned = Property::new(PropertyKind::Land, "Rue de la Paix", 400);
        assert_eq!(
            RentRule::BankOwned.evaluate(&bank_owned, &visitor).unwrap(),
            Some(RentVerdict::Exempt(Exemption::BankOwned))
        );

        // Player-owned: no opinion
        assert_eq!(
            RentRule::BankOwned
                .evaluate(&third_party_land(), &visitor)
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_owner_visit_rule() {
        let alice = Player::new("Alice", 1500);

        let mut land = third_party_land();
        assert_eq!(RentRule::OwnerVisit.evaluate(&land, &alice).unwrap(), None);

        land.set_owner(Owner::player("Alice"));
        assert_eq!(
            RentRule::OwnerVisit.evaluate(&land, &alice).unwrap(),
            Some(RentVerdict::Exempt(Exemption::OwnerVisit))
        );
    }

    #[test]
    fn test_mortgaged_rule() {
        let visitor = Player::new("Alice", 1500);

        let mut land = third_party_land();
        assert_eq!(RentRule::Mortgaged.evaluate(&land, &visitor).unwrap(), None);

        land.mortgage();
        assert_eq!(
            RentRule::Mortgaged.evaluate(&land, &visitor).unwrap(),
            Some(RentVerdict::Exempt(Exemption::Mortgaged))
        );
    }

    #[test]
    fn test_houses_rule_base_rent() {
        let visitor = Player::new("Alice", 1500);
        let land = third_party_land();

        assert_eq!(
            RentRule::Houses.evaluate(&land, &visitor).unwrap(),
            Some(RentVerdict::Due {
                amount: 40,
                basis: RentBasis::Base,
            })
        );
    }

    #[test]
    fn test_houses_rule_table() {
        let visitor = Player::new("Alice", 1500);

        for houses in 1..=MAX_HOUSES {
            let mut land = third_party_land();
            land.set_houses(houses);

            assert_eq!(
                RentRule::Houses.evaluate(&land, &visitor).unwrap(),
                Some(RentVerdict::Due {
                    amount: HOUSE_RENT[houses as usize - 1],
                    basis: RentBasis::Houses(houses),
                })
            );
        }
    }

    #[test]
    fn test_houses_rule_out_of_range() {
        let visitor = Player::new("Alice", 1500);
        let mut land = third_party_land();
        land.set_houses(6);

        assert_eq!(
            RentRule::Houses.evaluate(&land, &visitor).unwrap_err(),
            Error::HouseCountOutOfRange(6)
        );
    }

    #[test]
    fn test_verdict_amounts() {
        assert_eq!(RentVerdict::Exempt(Exemption::BankOwned).amount(), 0);
        assert_eq!(RentVerdict::Unassessed.amount(), 0);
        assert_eq!(
            RentVerdict::Due {
                amount: 450,
                basis: RentBasis::Houses(3),
            }
            .amount(),
            450
        );
        assert!(RentVerdict::Unassessed.is_exempt());
    }
}
