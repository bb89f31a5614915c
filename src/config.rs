//! Price list for bonus rings and consumables.
//!
//! [`Catalog::default`] is the shop every `search_best_plan` / `evaluate_plan`
//! call uses. Callers with a different price sheet load one through `serde`
//! and go through the `_ext` entry points instead.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mechanics::trial::Consumable;

/// One of the mutually exclusive bonus items (rings).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusTier {
    pub name: String,
    /// Added to every trial's modified total.
    pub modifier: i32,
    pub price: u64,
}

impl BonusTier {
    pub fn new(name: &str, modifier: i32, price: u64) -> Self {
        Self { name: name.to_string(), modifier, price }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Tiers in enumeration order: no ring, +1 ring, +2 ring.
    pub bonus: [BonusTier; 3],
    pub price_b: u64,
    pub price_c: u64,
    pub price_d: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            bonus: [
                BonusTier::new("None", 0, 0),
                BonusTier::new("A1", 1, 5_000),
                BonusTier::new("A2", 2, 30_000),
            ],
            price_b: 500,
            price_c: 1_500,
            price_d: 5_000,
        }
    }
}

impl Catalog {
    /// Unit price of a consumable.
    #[inline]
    pub fn price(&self, kind: Consumable) -> u64 {
        match kind {
            Consumable::B => self.price_b,
            Consumable::C => self.price_c,
            Consumable::D => self.price_d,
        }
    }

    /// Tier by index (0 = none, 1 = +1, 2 = +2).
    pub fn tier(&self, index: u8) -> Result<&BonusTier> {
        self.bonus
            .get(index as usize)
            .ok_or(Error::BonusTier { value: index })
    }

    /// Tier modifiers must be 0, 1, 2 in order and the no-ring tier must be free,
    /// so the empty plan is always affordable.
    pub fn validate(&self) -> Result<()> {
        for (i, tier) in self.bonus.iter().enumerate() {
            if tier.modifier != i as i32 {
                return Err(Error::Catalog {
                    detail: format!(
                        "tier {i} ({}) has modifier {}, expected {i}",
                        tier.name, tier.modifier
                    ),
                });
            }
        }
        if self.bonus[0].price != 0 {
            return Err(Error::Catalog {
                detail: format!("tier 0 ({}) must be free, costs {}", self.bonus[0].name, self.bonus[0].price),
            });
        }
        Ok(())
    }
}
