// src/systems/sdk.rs

//! # Systems SDK
//!
//! Shared vocabulary for the planning **systems**: the exact expected-utility
//! evaluator, the plan search, and the Monte-Carlo cross-check.
//!
//! ## Pieces
//! - [`Profile`]: the consumer being planned for, `(n, s, r, budget)`. Built
//!   through [`Profile::new`], which rejects out-of-domain inputs.
//! - [`Plan`]: a concrete purchase (ring tier + consumable quantities) and its
//!   total cost.
//! - [`PlanEvaluator`]: the seam between the search and whatever scores a
//!   candidate. The search is generic over it, so the exact evaluator and the
//!   sampler are interchangeable.
//! - [`Outcome`]: what a search returns (best plan, utility, leftover budget,
//!   and a little bookkeeping).
//!
//! ## Writing an evaluator
//! Implement `average_utility(&Profile, modifier, stocks) -> f64`:
//! - `modifier` is the ring's bonus only. Combine it with
//!   [`Profile::base_modifier`] to get the per-trial modifier.
//! - Return the expected mean outcome over `profile.r` trials, in `[0, 1]`.
//! - Keep any per-plan cache local to the call. A cache filled under one
//!   ring modifier or starting stock is wrong for every other plan.
//!
//! ## Determinism
//! The exact evaluator is a pure function of its inputs. Samplers must take an
//! explicit seed.

// -----------------------------------------------------------------------------
// Implementation
// -----------------------------------------------------------------------------

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::BonusTier;
use crate::error::{Error, Result};
use crate::mechanics::trial::{self, Stocks};

pub const MIN_CONSUMER_INDEX: i32 = -6;
pub const MAX_CONSUMER_INDEX: i32 = 6;
pub const MAX_TRIALS: u32 = 100;

/// Validated consumer traits and budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub n: i32,
    pub s: u8,
    pub r: u32,
    pub budget: u64,
}

impl Profile {
    pub fn new(n: i32, s: u8, r: u32, budget: i64) -> Result<Self> {
        if !(MIN_CONSUMER_INDEX..=MAX_CONSUMER_INDEX).contains(&n) {
            return Err(Error::ConsumerIndex { value: n });
        }
        if s > 1 {
            return Err(Error::TraitBit { value: s });
        }
        if r == 0 || r > MAX_TRIALS {
            return Err(Error::Trials { value: r });
        }
        let budget = u64::try_from(budget).map_err(|_| Error::Budget { value: budget })?;
        Ok(Self { n, s, r, budget })
    }

    /// `n + trait bonus`, the part of the modifier no purchase changes.
    #[inline]
    pub fn base_modifier(&self) -> i32 {
        self.n + trial::trait_bonus(self.s)
    }
}

/// A purchase: one ring tier plus consumable quantities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub bonus: BonusTier,
    pub quantities: Stocks,
    pub total_cost: u64,
}

/// Scores a candidate plan for a profile.
pub trait PlanEvaluator {
    /// Expected mean outcome over `profile.r` trials starting from `stocks`,
    /// with the ring's `modifier` added to every trial.
    fn average_utility(&mut self, profile: &Profile, modifier: i32, stocks: Stocks) -> f64;

    /// (Optional) DP states solved so far across all calls (default: 0).
    fn states_solved(&self) -> u64 {
        0
    }
}

/// Search result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub plan: Plan,
    pub utility: f64,
    pub leftover: u64,
    /// Affordable plans that were scored.
    pub candidates: usize,
    /// DP states the evaluator solved for this search (0 for samplers).
    pub states: u64,
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ring:     {} (+{}, price {})", self.bonus.name, self.bonus.modifier, self.bonus.price)?;
        writeln!(f, "muff +1:  {}", self.quantities.b)?;
        writeln!(f, "muff +2:  {}", self.quantities.c)?;
        writeln!(f, "muff +3:  {}", self.quantities.d)?;
        write!(f, "cost:     {}", self.total_cost)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.plan)?;
        writeln!(f, "leftover: {}", self.leftover)?;
        write!(f, "expected average utility: {:.4}", self.utility)
    }
}
