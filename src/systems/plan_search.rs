//! Budgeted plan search.
//!
//! Walks ring tier -> B -> C -> D. Each loop is bounded by the trial count
//! (at most `r` consumables in total) and by the budget left after the prefix,
//! so unaffordable combinations are never generated. Every affordable plan is
//! scored once and the best is kept under [`replaces`].

use crate::config::Catalog;
use crate::error::{Error, Result};
use crate::mechanics::trial::{Consumable, Stocks};
use crate::systems::expected_utility::ExactEvaluator;
use crate::systems::sdk::{Outcome, Plan, PlanEvaluator, Profile};

/// A scored candidate, before it is materialized into a [`Plan`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scored {
    pub tier: usize,
    pub quantities: Stocks,
    pub cost: u64,
    pub leftover: u64,
    pub utility: f64,
}

/// Whether `cand` takes over from `best`.
///
/// Higher utility always wins. Equal utility wins only with strictly less
/// budget left over, so among equals the earliest-enumerated one stays.
#[inline]
pub fn replaces(best: Option<&Scored>, cand: &Scored) -> bool {
    match best {
        None => true,
        Some(b) => {
            cand.utility > b.utility || (cand.utility == b.utility && cand.leftover < b.leftover)
        }
    }
}

/// Best plan for `(n, r, s, budget)` with the default catalog and exact scoring.
pub fn search_best_plan(n: i32, r: u32, s: u8, budget: i64) -> Result<Outcome> {
    let profile = Profile::new(n, s, r, budget)?;
    search_ext(&profile, &Catalog::default(), &mut ExactEvaluator::new())
}

/// Search with a caller-supplied catalog and evaluator.
pub fn search_ext<E>(profile: &Profile, catalog: &Catalog, evaluator: &mut E) -> Result<Outcome>
where
    E: PlanEvaluator + ?Sized,
{
    catalog.validate()?;
    let r = profile.r;
    let states_before = evaluator.states_solved();
    tracing::info!(
        n = profile.n,
        s = profile.s,
        r,
        budget = profile.budget,
        "plan search started"
    );

    let mut best: Option<Scored> = None;
    let mut candidates = 0usize;

    for (tier_idx, tier) in catalog.bonus.iter().enumerate() {
        let Some(after_ring) = profile.budget.checked_sub(tier.price) else {
            continue;
        };
        for b in 0..=r {
            let cost_b = units_cost(catalog, Consumable::B, b);
            if cost_b > after_ring {
                break;
            }
            let after_b = after_ring - cost_b;
            for c in 0..=(r - b) {
                let cost_c = units_cost(catalog, Consumable::C, c);
                if cost_c > after_b {
                    break;
                }
                let after_c = after_b - cost_c;
                for d in 0..=(r - b - c) {
                    let cost_d = units_cost(catalog, Consumable::D, d);
                    if cost_d > after_c {
                        break;
                    }
                    let quantities = Stocks::new(b, c, d);
                    let cost = tier.price + cost_b + cost_c + cost_d;
                    let utility = evaluator.average_utility(profile, tier.modifier, quantities);
                    candidates += 1;

                    let cand = Scored {
                        tier: tier_idx,
                        quantities,
                        cost,
                        leftover: profile.budget - cost,
                        utility,
                    };
                    tracing::trace!(tier = %tier.name, b, c, d, cost, utility, "candidate");
                    if replaces(best.as_ref(), &cand) {
                        tracing::debug!(tier = %tier.name, b, c, d, cost, utility, "new best");
                        best = Some(cand);
                    }
                }
            }
        }
    }

    // Unreachable with a validated catalog: tier 0 is free and (0, 0, 0) is always tried.
    let best = best.ok_or(Error::Budget { value: profile.budget as i64 })?;
    let states = evaluator.states_solved().saturating_sub(states_before);
    let plan = Plan {
        bonus: catalog.bonus[best.tier].clone(),
        quantities: best.quantities,
        total_cost: best.cost,
    };
    tracing::info!(
        tier = %plan.bonus.name,
        b = plan.quantities.b,
        c = plan.quantities.c,
        d = plan.quantities.d,
        cost = plan.total_cost,
        utility = best.utility,
        candidates,
        states,
        "plan search finished"
    );

    Ok(Outcome {
        plan,
        utility: best.utility,
        leftover: best.leftover,
        candidates,
        states,
    })
}

#[inline]
fn units_cost(catalog: &Catalog, kind: Consumable, qty: u32) -> u64 {
    catalog.price(kind).saturating_mul(qty as u64)
}
