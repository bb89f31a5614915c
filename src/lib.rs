/*!
`loadout_planner` — exact expected-value planning for a budgeted dice check.

What it does
- Models a consumer who makes `r` 2d6 checks. A check succeeds when
  `n + 2d6 + (2 if s) + ring >= 7`. A natural 2 always fails and a natural 12
  always succeeds.
- Three consumables (B, C, D) can each rescue a failed check within a band of
  totals, tried in that order. Each rescue spends one unit.
- Scores a purchase plan exactly by DP over `(trials left, stocks)`:
  `evaluate_plan`.
- Finds the plan with the highest expected average utility within a budget.
  Ties go to the plan that spends more: `search_best_plan`.

How to use (call surface only)
- `evaluate_plan(n, s, r, bonus, qty_b, qty_c, qty_d) -> Result<f64>`
- `search_best_plan(n, r, s, budget) -> Result<Outcome>`
- With a custom price list or evaluator, use the `_ext` variants and
  [`systems::sdk::PlanEvaluator`].

What it does NOT do
- No I/O, no threads, no hidden state. Every call builds and drops its own memo.
*/

pub mod config;
pub mod error;
pub mod mechanics;
pub mod systems;

pub use config::{BonusTier, Catalog};
pub use error::{Error, Result};
pub use mechanics::trial::{Consumable, Stocks};
pub use systems::expected_utility::ExactEvaluator;
pub use systems::plan_search::{search_best_plan, search_ext};
pub use systems::sdk::{Outcome, Plan, PlanEvaluator, Profile};

/// Expected average utility (in `[0, 1]`) of a plan under the default catalog.
///
/// `bonus` selects the ring tier (0, 1 or 2). Quantities above `r` are
/// accepted, since the surplus is never spent.
pub fn evaluate_plan(
    n: i32,
    s: u8,
    r: u32,
    bonus: u8,
    qty_b: u32,
    qty_c: u32,
    qty_d: u32,
) -> Result<f64> {
    let profile = Profile::new(n, s, r, 0)?;
    evaluate_plan_ext(&profile, &Catalog::default(), bonus, Stocks::new(qty_b, qty_c, qty_d))
}

/// [`evaluate_plan`] against a caller-supplied catalog.
pub fn evaluate_plan_ext(
    profile: &Profile,
    catalog: &Catalog,
    bonus: u8,
    quantities: Stocks,
) -> Result<f64> {
    catalog.validate()?;
    let tier = catalog.tier(bonus)?;
    Ok(ExactEvaluator::new().average_utility(profile, tier.modifier, quantities))
}

/// Monte-Carlo estimate of [`evaluate_plan`] from `runs` seeded sequences.
#[cfg(feature = "system-monte_carlo")]
#[allow(clippy::too_many_arguments)]
pub fn simulate_plan(
    n: i32,
    s: u8,
    r: u32,
    bonus: u8,
    qty_b: u32,
    qty_c: u32,
    qty_d: u32,
    runs: usize,
    seed: u64,
) -> Result<f64> {
    let profile = Profile::new(n, s, r, 0)?;
    let tier = Catalog::default().tier(bonus)?.modifier;
    Ok(systems::monte_carlo::simulate_plan(
        &profile,
        tier,
        Stocks::new(qty_b, qty_c, qty_d),
        runs,
        seed,
    ))
}
