//! Monte-Carlo cross-check for the exact evaluator.
//!
//! Plays `runs` independent sequences of `r` trials with real dice rolls and
//! counts successes. Stocks are plain counters inside one run and reset for
//! the next. Shares nothing with [`crate::systems::expected_utility`] except
//! the trial rule itself.

use std::cell::RefCell;

use bevy_prng::WyRand;

use crate::mechanics::{stoch, trial};
use crate::mechanics::trial::Stocks;
use crate::systems::sdk::{PlanEvaluator, Profile};

pub struct MonteCarloEvaluator {
    rng: RefCell<WyRand>,
    pub runs: usize,
}

impl MonteCarloEvaluator {
    pub fn new(runs: usize, seed: u64) -> Self {
        Self { rng: stoch::seeded(seed), runs: runs.max(1) }
    }
}

impl PlanEvaluator for MonteCarloEvaluator {
    fn average_utility(&mut self, profile: &Profile, modifier: i32, stocks: Stocks) -> f64 {
        sample_average(&self.rng, profile.r, profile.base_modifier() + modifier, stocks, self.runs)
    }
}

/// Successes in one sequence of `r` trials.
pub fn play_once(rng: &RefCell<WyRand>, r: u32, modifier: i32, start: Stocks) -> u32 {
    let mut stocks = start;
    let mut wins = 0;
    for _ in 0..r {
        let step = trial::transition(stoch::roll_2d6(rng), modifier, stocks);
        if step.success {
            wins += 1;
        }
        stocks = step.next;
    }
    wins
}

/// Empirical mean outcome per trial over `runs` sequences.
pub fn sample_average(
    rng: &RefCell<WyRand>,
    r: u32,
    modifier: i32,
    start: Stocks,
    runs: usize,
) -> f64 {
    let runs = runs.max(1);
    let wins: u64 = (0..runs).map(|_| play_once(rng, r, modifier, start) as u64).sum();
    wins as f64 / (runs as f64 * r.max(1) as f64)
}

/// Seeded estimate for a single plan.
pub fn simulate_plan(profile: &Profile, modifier: i32, stocks: Stocks, runs: usize, seed: u64) -> f64 {
    MonteCarloEvaluator::new(runs, seed).average_utility(profile, modifier, stocks)
}
