//! Exact expected utility of a plan.
//!
//! `V(t, stocks)` is the expected number of successes over the last `t`
//! trials:
//!
//! ```text
//! V(0, _)     = 0
//! V(t, stocks) = Σ_k P(k) · (outcome_k + V(t - 1, next_k))
//! ```
//!
//! The sum runs over the eleven 2d6 sums. Each call to
//! [`ExactEvaluator::expected_sum`] builds its own memo, sized by the plan's
//! starting stock. Nothing is carried to the next plan.

use std::collections::HashMap;

use crate::mechanics::{dice, trial};
use crate::mechanics::trial::Stocks;
use crate::systems::sdk::{PlanEvaluator, Profile};

/// Memo tables above this many cells fall back to a hash map keyed by the
/// states actually reached.
const DENSE_CELL_LIMIT: usize = 1 << 23;

/// Per-evaluation cache of `V(t, stocks)`.
enum Memo {
    /// `[t][b][c][d]`, row-major, NaN = not solved yet.
    Dense { dims: [usize; 4], cells: Vec<f64>, solved: usize },
    Sparse(HashMap<(u32, Stocks), f64>),
}

impl Memo {
    fn for_plan(r: u32, start: Stocks) -> Self {
        let dims = [
            r as usize + 1,
            start.b as usize + 1,
            start.c as usize + 1,
            start.d as usize + 1,
        ];
        let cells = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .filter(|&n| n <= DENSE_CELL_LIMIT);
        match cells {
            Some(n) => Memo::Dense { dims, cells: vec![f64::NAN; n], solved: 0 },
            None => Memo::Sparse(HashMap::new()),
        }
    }

    #[inline]
    fn slot(dims: &[usize; 4], t: u32, s: Stocks) -> usize {
        ((t as usize * dims[1] + s.b as usize) * dims[2] + s.c as usize) * dims[3] + s.d as usize
    }

    fn get(&self, t: u32, s: Stocks) -> Option<f64> {
        match self {
            Memo::Dense { dims, cells, .. } => {
                let v = cells[Self::slot(dims, t, s)];
                (!v.is_nan()).then_some(v)
            }
            Memo::Sparse(map) => map.get(&(t, s)).copied(),
        }
    }

    fn put(&mut self, t: u32, s: Stocks, v: f64) {
        match self {
            Memo::Dense { dims, cells, solved } => {
                cells[Self::slot(dims, t, s)] = v;
                *solved += 1;
            }
            Memo::Sparse(map) => {
                map.insert((t, s), v);
            }
        }
    }

    fn len(&self) -> usize {
        match self {
            Memo::Dense { solved, .. } => *solved,
            Memo::Sparse(map) => map.len(),
        }
    }
}

/// Exact DP evaluator. Holds only counters; every evaluation owns a fresh memo.
#[derive(Clone, Debug, Default)]
pub struct ExactEvaluator {
    states: u64,
}

impl ExactEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expected number of successes over `r` trials, starting from `start`
    /// with per-trial `modifier = n + trait bonus + ring`.
    pub fn expected_sum(&mut self, r: u32, modifier: i32, start: Stocks) -> f64 {
        let start = start.capped(r);
        let mut memo = Memo::for_plan(r, start);
        let total = solve(&mut memo, modifier, r, start);
        self.states += memo.len() as u64;
        tracing::trace!(r, modifier, ?start, states = memo.len(), "plan solved");
        total
    }
}

impl PlanEvaluator for ExactEvaluator {
    fn average_utility(&mut self, profile: &Profile, modifier: i32, stocks: Stocks) -> f64 {
        let total = self.expected_sum(profile.r, profile.base_modifier() + modifier, stocks);
        total / profile.r as f64
    }

    fn states_solved(&self) -> u64 {
        self.states
    }
}

fn solve(memo: &mut Memo, modifier: i32, t: u32, s: Stocks) -> f64 {
    if t == 0 {
        return 0.0;
    }
    if let Some(v) = memo.get(t, s) {
        return v;
    }
    let mut acc = 0.0;
    for &(sum, _) in dice::SUM_WEIGHTS.iter() {
        let step = trial::transition(sum, modifier, s);
        acc += (step.utility() + solve(memo, modifier, t - 1, step.next)) * dice::probability(sum);
    }
    memo.put(t, s, acc);
    acc
}
