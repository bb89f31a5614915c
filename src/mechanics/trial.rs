//! Trial mechanics: modified total, base outcome, and the consumable override.
//!
//! A trial succeeds when the modified total `m = n + sum + trait_bonus + ring`
//! reaches [`SUCCESS_TOTAL`]. A natural 2 always fails and a natural 12 always
//! succeeds. Otherwise a failed trial may be rescued by spending one consumable,
//! tried in [`PRIORITY`] order.

use serde::{Deserialize, Serialize};

/// Modified total at or above which a trial succeeds on its own.
pub const SUCCESS_TOTAL: i32 = 7;

/// Bonus added to the total when the consumer's trait bit is set.
pub const TRAIT_BONUS: i32 = 2;

/// Consumable kinds. Each rescues a failed trial within a band of totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Consumable {
    /// Rescues `m == 6`.
    B,
    /// Rescues `m ∈ {5, 6}`.
    C,
    /// Rescues `m ∈ {4, 5, 6}`.
    D,
}

/// Order in which consumables are tried; first match is spent.
pub const PRIORITY: [Consumable; 3] = [Consumable::B, Consumable::C, Consumable::D];

impl Consumable {
    /// Lowest modified total this consumable can rescue.
    #[inline]
    pub fn reach(self) -> i32 {
        match self {
            Consumable::B => 6,
            Consumable::C => 5,
            Consumable::D => 4,
        }
    }

    /// Whether a failed trial at total `m` is in this consumable's band.
    #[inline]
    pub fn triggers(self, m: i32) -> bool {
        (self.reach()..SUCCESS_TOTAL).contains(&m)
    }
}

/// Remaining units of each consumable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stocks {
    pub b: u32,
    pub c: u32,
    pub d: u32,
}

impl Stocks {
    pub const EMPTY: Stocks = Stocks { b: 0, c: 0, d: 0 };

    pub fn new(b: u32, c: u32, d: u32) -> Self {
        Self { b, c, d }
    }

    #[inline]
    pub fn get(&self, kind: Consumable) -> u32 {
        match kind {
            Consumable::B => self.b,
            Consumable::C => self.c,
            Consumable::D => self.d,
        }
    }

    /// Same stocks with one unit of `kind` removed (saturating at 0).
    #[inline]
    pub fn spend(self, kind: Consumable) -> Self {
        let mut next = self;
        match kind {
            Consumable::B => next.b = next.b.saturating_sub(1),
            Consumable::C => next.c = next.c.saturating_sub(1),
            Consumable::D => next.d = next.d.saturating_sub(1),
        }
        next
    }

    /// Each stock clamped to `cap`; units beyond the trial count are never spent.
    #[inline]
    pub fn capped(self, cap: u32) -> Self {
        Self {
            b: self.b.min(cap),
            c: self.c.min(cap),
            d: self.d.min(cap),
        }
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.b + self.c + self.d
    }
}

/// Result of a single trial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub success: bool,
    pub next: Stocks,
    pub spent: Option<Consumable>,
}

impl Step {
    /// Outcome as utility (0 or 1).
    #[inline]
    pub fn utility(&self) -> f64 {
        if self.success { 1.0 } else { 0.0 }
    }
}

/// 2 when the trait bit is set, 0 otherwise.
#[inline]
pub fn trait_bonus(s: u8) -> i32 {
    if s == 1 { TRAIT_BONUS } else { 0 }
}

/// Modified total `m` for a dice sum and a combined modifier `n + trait + ring`.
#[inline]
pub fn modified_total(sum: i32, modifier: i32) -> i32 {
    sum + modifier
}

/// Outcome before any consumable: natural 2 fails, natural 12 succeeds.
#[inline]
pub fn base_success(sum: i32, m: i32) -> bool {
    match sum {
        2 => false,
        12 => true,
        _ => m >= SUCCESS_TOTAL,
    }
}

/// First consumable in priority order that is in stock and covers `m`.
#[inline]
pub fn rescuer(m: i32, stocks: Stocks) -> Option<Consumable> {
    PRIORITY
        .into_iter()
        .find(|&kind| stocks.get(kind) > 0 && kind.triggers(m))
}

/// One trial: outcome plus the stocks left for the next one.
/// A natural 2 cannot be rescued; at most one unit is spent.
pub fn transition(sum: i32, modifier: i32, stocks: Stocks) -> Step {
    let m = modified_total(sum, modifier);
    if base_success(sum, m) {
        return Step { success: true, next: stocks, spent: None };
    }
    if sum == 2 {
        return Step { success: false, next: stocks, spent: None };
    }
    match rescuer(m, stocks) {
        Some(kind) => Step { success: true, next: stocks.spend(kind), spent: Some(kind) },
        None => Step { success: false, next: stocks, spent: None },
    }
}
