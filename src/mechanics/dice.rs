//! Dice mechanics: the 2d6 sum distribution.

/// Number of equally likely (die, die) pairs.
pub const OUTCOMES: u32 = 36;

/// `(sum, weight)` for every 2d6 sum, ascending. Weights add up to [`OUTCOMES`].
pub const SUM_WEIGHTS: [(i32, u32); 11] = [
    (2, 1),
    (3, 2),
    (4, 3),
    (5, 4),
    (6, 5),
    (7, 6),
    (8, 5),
    (9, 4),
    (10, 3),
    (11, 2),
    (12, 1),
];

/// Lowest and highest 2d6 sum.
pub const MIN_SUM: i32 = 2;
pub const MAX_SUM: i32 = 12;

/// Combinatorial weight of `sum` out of 36 (0 outside 2..=12).
#[inline]
pub fn weight(sum: i32) -> u32 {
    if (MIN_SUM..=MAX_SUM).contains(&sum) {
        (6 - (sum - 7).abs()) as u32
    } else {
        0
    }
}

/// P(2d6 = sum).
#[inline]
pub fn probability(sum: i32) -> f64 {
    weight(sum) as f64 / OUTCOMES as f64
}
