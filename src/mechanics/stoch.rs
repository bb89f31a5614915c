//! Stochastic mechanics: dice rolls on `bevy_prng::WyRand`.
//! Note: RNG sits behind `RefCell<>` so evaluators can roll from `&self`
//! helpers while mutating RNG state.

use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};
use std::cell::RefCell;

/// Seeded WyRand, same seed -> same stream.
#[inline]
pub fn seeded(seed: u64) -> RefCell<WyRand> {
    RefCell::new(WyRand::from_seed(seed.to_le_bytes()))
}

/// Uniform [0, 1) with 53 bits of precision.
#[inline]
pub fn unit01(rng: &RefCell<WyRand>) -> f64 {
    let mut r = rng.borrow_mut();
    let u = ((r.next_u64() >> 11) as f64) / ((1u64 << 53) as f64);
    drop(r);
    u
}

/// One d6 face in 1..=6.
#[inline]
pub fn d6(rng: &RefCell<WyRand>) -> i32 {
    ((unit01(rng) * 6.0) as i32).min(5) + 1
}

/// Sum of two independent d6.
#[inline]
pub fn roll_2d6(rng: &RefCell<WyRand>) -> i32 {
    d6(rng) + d6(rng)
}
