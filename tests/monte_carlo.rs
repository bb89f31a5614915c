// tests/monte_carlo.rs
#![cfg(feature = "system-monte_carlo")]

use loadout_planner::systems::monte_carlo::MonteCarloEvaluator;
use loadout_planner::{Catalog, Profile, Stocks, evaluate_plan, search_ext, simulate_plan};

#[test]
fn sampler_agrees_with_exact_evaluator() {
    let cases = [(-2, 0, 5, 1, 1, 1, 1), (0, 1, 3, 0, 0, 2, 0), (-4, 0, 4, 2, 2, 0, 1)];
    for (n, s, r, bonus, b, c, d) in cases {
        let exact = evaluate_plan(n, s, r, bonus, b, c, d).unwrap();
        let approx = simulate_plan(n, s, r, bonus, b, c, d, 20_000, 7).unwrap();
        assert!(
            (exact - approx).abs() < 0.02,
            "({n},{s},{r},{bonus},{b},{c},{d}): exact {exact} vs sampled {approx}"
        );
    }
}

#[test]
fn same_seed_same_estimate() {
    let a = simulate_plan(-1, 0, 6, 1, 2, 1, 0, 2_000, 42).unwrap();
    let b = simulate_plan(-1, 0, 6, 1, 2, 1, 0, 2_000, 42).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
    assert!((0.0..=1.0).contains(&a));
}

#[test]
fn sampled_search_finds_the_clear_winner() {
    let profile = Profile::new(-2, 0, 1, 30_000).unwrap();
    let mut sampler = MonteCarloEvaluator::new(20_000, 3);
    let out = search_ext(&profile, &Catalog::default(), &mut sampler).unwrap();
    assert_eq!(out.plan.bonus.name, "A1");
    assert_eq!(out.plan.quantities, Stocks::new(0, 0, 1));
    assert_eq!(out.states, 0);
}
