// tests/evaluator.rs
use loadout_planner::mechanics::{dice, trial};
use loadout_planner::{Consumable, Error, ExactEvaluator, PlanEvaluator, Profile, Stocks, evaluate_plan};

const EPS: f64 = 1e-12;

fn w(sums: &[i32]) -> f64 {
    sums.iter().map(|&k| dice::weight(k) as f64).sum::<f64>() / 36.0
}

/* ──────────────────────────────────────────────────────────────────────────
1) Outcome model
────────────────────────────────────────────────────────────────────────── */

#[test]
fn dice_weights_cover_all_36_pairs() {
    let total: u32 = dice::SUM_WEIGHTS.iter().map(|&(_, w)| w).sum();
    assert_eq!(total, dice::OUTCOMES);
    for &(sum, weight) in dice::SUM_WEIGHTS.iter() {
        assert_eq!(dice::weight(sum), weight, "sum {sum}");
    }
    assert_eq!(dice::weight(1), 0);
    assert_eq!(dice::weight(13), 0);
}

/* ──────────────────────────────────────────────────────────────────────────
2) Trial transition
────────────────────────────────────────────────────────────────────────── */

#[test]
fn natural_two_fails_even_with_stock_and_huge_modifier() {
    let step = trial::transition(2, 20, Stocks::new(5, 5, 5));
    assert!(!step.success);
    assert_eq!(step.next, Stocks::new(5, 5, 5));
    assert_eq!(step.spent, None);

    // m == 6 would be rescued on any other sum.
    let step = trial::transition(2, 4, Stocks::new(5, 5, 5));
    assert!(!step.success);
}

#[test]
fn natural_twelve_succeeds_with_terrible_modifier() {
    let step = trial::transition(12, -20, Stocks::new(1, 1, 1));
    assert!(step.success);
    assert_eq!(step.next, Stocks::new(1, 1, 1));
}

#[test]
fn b_is_spent_before_c_at_six() {
    // n = 0, no trait, no ring: m == sum.
    let step = trial::transition(6, 0, Stocks::new(1, 1, 1));
    assert!(step.success);
    assert_eq!(step.spent, Some(Consumable::B));
    assert_eq!(step.next, Stocks::new(0, 1, 1));
}

#[test]
fn falls_through_priority_by_band_and_stock() {
    // m == 6 without B -> C.
    let step = trial::transition(6, 0, Stocks::new(0, 1, 1));
    assert_eq!(step.spent, Some(Consumable::C));
    assert_eq!(step.next, Stocks::new(0, 0, 1));

    // m == 5: B cannot reach it.
    let step = trial::transition(5, 0, Stocks::new(3, 0, 1));
    assert_eq!(step.spent, Some(Consumable::D));
    assert_eq!(step.next, Stocks::new(3, 0, 0));

    // m == 3: out of every band.
    let step = trial::transition(3, 0, Stocks::new(3, 3, 3));
    assert!(!step.success);
    assert_eq!(step.spent, None);
}

#[test]
fn base_success_never_spends() {
    let step = trial::transition(7, 0, Stocks::new(1, 1, 1));
    assert!(step.success);
    assert_eq!(step.spent, None);
    assert_eq!(step.next, Stocks::new(1, 1, 1));
}

/* ──────────────────────────────────────────────────────────────────────────
3) Exact evaluator
────────────────────────────────────────────────────────────────────────── */

#[test]
fn single_trial_no_purchase_is_21_over_36() {
    let u = evaluate_plan(0, 0, 1, 0, 0, 0, 0).unwrap();
    assert!((u - 21.0 / 36.0).abs() < EPS, "u = {u}");
}

#[test]
fn single_trial_matches_hand_counts() {
    // n = -2: success needs sum >= 9.
    let base = evaluate_plan(-2, 0, 1, 0, 0, 0, 0).unwrap();
    assert!((base - w(&[9, 10, 11, 12])).abs() < EPS);

    // Trait bit adds 2: same as n = 0.
    let with_trait = evaluate_plan(-2, 1, 1, 0, 0, 0, 0).unwrap();
    assert!((with_trait - 21.0 / 36.0).abs() < EPS);

    // +1 ring with a D: base sum >= 8, D rescues sums 5..=7.
    let ring_d = evaluate_plan(-2, 0, 1, 1, 0, 0, 1).unwrap();
    assert!((ring_d - 30.0 / 36.0).abs() < EPS, "ring_d = {ring_d}");

    // +2 ring with a D: base sum >= 7, D rescues 4..=6.
    let ring2_d = evaluate_plan(-2, 0, 1, 2, 0, 0, 1).unwrap();
    assert!((ring2_d - 33.0 / 36.0).abs() < EPS);
}

#[test]
fn unlimited_b_fires_on_every_six() {
    // n = -2: m == 6 at sum 8. With qty_B = r it never runs out.
    for r in 1..=6 {
        let u = evaluate_plan(-2, 0, r, 0, r, 0, 0).unwrap();
        assert!((u - 15.0 / 36.0).abs() < EPS, "r = {r}: {u}");
        let none = evaluate_plan(-2, 0, r, 0, 0, 0, 0).unwrap();
        assert!((none - 10.0 / 36.0).abs() < EPS, "r = {r}: {none}");
    }
}

#[test]
fn single_b_depletes_after_first_rescue() {
    let p_hit = 15.0 / 36.0;
    let p_rescue = 5.0 / 36.0;
    let with_b = 15.0 / 36.0;
    let without_b = 10.0 / 36.0;
    let expected_sum = p_hit + (1.0 - p_rescue) * with_b + p_rescue * without_b;

    let u = evaluate_plan(-2, 0, 2, 0, 1, 0, 0).unwrap();
    assert!((u - expected_sum / 2.0).abs() < EPS, "u = {u}");
}

#[test]
fn surplus_quantities_match_quantity_equal_to_trials() {
    let capped = evaluate_plan(-1, 0, 3, 1, 3, 3, 3).unwrap();
    let surplus = evaluate_plan(-1, 0, 3, 1, 40, 90, 1000).unwrap();
    assert_eq!(capped.to_bits(), surplus.to_bits());
}

#[test]
fn large_stock_uses_sparse_memo_and_stays_exact() {
    // 61^4 cells is above the dense limit; every stock covers every trial,
    // so each check fails only on sums 2 and 3.
    let u = evaluate_plan(0, 0, 60, 0, 60, 60, 60).unwrap();
    assert!((u - 33.0 / 36.0).abs() < 1e-9, "u = {u}");
}

#[test]
fn repeated_calls_are_identical() {
    let a = evaluate_plan(-3, 1, 8, 1, 2, 1, 1).unwrap();
    let b = evaluate_plan(-3, 1, 8, 1, 2, 1, 1).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn evaluator_reuse_does_not_leak_between_plans() {
    let profile = Profile::new(-3, 0, 6, 0).unwrap();
    let mut shared = ExactEvaluator::new();
    // Fill with a different ring and stock first.
    let _ = shared.average_utility(&profile, 2, Stocks::new(3, 2, 1));
    let _ = shared.average_utility(&profile, 0, Stocks::new(6, 0, 0));
    let reused = shared.average_utility(&profile, 1, Stocks::new(1, 1, 1));

    let fresh = ExactEvaluator::new().average_utility(&profile, 1, Stocks::new(1, 1, 1));
    assert_eq!(reused.to_bits(), fresh.to_bits());
    assert!(shared.states_solved() > 0);
}

#[test]
fn rejects_out_of_domain_inputs() {
    assert_eq!(evaluate_plan(-7, 0, 1, 0, 0, 0, 0), Err(Error::ConsumerIndex { value: -7 }));
    assert_eq!(evaluate_plan(7, 0, 1, 0, 0, 0, 0), Err(Error::ConsumerIndex { value: 7 }));
    assert_eq!(evaluate_plan(0, 2, 1, 0, 0, 0, 0), Err(Error::TraitBit { value: 2 }));
    assert_eq!(evaluate_plan(0, 0, 0, 0, 0, 0, 0), Err(Error::Trials { value: 0 }));
    assert_eq!(evaluate_plan(0, 0, 101, 0, 0, 0, 0), Err(Error::Trials { value: 101 }));
    assert_eq!(evaluate_plan(0, 0, 1, 3, 0, 0, 0), Err(Error::BonusTier { value: 3 }));
}
