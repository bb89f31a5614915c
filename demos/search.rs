// demos/search.rs
// Run with:
//   RUST_LOG=loadout_planner=debug cargo run --example search

use loadout_planner::systems::monte_carlo::MonteCarloEvaluator;
use loadout_planner::{Catalog, Profile, search_best_plan, search_ext, simulate_plan};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Consumer (pick your own numbers; r near 100 takes a while)
    let (n, r, s, budget) = (-2, 10, 0, 30_000);

    println!("== Exact search (n={n}, r={r}, s={s}, budget={budget}) ==");
    let exact = search_best_plan(n, r, s, budget)?;
    println!("{exact}");
    println!("candidates: {}, DP states: {}", exact.candidates, exact.states);

    let q = exact.plan.quantities;
    let tier = exact.plan.bonus.modifier as u8;
    let sampled = simulate_plan(n, s, r, tier, q.b, q.c, q.d, 50_000, 1)?;
    println!("\nMonte-Carlo check of the winner: {sampled:.4}");

    println!("\n== Sampled search (same consumer) ==");
    let profile = Profile::new(n, s, r, budget)?;
    let approx = search_ext(&profile, &Catalog::default(), &mut MonteCarloEvaluator::new(5_000, 1))?;
    println!("{approx}");
    Ok(())
}
