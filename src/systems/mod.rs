pub mod sdk;
pub mod expected_utility;
pub mod plan_search;
#[cfg(feature="system-monte_carlo")] pub mod monte_carlo;
