//! The estimation pipeline: tokens, energy, CO2 and equivalences.
//!
//! Everything here is pure and synchronous. Catalog validation happens
//! upstream in [`crate::catalog`], so these functions do not guard their
//! divisors.

pub mod co2;
pub mod energy;
pub mod equivalence;
pub mod tokens;

pub use co2::{calculate_co2, calculate_co2_grams, CARBON_INTENSITY};
pub use energy::{calculate_energy, energy_per_token, ALPHA, BETA, DEFAULT_MODEL_PARAMS, PUE};
pub use equivalence::{
    calculate_equivalence, evaluate_enabled, evaluate_equivalence, format_equivalence,
};
pub use tokens::{estimate_token_count, estimate_tokens, is_blank, CHARS_PER_TOKEN};
