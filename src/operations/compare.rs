//! Equivalences for an arbitrary energy amount.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::{Result, WttError};
use crate::estimator::evaluate_enabled;
use crate::models::EquivalenceResult;

/// Result of comparing an energy amount against the equivalence catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CompareResult {
    pub energy_wh: f64,
    pub equivalences: Vec<EquivalenceResult>,
}

/// Evaluate every enabled equivalence for `energy_wh`.
pub fn compare_energy(catalog: &Catalog, energy_wh: f64) -> Result<CompareResult> {
    if !energy_wh.is_finite() || energy_wh < 0.0 {
        return Err(WttError::InvalidEnergy { value: energy_wh });
    }
    Ok(CompareResult {
        energy_wh,
        equivalences: evaluate_enabled(energy_wh, catalog.equivalences()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_kwh_against_builtin() {
        let catalog = Catalog::builtin().unwrap();
        let result = compare_energy(&catalog, 1000.0).unwrap();
        let by_id = |id: &str| {
            result
                .equivalences
                .iter()
                .find(|e| e.definition.id == id)
                .unwrap()
                .formatted
                .clone()
        };
        assert_eq!(by_id("led-bulb"), "100.0 hours");
        assert_eq!(by_id("laptop"), "20.0 hours");
        assert_eq!(by_id("microwave"), "1.00 hours");
        assert_eq!(by_id("tv"), "10.0 hours");
        // 1000 / 12 = 83.33
        assert_eq!(by_id("phone-charge"), "83.3 charges");
    }

    #[test]
    fn zero_energy_is_below_floor_everywhere() {
        let catalog = Catalog::builtin().unwrap();
        let result = compare_energy(&catalog, 0.0).unwrap();
        for eq in &result.equivalences {
            assert_eq!(eq.value, 0.0);
            assert_eq!(eq.formatted, format!("< 0.01 {}", eq.definition.unit));
        }
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        let catalog = Catalog::builtin().unwrap();
        for wh in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                compare_energy(&catalog, wh),
                Err(WttError::InvalidEnergy { .. })
            ));
        }
    }
}
