/// Global average grid carbon intensity in kg CO2 per kWh.
pub const CARBON_INTENSITY: f64 = 0.475;

/// Kilograms of CO2 emitted for `energy_kwh` of electricity.
#[must_use]
pub fn calculate_co2(energy_kwh: f64) -> f64 {
    energy_kwh * CARBON_INTENSITY
}

/// Same as [`calculate_co2`], in grams.
#[must_use]
pub fn calculate_co2_grams(energy_kwh: f64) -> f64 {
    calculate_co2(energy_kwh) * 1000.0
}
