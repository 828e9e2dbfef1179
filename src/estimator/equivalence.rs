use crate::models::{
    EquivalenceBasis, EquivalenceDefinition, EquivalenceResult, EquivalenceUnit,
};

/// Values below this render as "< 0.01 {unit}".
const DISPLAY_FLOOR: f64 = 0.01;

/// Raw equivalence of `energy_wh` in the definition's declared unit.
///
/// Runtime units divide by the appliance wattage and convert hours into the
/// unit; charges divide by the Wh of one charge. The catalog guarantees a
/// positive divisor, so no guard is applied here.
#[must_use]
pub fn calculate_equivalence(energy_wh: f64, definition: &EquivalenceDefinition) -> f64 {
    match definition.basis() {
        EquivalenceBasis::PerCharge { wh_per_charge } => energy_wh / wh_per_charge,
        EquivalenceBasis::Runtime { watts, unit } => {
            let runtime_hours = energy_wh / watts;
            match unit {
                EquivalenceUnit::Minutes => runtime_hours * 60.0,
                EquivalenceUnit::Seconds => runtime_hours * 3600.0,
                EquivalenceUnit::Hours | EquivalenceUnit::Charges => runtime_hours,
            }
        }
    }
}

/// Render an equivalence value in the most legible unit.
///
/// Seconds escalate to minutes (and hours) once they reach a minute; hours
/// below one de-escalate to minutes (and seconds). Charges and minutes keep
/// their unit.
#[must_use]
pub fn format_equivalence(value: f64, definition: &EquivalenceDefinition) -> String {
    let unit = definition.unit;

    if value < DISPLAY_FLOOR {
        return format!("< 0.01 {unit}");
    }

    if unit == EquivalenceUnit::Seconds && value >= 60.0 {
        let minutes = value / 60.0;
        if minutes >= 60.0 {
            return format!("{} hours", to_fixed(minutes / 60.0, 2));
        }
        return format!("{} minutes", to_fixed(minutes, 1));
    }

    if unit == EquivalenceUnit::Hours && value < 1.0 {
        let minutes = value * 60.0;
        if minutes < 1.0 {
            return format!("{} seconds", to_fixed(minutes * 60.0, 1));
        }
        return format!("{} minutes", to_fixed(minutes, 1));
    }

    if value < 1.0 {
        return format!("{} {unit}", to_fixed(value, 2));
    }

    format!("{} {unit}", to_fixed(value, 1))
}

/// Evaluate one definition against an energy amount.
#[must_use]
pub fn evaluate_equivalence(energy_wh: f64, definition: &EquivalenceDefinition) -> EquivalenceResult {
    let value = calculate_equivalence(energy_wh, definition);
    EquivalenceResult {
        definition: definition.clone(),
        value,
        formatted: format_equivalence(value, definition),
    }
}

/// Evaluate every enabled definition, keeping catalog order.
pub fn evaluate_enabled<'a, I>(energy_wh: f64, definitions: I) -> Vec<EquivalenceResult>
where
    I: IntoIterator<Item = &'a EquivalenceDefinition>,
{
    definitions
        .into_iter()
        .filter(|d| d.enabled)
        .map(|d| evaluate_equivalence(energy_wh, d))
        .collect()
}

/// Fixed-point rendering with `digits` decimals.
///
/// Rust's float formatting rounds exact midpoints to even; displayed figures
/// round them up instead. A float is an exact midpoint at `digits` decimals
/// iff `value * 2^(digits+1)` is an odd integer.
pub(crate) fn to_fixed(value: f64, digits: usize) -> String {
    let halves = value * 2f64.powi(digits as i32 + 1);
    if halves.fract() == 0.0 && halves % 2.0 == 1.0 {
        let scale = 10f64.powi(digits as i32);
        let rounded = ((value * scale).floor() + 1.0) / scale;
        return format!("{rounded:.digits$}");
    }
    format!("{value:.digits$}")
}
