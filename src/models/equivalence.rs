use std::fmt;

use serde::{Deserialize, Serialize};

/// Display unit of an equivalence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquivalenceUnit {
    Hours,
    Minutes,
    Seconds,
    Charges,
}

impl EquivalenceUnit {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Charges => "charges",
        }
    }
}

impl fmt::Display for EquivalenceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relatable comparison from the equivalence catalog.
///
/// `power_watts` is the appliance draw in watts for time units. For
/// [`EquivalenceUnit::Charges`] the same field holds the energy of one full
/// charge in Wh. Use [`EquivalenceDefinition::basis`] to read it unambiguously.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquivalenceDefinition {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub emoji: String,
    pub power_watts: f64,
    pub unit: EquivalenceUnit,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub description: String,
}

fn default_enabled() -> bool {
    true
}

/// Typed view over the `power_watts` overload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EquivalenceBasis {
    /// Appliance running at `watts`, reported in a time unit.
    Runtime { watts: f64, unit: EquivalenceUnit },
    /// Discrete full charges of `wh_per_charge` each.
    PerCharge { wh_per_charge: f64 },
}

impl EquivalenceDefinition {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        power_watts: f64,
        unit: EquivalenceUnit,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            emoji: String::new(),
            power_watts,
            unit,
            enabled: true,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn basis(&self) -> EquivalenceBasis {
        match self.unit {
            EquivalenceUnit::Charges => EquivalenceBasis::PerCharge {
                wh_per_charge: self.power_watts,
            },
            unit => EquivalenceBasis::Runtime {
                watts: self.power_watts,
                unit,
            },
        }
    }
}

/// An equivalence definition evaluated against an energy amount.
#[derive(Debug, Clone, Serialize)]
pub struct EquivalenceResult {
    #[serde(flatten)]
    pub definition: EquivalenceDefinition,
    /// Raw value in the definition's declared unit.
    pub value: f64,
    /// Human-readable rendering, possibly in a different unit.
    pub formatted: String,
}
