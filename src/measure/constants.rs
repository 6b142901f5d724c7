use serde::{Deserialize, Serialize};

/// Grams in one avoirdupois ounce.
pub const GRAMS_PER_OUNCE: f64 = 28.349523125;

/// Ounces in one pound; at or above this the imperial weight promotes to lb.
pub const OUNCES_PER_POUND: f64 = 16.0;

/// Milliliters in one liter; at or above this metric liquid promotes to l.
pub const ML_PER_LITER: f64 = 1000.0;

/// Metric spoon capacities. Metric has no cup unit.
pub const METRIC_TEASPOON_ML: f64 = 5.0;
pub const METRIC_TABLESPOON_ML: f64 = 15.0;

/// Rounding step for culinary fractions (pieces, cups, tbsp, tsp).
pub const QUARTER_STEP: f64 = 0.25;

/// Floor for density values to guard volume division.
pub const MIN_GRAMS_PER_ML: f64 = 0.001;

/// A regional measurement convention selecting unit families and spoon/cup
/// capacities.
///
/// UK recipes use metricated 5/15 ml spoons and no cup measure; AU/NZ and
/// Japan use metric weight but their own cup sizes (250 ml and 200 ml).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeasurementSystem {
    Metric,
    Us,
    UkImperial,
    AuNz,
    Jp,
}

impl MeasurementSystem {
    pub fn teaspoon_ml(&self) -> f64 {
        match self {
            MeasurementSystem::Metric => METRIC_TEASPOON_ML,
            MeasurementSystem::Us => 4.92892159375,
            MeasurementSystem::UkImperial => 5.0,
            MeasurementSystem::AuNz => 5.0,
            MeasurementSystem::Jp => 5.0,
        }
    }

    pub fn tablespoon_ml(&self) -> f64 {
        match self {
            MeasurementSystem::Metric => METRIC_TABLESPOON_ML,
            MeasurementSystem::Us => 14.78676478125,
            MeasurementSystem::UkImperial => 15.0,
            MeasurementSystem::AuNz => 20.0,
            MeasurementSystem::Jp => 15.0,
        }
    }

    /// Cup capacity in milliliters; 0 means the system has no cup unit.
    pub fn cup_ml(&self) -> f64 {
        match self {
            MeasurementSystem::Metric => 0.0,
            MeasurementSystem::Us => 236.5882365,
            MeasurementSystem::UkImperial => 0.0,
            MeasurementSystem::AuNz => 250.0,
            MeasurementSystem::Jp => 200.0,
        }
    }

    /// Whether weight-mode ingredients render in ounces/pounds.
    ///
    /// AU/NZ and Japan keep metric weight even though they use cup volumes.
    pub fn uses_imperial_weight(&self) -> bool {
        matches!(self, MeasurementSystem::Us | MeasurementSystem::UkImperial)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "settings.measurement.metric",
            MeasurementSystem::Us => "settings.measurement.us",
            MeasurementSystem::UkImperial => "settings.measurement.ukImperial",
            MeasurementSystem::AuNz => "settings.measurement.auNz",
            MeasurementSystem::Jp => "settings.measurement.jp",
        }
    }

    pub fn all() -> [MeasurementSystem; 5] {
        [
            MeasurementSystem::Metric,
            MeasurementSystem::Us,
            MeasurementSystem::UkImperial,
            MeasurementSystem::AuNz,
            MeasurementSystem::Jp,
        ]
    }
}

impl std::str::FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" => Ok(MeasurementSystem::Metric),
            "us" => Ok(MeasurementSystem::Us),
            "uk" | "ukimperial" | "uk-imperial" => Ok(MeasurementSystem::UkImperial),
            "aunz" | "au-nz" | "au" | "nz" => Ok(MeasurementSystem::AuNz),
            "jp" => Ok(MeasurementSystem::Jp),
            other => Err(format!("Unknown measurement system: {}", other)),
        }
    }
}
