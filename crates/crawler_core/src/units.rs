//! Tire size units and speed unit conversions.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const MM_PER_INCH: f64 = 25.4;
pub const KMH_PER_MPH: f64 = 1.60934;

/// Unit a tire diameter is entered in. Inches are the calculator's working
/// unit; millimeter input is converted on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TireSizeUnit {
    #[default]
    Inches,
    Mm,
}

impl TireSizeUnit {
    pub fn from_label(label: &str) -> Option<TireSizeUnit> {
        match label {
            "inches" => Some(TireSizeUnit::Inches),
            "mm" => Some(TireSizeUnit::Mm),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TireSizeUnit::Inches => "inches",
            TireSizeUnit::Mm => "mm",
        }
    }

    pub fn to_inches(self, size: f64) -> f64 {
        match self {
            TireSizeUnit::Inches => size,
            TireSizeUnit::Mm => size / MM_PER_INCH,
        }
    }

    pub fn from_inches(self, inches: f64) -> f64 {
        match self {
            TireSizeUnit::Inches => inches,
            TireSizeUnit::Mm => inches * MM_PER_INCH,
        }
    }

    /// Sensible entry bounds for a crawler tire diameter in this unit,
    /// used when switching the input field between units.
    pub fn entry_range(self) -> RangeInclusive<f64> {
        match self {
            TireSizeUnit::Inches => 2.0..=6.0,
            TireSizeUnit::Mm => 50.8..=152.4,
        }
    }
}

pub fn mph_to_kmh(mph: f64) -> f64 {
    mph * KMH_PER_MPH
}
