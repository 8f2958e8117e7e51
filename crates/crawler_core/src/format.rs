//! Display formatting for ratios, speeds, percentages, and comparison deltas.
//!
//! Unset or zero values render as a `-` placeholder so the two cases look
//! identical on screen.

use crate::comparison::ResultDifferences;
use crate::engine::CalculationResult;
use crate::units::mph_to_kmh;
use serde::{Deserialize, Serialize};

pub const PLACEHOLDER: &str = "-";

fn displayable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && v.is_finite())
}

pub fn format_ratio(ratio: Option<f64>) -> String {
    match displayable(ratio) {
        Some(value) => format!("{value:.3}:1"),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_speed(speed: Option<f64>) -> String {
    match displayable(speed) {
        Some(value) => format!("{value:.2} MPH"),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_speed_dual(speed: Option<f64>) -> String {
    match displayable(speed) {
        Some(mph) => {
            let kmh = mph_to_kmh(mph);
            format!("{mph:.2} MPH ({kmh:.2} KM/H)")
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Signed percentage with an explicit `+` on positive values.
pub fn format_percentage(percentage: Option<f64>) -> String {
    match displayable(percentage) {
        Some(value) => {
            let sign = if value > 0.0 { "+" } else { "" };
            format!("{sign}{value:.1}%")
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Which comparison column a delta belongs to; each renders differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifferenceKind {
    Ratio,
    Percentage,
    Speed,
}

/// Renders a B-minus-A delta. Differences under 0.001 in magnitude read as
/// no change and render as the placeholder. Speed deltas show the magnitude
/// in both units; the leading sign alone carries the direction.
pub fn format_difference(kind: DifferenceKind, difference: f64) -> String {
    if !difference.is_finite() || difference.abs() < 0.001 {
        return PLACEHOLDER.to_string();
    }
    let sign = if difference > 0.0 { "+" } else { "" };
    match kind {
        DifferenceKind::Ratio => format!("{sign}{difference:.3}"),
        DifferenceKind::Percentage => format!("{sign}{difference:.2}%"),
        DifferenceKind::Speed => {
            let mph = difference.abs();
            let kmh = mph_to_kmh(mph);
            format!("{sign}{mph:.2} MPH ({sign}{kmh:.2} KM/H)")
        }
    }
}

/// Label for a transmission's reductions, front first. Symmetric gear sets
/// collapse to a single ratio; `reverse` swaps the ends before labeling.
pub fn format_transmission_ratios(front: f64, rear: f64) -> String {
    if front == rear {
        format!("{front:.3}:1")
    } else {
        format!("F:{front:.3} R:{rear:.3}")
    }
}

/// A [`CalculationResult`] rendered field-for-field for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResults {
    pub motor_ratio: String,
    pub final_front_ratio: String,
    pub final_rear_ratio: String,
    pub overdrive_percentage: String,
    pub front_speed: String,
    pub rear_speed: String,
}

pub fn formatted_results(result: &CalculationResult) -> FormattedResults {
    FormattedResults {
        motor_ratio: format_ratio(result.motor_ratio),
        final_front_ratio: format_ratio(result.final_front_ratio),
        final_rear_ratio: format_ratio(result.final_rear_ratio),
        overdrive_percentage: format_percentage(result.overdrive_percentage),
        front_speed: format_speed(result.front_speed),
        rear_speed: format_speed(result.rear_speed),
    }
}

/// A [`ResultDifferences`] rendered field-for-field for the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedDifferences {
    pub motor_ratio: String,
    pub final_front_ratio: String,
    pub final_rear_ratio: String,
    pub overdrive_percentage: String,
    pub front_speed: String,
    pub rear_speed: String,
}

pub fn formatted_differences(differences: &ResultDifferences) -> FormattedDifferences {
    FormattedDifferences {
        motor_ratio: format_difference(DifferenceKind::Ratio, differences.motor_ratio),
        final_front_ratio: format_difference(DifferenceKind::Ratio, differences.final_front_ratio),
        final_rear_ratio: format_difference(DifferenceKind::Ratio, differences.final_rear_ratio),
        overdrive_percentage: format_difference(
            DifferenceKind::Percentage,
            differences.overdrive_percentage,
        ),
        front_speed: format_difference(DifferenceKind::Speed, differences.front_speed),
        rear_speed: format_difference(DifferenceKind::Speed, differences.rear_speed),
    }
}
