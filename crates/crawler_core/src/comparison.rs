//! Side-by-side comparison of two drivetrain setups.

use crate::catalog::HardwareCatalog;
use crate::engine::{CalculationResult, RatioEngine};
use crate::params::DrivetrainParameters;
use crate::units::mph_to_kmh;
use serde::{Deserialize, Serialize};

/// Per-field deltas between two result snapshots, always B minus A. Unset
/// fields count as zero so a half-configured setup still produces a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDifferences {
    pub motor_ratio: f64,
    pub final_front_ratio: f64,
    pub final_rear_ratio: f64,
    pub overdrive_percentage: f64,
    pub front_speed: f64,
    pub rear_speed: f64,
}

impl ResultDifferences {
    pub fn between(a: &CalculationResult, b: &CalculationResult) -> ResultDifferences {
        ResultDifferences {
            motor_ratio: delta(a.motor_ratio, b.motor_ratio),
            final_front_ratio: delta(a.final_front_ratio, b.final_front_ratio),
            final_rear_ratio: delta(a.final_rear_ratio, b.final_rear_ratio),
            overdrive_percentage: delta(a.overdrive_percentage, b.overdrive_percentage),
            front_speed: delta(a.front_speed, b.front_speed),
            rear_speed: delta(a.rear_speed, b.rear_speed),
        }
    }
}

fn delta(a: Option<f64>, b: Option<f64>) -> f64 {
    b.unwrap_or(0.0) - a.unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonOutcome {
    pub results_a: CalculationResult,
    pub results_b: CalculationResult,
    pub differences: ResultDifferences,
}

/// Runs both setups through their own fresh engine so neither can see the
/// other's state, then diffs the snapshots.
pub fn compare_setups(
    catalog: &HardwareCatalog,
    setup_a: &DrivetrainParameters,
    setup_b: &DrivetrainParameters,
) -> ComparisonOutcome {
    let mut engine_a = RatioEngine::new();
    let mut engine_b = RatioEngine::new();
    let results_a = engine_a.calculate_all(catalog, setup_a);
    let results_b = engine_b.calculate_all(catalog, setup_b);
    ComparisonOutcome {
        results_a,
        results_b,
        differences: ResultDifferences::between(&results_a, &results_b),
    }
}

/// Plain-language observations about a comparison, in a fixed order: speed
/// gap, gearing gap, overdrive sign changes, use-case recommendation, motor
/// stress. Falls back to a ready-to-compare note when nothing stands out.
pub fn comparison_summary(
    name_a: &str,
    name_b: &str,
    results_a: &CalculationResult,
    results_b: &CalculationResult,
) -> Vec<String> {
    let mut summary = Vec::new();

    if results_a.final_front_ratio.is_none() || results_b.final_front_ratio.is_none() {
        summary.push("Please configure both setups to see comparison results.".to_string());
        return summary;
    }

    if let (Some(speed_a), Some(speed_b)) = (results_a.rear_speed, results_b.rear_speed) {
        let diff = speed_b - speed_a;
        if diff.abs() > 0.5 {
            let (faster, slower) = if diff > 0.0 {
                (name_b, name_a)
            } else {
                (name_a, name_b)
            };
            let mph = diff.abs();
            let kmh = mph_to_kmh(mph);
            summary.push(format!(
                "{faster} is {mph:.1} MPH ({kmh:.1} KM/H) faster than {slower}"
            ));
        }
    }

    if let (Some(ratio_a), Some(ratio_b)) = (results_a.final_rear_ratio, results_b.final_rear_ratio)
    {
        let diff = ratio_b - ratio_a;
        if diff.abs() > 1.0 {
            let higher = if diff > 0.0 { name_b } else { name_a };
            let magnitude = diff.abs();
            summary.push(format!(
                "{higher} has {magnitude:.1} higher gear ratio (more torque, less speed)"
            ));
        }
    }

    let overdrive_a = results_a.overdrive_percentage.unwrap_or(0.0);
    let overdrive_b = results_b.overdrive_percentage.unwrap_or(0.0);
    if overdrive_a.is_finite() && overdrive_b.is_finite() {
        if overdrive_a < 0.0 && overdrive_b >= 0.0 {
            summary.push(format!(
                "{name_b} fixes the negative overdrive issue from {name_a}"
            ));
        } else if overdrive_b < 0.0 && overdrive_a >= 0.0 {
            summary.push(format!(
                "Warning: {name_b} creates negative overdrive (rear faster than front)"
            ));
        }
    }

    if let (Some(front_a), Some(rear_a), Some(front_b), Some(rear_b)) = (
        results_a.final_front_ratio,
        results_a.final_rear_ratio,
        results_b.final_front_ratio,
        results_b.final_rear_ratio,
    ) {
        if results_a.rear_speed.is_some() && results_b.rear_speed.is_some() {
            let average_a = (front_a + rear_a) / 2.0;
            let average_b = (front_b + rear_b) / 2.0;
            if average_a > 50.0 && average_b < 30.0 {
                summary.push(format!(
                    "Recommendation: {name_a} is better for technical crawling, {name_b} is better for speed and trail running"
                ));
            } else if average_b > 50.0 && average_a < 30.0 {
                summary.push(format!(
                    "Recommendation: {name_b} is better for technical crawling, {name_a} is better for speed and trail running"
                ));
            }
        }
    }

    if let (Some(motor_a), Some(motor_b)) = (results_a.motor_ratio, results_b.motor_ratio) {
        if motor_a < 2.5 || motor_b < 2.5 {
            let (low_name, low_ratio) = if motor_a < motor_b {
                (name_a, motor_a)
            } else {
                (name_b, motor_b)
            };
            summary.push(format!(
                "Warning: {low_name} has a low motor ratio ({low_ratio:.2}) that may stress the motor"
            ));
        }
    }

    if summary.is_empty() {
        summary.push(
            "Both setups are properly configured and ready for comparison. \
             Review the performance differences in the table above."
                .to_string(),
        );
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crawler_setup() -> DrivetrainParameters {
        DrivetrainParameters {
            spur_teeth: Some(54),
            pinion_teeth: Some(10),
            transmission_name: Some("Axial 3-Gear".to_string()),
            front_axle_name: Some("Axial AR44 / AR45 / SCX Pro / Element".to_string()),
            rear_axle_name: Some("Axial AR44 / AR45 / SCX Pro / Element".to_string()),
            motor_kv: Some(1800.0),
            max_voltage: Some(11.1),
            tire_size: Some(4.19),
            ..DrivetrainParameters::default()
        }
    }

    fn speed_setup() -> DrivetrainParameters {
        DrivetrainParameters {
            spur_teeth: Some(54),
            pinion_teeth: Some(20),
            transmission_name: Some("Traxxas TRX-4 High Gear".to_string()),
            ..crawler_setup()
        }
    }

    #[test]
    fn identical_setups_have_zero_differences() {
        let catalog = HardwareCatalog::builtin();
        let setup = crawler_setup();
        let outcome = compare_setups(&catalog, &setup, &setup);
        assert_eq!(outcome.differences, ResultDifferences::default());
    }

    #[test]
    fn differences_run_b_minus_a() {
        let catalog = HardwareCatalog::builtin();
        let mut setup_b = crawler_setup();
        setup_b.spur_teeth = Some(60);
        let outcome = compare_setups(&catalog, &crawler_setup(), &setup_b);
        // 60/10 - 54/10
        assert!((outcome.differences.motor_ratio - 0.6).abs() < 1e-9);
        assert!(outcome.differences.final_rear_ratio > 0.0);
    }

    #[test]
    fn unset_fields_diff_against_zero() {
        let catalog = HardwareCatalog::builtin();
        let mut setup_b = crawler_setup();
        setup_b.rear_axle_name = None;
        let outcome = compare_setups(&catalog, &crawler_setup(), &setup_b);
        let front_a = outcome.results_a.final_front_ratio.expect("front ratio set");
        assert!(outcome.results_b.final_front_ratio.is_none());
        assert!((outcome.differences.final_front_ratio + front_a).abs() < 1e-9);
    }

    #[test]
    fn summary_requires_both_setups_configured() {
        let catalog = HardwareCatalog::builtin();
        let mut setup_b = crawler_setup();
        setup_b.transmission_name = None;
        let outcome = compare_setups(&catalog, &crawler_setup(), &setup_b);
        let lines = comparison_summary(
            "Setup A",
            "Setup B",
            &outcome.results_a,
            &outcome.results_b,
        );
        assert_eq!(
            lines,
            vec!["Please configure both setups to see comparison results.".to_string()]
        );
    }

    #[test]
    fn summary_reports_speed_and_gearing_gaps() {
        let catalog = HardwareCatalog::builtin();
        let outcome = compare_setups(&catalog, &crawler_setup(), &speed_setup());
        let lines = comparison_summary(
            "Crawler",
            "Speed Run",
            &outcome.results_a,
            &outcome.results_b,
        );
        assert!(lines
            .iter()
            .any(|l| l.starts_with("Speed Run is ") && l.contains("faster than Crawler")));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("Crawler has ") && l.contains("higher gear ratio")));
    }

    #[test]
    fn summary_recommends_use_cases_for_wide_gearing_gaps() {
        let catalog = HardwareCatalog::builtin();
        // 52.65 average vs 8.1 average
        let outcome = compare_setups(&catalog, &crawler_setup(), &speed_setup());
        let lines = comparison_summary(
            "Crawler",
            "Speed Run",
            &outcome.results_a,
            &outcome.results_b,
        );
        assert!(lines.iter().any(|l| l
            == "Recommendation: Crawler is better for technical crawling, Speed Run is better for speed and trail running"));
    }

    #[test]
    fn summary_flags_negative_overdrive() {
        let catalog = HardwareCatalog::builtin();
        let mut underdriven = crawler_setup();
        // 1.950 front vs 1.350 rear, rear ends up faster
        underdriven.transmission_name = Some("Procrawler Grind 328 LCG OD".to_string());
        let outcome = compare_setups(&catalog, &crawler_setup(), &underdriven);
        let lines = comparison_summary(
            "Setup A",
            "Setup B",
            &outcome.results_a,
            &outcome.results_b,
        );
        assert!(lines.iter().any(|l| l
            == "Warning: Setup B creates negative overdrive (rear faster than front)"));

        let outcome = compare_setups(&catalog, &underdriven, &crawler_setup());
        let lines = comparison_summary(
            "Setup A",
            "Setup B",
            &outcome.results_a,
            &outcome.results_b,
        );
        assert!(lines
            .iter()
            .any(|l| l == "Setup B fixes the negative overdrive issue from Setup A"));
    }

    #[test]
    fn summary_flags_low_motor_ratio() {
        let catalog = HardwareCatalog::builtin();
        let mut low_ratio = crawler_setup();
        low_ratio.spur_teeth = Some(36);
        low_ratio.pinion_teeth = Some(20);
        let outcome = compare_setups(&catalog, &crawler_setup(), &low_ratio);
        let lines = comparison_summary(
            "Setup A",
            "Setup B",
            &outcome.results_a,
            &outcome.results_b,
        );
        assert!(lines.iter().any(|l| l
            == "Warning: Setup B has a low motor ratio (1.80) that may stress the motor"));
    }

    #[test]
    fn summary_falls_back_when_nothing_stands_out() {
        let catalog = HardwareCatalog::builtin();
        let setup = crawler_setup();
        let outcome = compare_setups(&catalog, &setup, &setup);
        let lines = comparison_summary(
            "Setup A",
            "Setup B",
            &outcome.results_a,
            &outcome.results_b,
        );
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Both setups are properly configured"));
    }
}
