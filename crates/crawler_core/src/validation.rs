//! Input validation with hard errors and advisory warnings.

use crate::engine;
use crate::params::DrivetrainParameters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Checks one setup's inputs. Errors mark the setup invalid; warnings flag
/// unusual but workable values and never affect validity. Optional inputs
/// left unset (or zero) are only warned about when actually present.
pub fn validate_inputs(params: &DrivetrainParameters) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let spur = params.spur_teeth.unwrap_or(0);
    if !(20..=100).contains(&spur) {
        errors.push("Spur gear teeth must be between 20 and 100".to_string());
    }
    let pinion = params.pinion_teeth.unwrap_or(0);
    if !(8..=30).contains(&pinion) {
        errors.push("Pinion gear teeth must be between 8 and 30".to_string());
    }

    if params.transmission_name.as_deref().unwrap_or("").is_empty() {
        errors.push("Please select a transmission".to_string());
    }
    if params.front_axle_name.as_deref().unwrap_or("").is_empty() {
        errors.push("Please select a front axle".to_string());
    }
    if params.rear_axle_name.as_deref().unwrap_or("").is_empty() {
        errors.push("Please select a rear axle".to_string());
    }

    if let Some(kv) = present(params.motor_kv) {
        if !(100.0..=5000.0).contains(&kv) {
            warnings.push("Motor KV should typically be between 100 and 5000".to_string());
        }
    }
    if let Some(voltage) = present(params.max_voltage) {
        if !(3.0..=20.0).contains(&voltage) {
            warnings.push("Battery voltage should typically be between 3V and 20V".to_string());
        }
    }
    if let Some(tire) = present(params.tire_size) {
        if !(1.0..=10.0).contains(&tire) {
            warnings.push("Tire size seems unusual - please verify".to_string());
        }
    }

    if spur > 0 && pinion > 0 {
        let ratio = engine::motor_ratio(spur, pinion);
        if ratio > 10.0 {
            warnings.push("Very high motor ratio may result in slow speeds".to_string());
        } else if ratio < 2.0 {
            warnings.push("Very low motor ratio may stress the motor".to_string());
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::TireSizeUnit;

    fn valid_params() -> DrivetrainParameters {
        DrivetrainParameters {
            spur_teeth: Some(54),
            pinion_teeth: Some(10),
            transmission_name: Some("Axial 3-Gear".to_string()),
            front_axle_name: Some("Axial AR60 STD".to_string()),
            rear_axle_name: Some("Axial AR60 STD".to_string()),
            reverse_transmission: false,
            motor_kv: Some(1800.0),
            max_voltage: Some(11.1),
            tire_size: Some(4.19),
            tire_size_unit: TireSizeUnit::Inches,
        }
    }

    #[test]
    fn complete_setup_is_valid() {
        let report = validate_inputs(&valid_params());
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn spur_out_of_range_is_an_error() {
        let mut params = valid_params();
        params.spur_teeth = Some(15);
        let report = validate_inputs(&params);
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec!["Spur gear teeth must be between 20 and 100".to_string()]
        );
    }

    #[test]
    fn pinion_out_of_range_is_an_error() {
        let mut params = valid_params();
        params.pinion_teeth = Some(31);
        let report = validate_inputs(&params);
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec!["Pinion gear teeth must be between 8 and 30".to_string()]
        );
    }

    #[test]
    fn missing_teeth_count_as_out_of_range() {
        let mut params = valid_params();
        params.spur_teeth = None;
        params.pinion_teeth = Some(0);
        let report = validate_inputs(&params);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn missing_selections_each_report_an_error() {
        let mut params = valid_params();
        params.transmission_name = None;
        params.front_axle_name = Some(String::new());
        params.rear_axle_name = None;
        let report = validate_inputs(&params);
        assert!(!report.is_valid);
        assert!(report.errors.contains(&"Please select a transmission".to_string()));
        assert!(report.errors.contains(&"Please select a front axle".to_string()));
        assert!(report.errors.contains(&"Please select a rear axle".to_string()));
    }

    #[test]
    fn unusual_power_inputs_only_warn() {
        let mut params = valid_params();
        params.motor_kv = Some(6000.0);
        params.max_voltage = Some(25.0);
        params.tire_size = Some(0.5);
        let report = validate_inputs(&params);
        assert!(report.is_valid);
        assert_eq!(
            report.warnings,
            vec![
                "Motor KV should typically be between 100 and 5000".to_string(),
                "Battery voltage should typically be between 3V and 20V".to_string(),
                "Tire size seems unusual - please verify".to_string(),
            ]
        );
    }

    #[test]
    fn unset_power_inputs_do_not_warn() {
        let mut params = valid_params();
        params.motor_kv = None;
        params.max_voltage = Some(0.0);
        params.tire_size = None;
        let report = validate_inputs(&params);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn extreme_motor_ratios_warn() {
        let mut params = valid_params();
        params.spur_teeth = Some(90);
        params.pinion_teeth = Some(8);
        let report = validate_inputs(&params);
        assert!(report.is_valid);
        assert_eq!(
            report.warnings,
            vec!["Very high motor ratio may result in slow speeds".to_string()]
        );

        params.spur_teeth = Some(30);
        params.pinion_teeth = Some(20);
        let report = validate_inputs(&params);
        assert_eq!(
            report.warnings,
            vec!["Very low motor ratio may stress the motor".to_string()]
        );
    }

    #[test]
    fn ratio_warning_needs_both_tooth_counts() {
        let mut params = valid_params();
        params.pinion_teeth = None;
        let report = validate_inputs(&params);
        assert!(report.warnings.is_empty());
    }
}
