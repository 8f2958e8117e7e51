//! Input parameters for a single drivetrain setup.

use crate::units::TireSizeUnit;
use serde::{Deserialize, Serialize};

/// One setup's worth of user input. Every field is optional so a partially
/// filled form can still be calculated; unset or zero inputs simply leave the
/// dependent results unset.
///
/// Field names serialize in camelCase to match the browser side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DrivetrainParameters {
    pub spur_teeth: Option<u32>,
    pub pinion_teeth: Option<u32>,
    pub transmission_name: Option<String>,
    pub front_axle_name: Option<String>,
    pub rear_axle_name: Option<String>,
    /// Mount the transmission backwards, swapping its front and rear outputs.
    pub reverse_transmission: bool,
    #[serde(rename = "motorKV")]
    pub motor_kv: Option<f64>,
    pub max_voltage: Option<f64>,
    pub tire_size: Option<f64>,
    pub tire_size_unit: TireSizeUnit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fully_unset() {
        let params = DrivetrainParameters::default();
        assert_eq!(params.spur_teeth, None);
        assert_eq!(params.transmission_name, None);
        assert!(!params.reverse_transmission);
        assert_eq!(params.tire_size_unit, TireSizeUnit::Inches);
    }
}
