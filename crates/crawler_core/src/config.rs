//! Key=value setup blocks for saving and restoring a configuration.
//!
//! The block travels inside exported text documents between `CONFIG_START`
//! and `CONFIG_END` markers, one `key=value` per line. Parsing is lenient:
//! unknown keys are skipped and malformed values leave the field unset, so an
//! edited or truncated block still imports as far as it can.

use crate::params::DrivetrainParameters;
use crate::units::TireSizeUnit;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

pub const CONFIG_START: &str = "CONFIG_START";
pub const CONFIG_END: &str = "CONFIG_END";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no CONFIG_START marker found in the imported text")]
    MissingStart,
    #[error("no CONFIG_END marker found after CONFIG_START")]
    MissingEnd,
}

/// Everything a saved setup carries, including the voltage preset choice the
/// calculation itself never reads. All fields optional; absent keys import
/// as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetupConfig {
    pub pinion: Option<u32>,
    pub spur: Option<u32>,
    pub transmission: Option<String>,
    pub front_axle: Option<String>,
    pub rear_axle: Option<String>,
    pub reverse_transmission: bool,
    #[serde(rename = "motorKV")]
    pub motor_kv: Option<f64>,
    pub voltage_preset: Option<String>,
    pub max_voltage: Option<f64>,
    pub tire_size: Option<f64>,
    pub tire_size_unit: Option<TireSizeUnit>,
}

impl SetupConfig {
    /// Extracts and parses the first marker-delimited block in `text`, which
    /// may be a whole exported document. Later duplicate keys win.
    pub fn parse_block(text: &str) -> Result<SetupConfig, ConfigError> {
        let mut config = SetupConfig::default();
        let mut inside = false;
        let mut seen_start = false;
        let mut seen_end = false;
        for raw_line in text.lines() {
            let line = raw_line.trim();
            if !inside {
                if line == CONFIG_START {
                    inside = true;
                    seen_start = true;
                }
                continue;
            }
            if line == CONFIG_END {
                seen_end = true;
                break;
            }
            let Some((key, value)) = line.split_once('=') else {
                trace!("skipping config line without separator: {}", line);
                continue;
            };
            config.apply(key.trim(), value.trim());
        }
        if !seen_start {
            return Err(ConfigError::MissingStart);
        }
        if !seen_end {
            return Err(ConfigError::MissingEnd);
        }
        Ok(config)
    }

    fn apply(&mut self, key: &str, value: &str) {
        match key {
            "pinion" => self.pinion = value.parse().ok(),
            "spur" => self.spur = value.parse().ok(),
            "transmission" => self.transmission = non_empty(value),
            "frontAxle" => self.front_axle = non_empty(value),
            "rearAxle" => self.rear_axle = non_empty(value),
            "reverseTransmission" => self.reverse_transmission = value == "true",
            "motorKV" => self.motor_kv = value.parse().ok(),
            "voltagePreset" => self.voltage_preset = non_empty(value),
            "maxVoltage" => self.max_voltage = value.parse().ok(),
            "tireSize" => self.tire_size = value.parse().ok(),
            "tireSizeUnit" => self.tire_size_unit = TireSizeUnit::from_label(value),
            _ => trace!("ignoring unknown config key: {}", key),
        }
    }

    /// Serializes every field between the markers. Unset fields write empty
    /// values, mirroring what an untouched form field holds, so parsing the
    /// block back reproduces this config exactly.
    pub fn to_block(&self) -> String {
        let lines = [
            CONFIG_START.to_string(),
            format!("pinion={}", display_or_empty(self.pinion)),
            format!("spur={}", display_or_empty(self.spur)),
            format!("transmission={}", self.transmission.as_deref().unwrap_or("")),
            format!("frontAxle={}", self.front_axle.as_deref().unwrap_or("")),
            format!("rearAxle={}", self.rear_axle.as_deref().unwrap_or("")),
            format!("reverseTransmission={}", self.reverse_transmission),
            format!("motorKV={}", display_or_empty(self.motor_kv)),
            format!("voltagePreset={}", self.voltage_preset.as_deref().unwrap_or("")),
            format!("maxVoltage={}", display_or_empty(self.max_voltage)),
            format!("tireSize={}", display_or_empty(self.tire_size)),
            format!(
                "tireSizeUnit={}",
                self.tire_size_unit.map(TireSizeUnit::label).unwrap_or("")
            ),
            CONFIG_END.to_string(),
        ];
        lines.join("\n")
    }

    pub fn to_parameters(&self) -> DrivetrainParameters {
        DrivetrainParameters {
            spur_teeth: self.spur,
            pinion_teeth: self.pinion,
            transmission_name: self.transmission.clone(),
            front_axle_name: self.front_axle.clone(),
            rear_axle_name: self.rear_axle.clone(),
            reverse_transmission: self.reverse_transmission,
            motor_kv: self.motor_kv,
            max_voltage: self.max_voltage,
            tire_size: self.tire_size,
            tire_size_unit: self.tire_size_unit.unwrap_or_default(),
        }
    }

    pub fn from_parameters(
        params: &DrivetrainParameters,
        voltage_preset: Option<String>,
    ) -> SetupConfig {
        SetupConfig {
            pinion: params.pinion_teeth,
            spur: params.spur_teeth,
            transmission: params.transmission_name.clone(),
            front_axle: params.front_axle_name.clone(),
            rear_axle: params.rear_axle_name.clone(),
            reverse_transmission: params.reverse_transmission,
            motor_kv: params.motor_kv,
            voltage_preset,
            max_voltage: params.max_voltage,
            tire_size: params.tire_size,
            tire_size_unit: Some(params.tire_size_unit),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn display_or_empty<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
