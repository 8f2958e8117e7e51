//! Plain-text export of a setup and its results.
//!
//! The document is what lands in the downloaded `.txt` file: a banner
//! header, the inputs and results in aligned columns, and the machine
//! readable config block so the file can be imported again later.

use crawler_core::config::SetupConfig;
use crawler_core::engine::CalculationResult;
use crawler_core::format;
use crawler_core::version;
use wasm_bindgen::JsValue;

/// Renders the export document. `date_display` is the human-readable export
/// date and `date_iso` the exact timestamp; both are passed in so rendering
/// stays deterministic.
pub fn render_document(
    config: &SetupConfig,
    result: &CalculationResult,
    date_display: &str,
    date_iso: &str,
) -> String {
    let formatted = format::formatted_results(result);
    let version_full = version::CURRENT.full();
    let build = version::CURRENT.build;
    let release_date = version::CURRENT.release_date;

    let pinion = display_or_empty(config.pinion);
    let spur = display_or_empty(config.spur);
    let transmission = config.transmission.as_deref().unwrap_or("");
    let front_axle = config.front_axle.as_deref().unwrap_or("");
    let rear_axle = config.rear_axle.as_deref().unwrap_or("");
    let reverse = if config.reverse_transmission { "YES" } else { "NO" };
    let motor_kv = display_or_empty(config.motor_kv);
    let voltage_preset = config.voltage_preset.as_deref().unwrap_or("Custom");
    let max_voltage = display_or_empty(config.max_voltage);
    let tire_size = display_or_empty(config.tire_size);
    let tire_unit = config.tire_size_unit.map(|u| u.label()).unwrap_or("");

    let motor_ratio = formatted.motor_ratio;
    let final_front = formatted.final_front_ratio;
    let final_rear = formatted.final_rear_ratio;
    let front_speed = formatted.front_speed;
    let rear_speed = formatted.rear_speed;
    let config_block = config.to_block();

    format!(
        "===============================================
         RC CRAWLER GEAR RATIO CALCULATOR
                 ydrRC Configuration
===============================================
Export Date: {date_display}

CALCULATOR VERSION:
==================
Version:           {version_full}
Build:             {build}
Release Date:      {release_date}
Export Timestamp:  {date_iso}


DRIVETRAIN CONFIGURATION:
========================
Pinion Gear:           {pinion} teeth
Spur Gear:             {spur} teeth
Transmission:          {transmission}
Front Axle:            {front_axle}
Rear Axle:             {rear_axle}
Reverse Transmission:  {reverse}

POWER SYSTEM:
=============
Motor KV:              {motor_kv}
Voltage Preset:        {voltage_preset}
Max Voltage:           {max_voltage}V
Tire Size:             {tire_size} {tire_unit}

CALCULATED RESULTS:
==================
Motor Gear Ratio:      {motor_ratio}
Final Front Ratio:     {final_front}
Final Rear Ratio:      {final_rear}
Approx. Front Speed:   {front_speed}
Approx. Rear Speed:    {rear_speed}

CONFIGURATION DATA (DO NOT EDIT):
=================================
{config_block}

===============================================
Generated by ydrRC Crawler Calculator
==============================================="
    )
}

fn display_or_empty<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub(crate) fn local_date() -> String {
    js_sys::Date::new_0()
        .to_locale_string("en-US", &JsValue::UNDEFINED)
        .into()
}

pub(crate) fn iso_timestamp() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crawler_core::config::{CONFIG_END, CONFIG_START};
    use crawler_core::units::TireSizeUnit;

    fn sample_config() -> SetupConfig {
        SetupConfig {
            pinion: Some(10),
            spur: Some(54),
            transmission: Some("Axial 3-Gear".to_string()),
            front_axle: Some("Axial AR60 STD".to_string()),
            rear_axle: Some("Axial AR60 STD".to_string()),
            reverse_transmission: false,
            motor_kv: Some(1800.0),
            voltage_preset: None,
            max_voltage: Some(11.1),
            tire_size: Some(4.19),
            tire_size_unit: Some(TireSizeUnit::Inches),
        }
    }

    fn sample_result() -> CalculationResult {
        CalculationResult {
            motor_ratio: Some(5.4),
            final_front_ratio: Some(41.02),
            final_rear_ratio: Some(41.02),
            overdrive_percentage: Some(0.0),
            front_speed: Some(6.07),
            rear_speed: Some(6.07),
        }
    }

    #[test]
    fn document_lays_out_every_section_in_order() {
        let document = render_document(
            &sample_config(),
            &sample_result(),
            "6/24/2025, 10:30:00 AM",
            "2025-06-24T17:30:00.000Z",
        );
        let sections = [
            "RC CRAWLER GEAR RATIO CALCULATOR",
            "Export Date: 6/24/2025, 10:30:00 AM",
            "CALCULATOR VERSION:",
            "Export Timestamp:  2025-06-24T17:30:00.000Z",
            "DRIVETRAIN CONFIGURATION:",
            "POWER SYSTEM:",
            "CALCULATED RESULTS:",
            "CONFIGURATION DATA (DO NOT EDIT):",
            "Generated by ydrRC Crawler Calculator",
        ];
        let mut cursor = 0;
        for section in sections {
            let at = document[cursor..]
                .find(section)
                .unwrap_or_else(|| panic!("missing section: {section}"));
            cursor += at + section.len();
        }
        assert!(document.ends_with("==============================================="));
    }

    #[test]
    fn document_renders_inputs_and_results() {
        let document = render_document(
            &sample_config(),
            &sample_result(),
            "6/24/2025, 10:30:00 AM",
            "2025-06-24T17:30:00.000Z",
        );
        assert!(document.contains("Pinion Gear:           10 teeth"));
        assert!(document.contains("Spur Gear:             54 teeth"));
        assert!(document.contains("Transmission:          Axial 3-Gear"));
        assert!(document.contains("Reverse Transmission:  NO"));
        assert!(document.contains("Motor KV:              1800"));
        assert!(document.contains("Voltage Preset:        Custom"));
        assert!(document.contains("Max Voltage:           11.1V"));
        assert!(document.contains("Tire Size:             4.19 inches"));
        assert!(document.contains("Motor Gear Ratio:      5.400:1"));
        assert!(document.contains("Final Rear Ratio:      41.020:1"));
        assert!(document.contains("Approx. Front Speed:   6.07 MPH"));
        assert!(document.contains("Version:           2.1.1"));
        assert!(document.contains("Build:             June 2025"));
    }

    #[test]
    fn document_round_trips_through_import() {
        let config = sample_config();
        let document = render_document(
            &config,
            &sample_result(),
            "6/24/2025, 10:30:00 AM",
            "2025-06-24T17:30:00.000Z",
        );
        assert!(document.contains(CONFIG_START));
        assert!(document.contains(CONFIG_END));
        let imported = SetupConfig::parse_block(&document).expect("document should import");
        assert_eq!(imported, config);
    }

    #[test]
    fn unset_fields_render_as_blanks_and_placeholders() {
        let document = render_document(
            &SetupConfig::default(),
            &CalculationResult::default(),
            "6/24/2025, 10:30:00 AM",
            "2025-06-24T17:30:00.000Z",
        );
        assert!(document.contains("Pinion Gear:            teeth"));
        assert!(document.contains("Max Voltage:           V"));
        assert!(document.contains("Motor Gear Ratio:      -"));
        assert!(document.contains("Approx. Rear Speed:    -"));
    }
}
