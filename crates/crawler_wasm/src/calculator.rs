//! Single-setup calculator binding backing the main form.

use crate::{parse_parameters, to_js};
use crawler_core::catalog::HardwareCatalog;
use crawler_core::config::SetupConfig;
use crawler_core::engine::RatioEngine;
use crawler_core::format;
use crawler_core::validation;
use wasm_bindgen::prelude::*;

/// Owns the hardware catalog and the engine holding the latest result
/// snapshot. The browser constructs one of these at startup and calls it on
/// every input change.
#[wasm_bindgen]
pub struct Calculator {
    catalog: HardwareCatalog,
    engine: RatioEngine,
}

#[wasm_bindgen]
impl Calculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Calculator {
        console_error_panic_hook::set_once();
        Calculator {
            catalog: HardwareCatalog::builtin(),
            engine: RatioEngine::new(),
        }
    }

    /// Full calculation pass over a parameters object; returns the raw
    /// numeric snapshot with unset fields as `undefined`.
    pub fn calculate_all(&mut self, params: JsValue) -> Result<JsValue, JsValue> {
        let params = parse_parameters(params)?;
        let result = self.engine.calculate_all(&self.catalog, &params);
        to_js(&result)
    }

    pub fn compute_ratios(&mut self, params: JsValue) -> Result<JsValue, JsValue> {
        let params = parse_parameters(params)?;
        let result = self.engine.compute_ratios(&self.catalog, &params);
        to_js(&result)
    }

    pub fn compute_speeds(&mut self, params: JsValue) -> Result<JsValue, JsValue> {
        let params = parse_parameters(params)?;
        let result = self.engine.compute_speeds(&params);
        to_js(&result)
    }

    /// Latest snapshot rendered to display strings, placeholders included.
    pub fn formatted_results(&self) -> Result<JsValue, JsValue> {
        to_js(&format::formatted_results(self.engine.last_result()))
    }

    pub fn validate(&self, params: JsValue) -> Result<JsValue, JsValue> {
        let params = parse_parameters(params)?;
        to_js(&validation::validate_inputs(&params))
    }

    pub fn transmission_names(&self) -> Vec<String> {
        self.catalog.transmission_names()
    }

    pub fn axle_names(&self) -> Vec<String> {
        self.catalog.axle_names()
    }

    /// Ratio label shown next to the transmission selector, honoring reverse
    /// mounting. Unknown names label as the placeholder.
    pub fn transmission_ratio_label(&self, name: &str, reverse: bool) -> String {
        match self.catalog.transmission(name) {
            Some(entry) => {
                let (front, rear) = if reverse {
                    (entry.rear, entry.front)
                } else {
                    (entry.front, entry.rear)
                };
                format::format_transmission_ratios(front, rear)
            }
            None => format::PLACEHOLDER.to_string(),
        }
    }

    pub fn axle_ratio_label(&self, name: &str) -> String {
        format::format_ratio(self.catalog.axle(name).map(|entry| entry.ratio))
    }

    /// Serializes a setup to the marker-delimited key=value block.
    pub fn export_config_block(&self, config: JsValue) -> Result<String, JsValue> {
        let config = parse_config(config)?;
        Ok(config.to_block())
    }

    /// Recovers a setup from pasted text containing a config block.
    pub fn import_config_block(&self, text: &str) -> Result<JsValue, JsValue> {
        let config = SetupConfig::parse_block(text)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        to_js(&config)
    }

    /// Renders the full text report for a setup, recalculating its results
    /// and stamping the current date.
    pub fn export_document(&mut self, config: JsValue) -> Result<String, JsValue> {
        let config = parse_config(config)?;
        let params = config.to_parameters();
        let result = self.engine.calculate_all(&self.catalog, &params);
        Ok(crate::export::render_document(
            &config,
            &result,
            &crate::export::local_date(),
            &crate::export::iso_timestamp(),
        ))
    }
}

impl Default for Calculator {
    fn default() -> Calculator {
        Calculator::new()
    }
}

fn parse_config(value: JsValue) -> Result<SetupConfig, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|err| JsValue::from_str(&format!("Invalid configuration: {err}")))
}
