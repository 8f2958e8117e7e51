//! Two-setup comparison binding backing the compare view.

use crate::{parse_parameters, to_js};
use crawler_core::catalog::HardwareCatalog;
use crawler_core::comparison::{self, ComparisonOutcome};
use crawler_core::format;
use wasm_bindgen::prelude::*;

/// Runs two independent engines over a shared catalog and keeps the last
/// comparison outcome for the formatting accessors.
#[wasm_bindgen]
pub struct SetupComparison {
    catalog: HardwareCatalog,
    last: Option<ComparisonOutcome>,
}

#[wasm_bindgen]
impl SetupComparison {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SetupComparison {
        console_error_panic_hook::set_once();
        SetupComparison {
            catalog: HardwareCatalog::builtin(),
            last: None,
        }
    }

    /// Calculates both setups and their B-minus-A differences.
    pub fn compare(&mut self, setup_a: JsValue, setup_b: JsValue) -> Result<JsValue, JsValue> {
        let setup_a = parse_parameters(setup_a)?;
        let setup_b = parse_parameters(setup_b)?;
        let outcome = comparison::compare_setups(&self.catalog, &setup_a, &setup_b);
        self.last = Some(outcome);
        to_js(&outcome)
    }

    pub fn formatted_results_a(&self) -> Result<JsValue, JsValue> {
        match &self.last {
            Some(outcome) => to_js(&format::formatted_results(&outcome.results_a)),
            None => Err(no_comparison()),
        }
    }

    pub fn formatted_results_b(&self) -> Result<JsValue, JsValue> {
        match &self.last {
            Some(outcome) => to_js(&format::formatted_results(&outcome.results_b)),
            None => Err(no_comparison()),
        }
    }

    pub fn formatted_differences(&self) -> Result<JsValue, JsValue> {
        match &self.last {
            Some(outcome) => to_js(&format::formatted_differences(&outcome.differences)),
            None => Err(no_comparison()),
        }
    }

    /// Summary sentences for the last comparison under the given setup
    /// names. Empty until a comparison has run.
    pub fn summary(&self, name_a: Option<String>, name_b: Option<String>) -> Vec<String> {
        let Some(outcome) = &self.last else {
            return Vec::new();
        };
        comparison::comparison_summary(
            name_a.as_deref().unwrap_or("Setup A"),
            name_b.as_deref().unwrap_or("Setup B"),
            &outcome.results_a,
            &outcome.results_b,
        )
    }
}

impl Default for SetupComparison {
    fn default() -> SetupComparison {
        SetupComparison::new()
    }
}

fn no_comparison() -> JsValue {
    JsValue::from_str("No comparison has been run yet")
}
