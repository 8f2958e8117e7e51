//! WASM bindings exposing the crawler calculator to the browser.

pub mod calculator;
pub mod comparison;
pub mod export;

use crawler_core::params::DrivetrainParameters;
use crawler_core::version;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn app_version() -> String {
    version::CURRENT.full()
}

#[wasm_bindgen]
pub fn app_version_display() -> String {
    version::CURRENT.display()
}

/// Whether the running app is newer than a version string persisted by an
/// earlier visit, used to decide when to show update notes.
#[wasm_bindgen]
pub fn is_version_newer_than(stored: &str) -> bool {
    version::CURRENT.is_newer_than(stored)
}

pub(crate) fn parse_parameters(value: JsValue) -> Result<DrivetrainParameters, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|err| JsValue::from_str(&format!("Invalid parameters: {err}")))
}

pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|err| JsValue::from_str(&format!("Failed to serialize result: {err}")))
}
