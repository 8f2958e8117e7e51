//! Lookup tables for known transmission and axle hardware.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

mod builtin;

/// Reduction a transmission applies to each output shaft, as N:1. Overdrive
/// gear sets list different front and rear values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransmissionEntry {
    pub front: f64,
    pub rear: f64,
}

/// Reduction an axle applies between driveshaft and wheel, as N:1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxleEntry {
    pub ratio: f64,
}

/// Immutable name-keyed tables of transmission and axle ratios. Built once
/// and shared by every calculation; entries are never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct HardwareCatalog {
    transmissions: BTreeMap<String, TransmissionEntry>,
    axles: BTreeMap<String, AxleEntry>,
}

impl HardwareCatalog {
    /// Catalog of the hardware tables shipped with the calculator.
    pub fn builtin() -> HardwareCatalog {
        let transmissions = builtin::TRANSMISSIONS
            .iter()
            .map(|&(name, front, rear)| (name.to_string(), TransmissionEntry { front, rear }))
            .collect();
        let axles = builtin::AXLES
            .iter()
            .map(|&(name, ratio)| (name.to_string(), AxleEntry { ratio }))
            .collect();
        let catalog = HardwareCatalog { transmissions, axles };
        debug!(
            "built hardware catalog: {} transmissions, {} axles",
            catalog.transmissions.len(),
            catalog.axles.len()
        );
        catalog
    }

    /// Builds a catalog from caller-supplied tables, rejecting unusable
    /// entries up front so lookups never have to re-validate.
    pub fn from_entries<T, A>(transmissions: T, axles: A) -> Result<HardwareCatalog>
    where
        T: IntoIterator<Item = (String, TransmissionEntry)>,
        A: IntoIterator<Item = (String, AxleEntry)>,
    {
        let mut catalog = HardwareCatalog::default();
        for (name, entry) in transmissions {
            if name.trim().is_empty() {
                bail!("Transmission name must not be empty.");
            }
            if !ratio_usable(entry.front) || !ratio_usable(entry.rear) {
                bail!("Transmission '{name}' must have positive, finite ratios.");
            }
            if catalog.transmissions.insert(name.clone(), entry).is_some() {
                bail!("Duplicate transmission name '{name}'.");
            }
        }
        for (name, entry) in axles {
            if name.trim().is_empty() {
                bail!("Axle name must not be empty.");
            }
            if !ratio_usable(entry.ratio) {
                bail!("Axle '{name}' must have a positive, finite ratio.");
            }
            if catalog.axles.insert(name.clone(), entry).is_some() {
                bail!("Duplicate axle name '{name}'.");
            }
        }
        Ok(catalog)
    }

    pub fn transmission(&self, name: &str) -> Option<&TransmissionEntry> {
        self.transmissions.get(name)
    }

    pub fn axle(&self, name: &str) -> Option<&AxleEntry> {
        self.axles.get(name)
    }

    /// Transmission names sorted case-insensitively for display.
    pub fn transmission_names(&self) -> Vec<String> {
        sorted_names(self.transmissions.keys())
    }

    /// Axle names sorted case-insensitively for display.
    pub fn axle_names(&self) -> Vec<String> {
        sorted_names(self.axles.keys())
    }
}

fn ratio_usable(ratio: f64) -> bool {
    ratio.is_finite() && ratio > 0.0
}

fn sorted_names<'a>(keys: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut names: Vec<String> = keys.cloned().collect();
    names.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.as_str().cmp(b.as_str()))
    });
    names
}
