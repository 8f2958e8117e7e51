//! Calculation engine for the ydrRC crawler gear ratio calculator.
//!
//! Turns drivetrain inputs (gear teeth, transmission and axle selections,
//! motor and battery specs, tire size) into final drive ratios, overdrive
//! percentage, and estimated wheel speeds, with input validation, display
//! formatting, two-setup comparison, and a text config format layered on
//! top. The hardware lookup tables ship in [`catalog`].

pub mod catalog;
pub mod comparison;
pub mod config;
pub mod engine;
pub mod format;
pub mod params;
pub mod units;
pub mod validation;
pub mod version;
