//! Ratio and speed calculations for a single drivetrain setup.

use crate::catalog::HardwareCatalog;
use crate::params::DrivetrainParameters;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

const MINUTES_PER_HOUR: f64 = 60.0;
const INCHES_PER_FOOT: f64 = 12.0;
const FEET_PER_MILE: f64 = 5280.0;

/// Snapshot of everything the calculator derives from one set of inputs.
/// `None` means "not calculable from the current inputs" and renders as a
/// placeholder; it is distinct from a genuine zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub motor_ratio: Option<f64>,
    pub final_front_ratio: Option<f64>,
    pub final_rear_ratio: Option<f64>,
    pub overdrive_percentage: Option<f64>,
    pub front_speed: Option<f64>,
    pub rear_speed: Option<f64>,
}

/// Spur over pinion reduction. Returns 0 when either tooth count is zero so
/// callers can treat the result as unset.
pub fn motor_ratio(spur_teeth: u32, pinion_teeth: u32) -> f64 {
    if spur_teeth == 0 || pinion_teeth == 0 {
        return 0.0;
    }
    f64::from(spur_teeth) / f64::from(pinion_teeth)
}

/// Percentage difference between the final drive ratios, relative to their
/// mean. Positive when the rear ratio is numerically higher (rear wheels
/// geared slower than the fronts, the usual crawler overdrive setup).
/// Returns 0 when either ratio is zero or non-finite.
pub fn overdrive_percentage(front_ratio: f64, rear_ratio: f64) -> f64 {
    if front_ratio == 0.0 || rear_ratio == 0.0 || !front_ratio.is_finite() || !rear_ratio.is_finite()
    {
        return 0.0;
    }
    let average = (rear_ratio + front_ratio) / 2.0;
    ((rear_ratio - front_ratio) / average) * 100.0
}

/// Runs the drivetrain math and keeps the most recent [`CalculationResult`].
///
/// Each call produces a fresh snapshot from the inputs it is given; nothing
/// carries over from earlier calls except that [`RatioEngine::compute_speeds`]
/// reads the final ratios of the snapshot it is extending.
#[derive(Debug, Clone, Default)]
pub struct RatioEngine {
    last: CalculationResult,
}

impl RatioEngine {
    pub fn new() -> RatioEngine {
        RatioEngine::default()
    }

    /// Most recent snapshot. All fields are unset until a compute call runs.
    pub fn last_result(&self) -> &CalculationResult {
        &self.last
    }

    /// Derives motor ratio, final drive ratios, and overdrive percentage,
    /// replacing the previous snapshot entirely.
    ///
    /// The motor ratio only needs tooth counts. The finals additionally need
    /// the transmission and both axles to resolve in `catalog`; when any
    /// lookup fails they are left unset rather than guessed.
    pub fn compute_ratios(
        &mut self,
        catalog: &HardwareCatalog,
        params: &DrivetrainParameters,
    ) -> CalculationResult {
        let motor = motor_ratio(
            params.spur_teeth.unwrap_or(0),
            params.pinion_teeth.unwrap_or(0),
        );
        self.last = CalculationResult {
            motor_ratio: (motor > 0.0).then_some(motor),
            ..CalculationResult::default()
        };

        let transmission = params
            .transmission_name
            .as_deref()
            .and_then(|name| catalog.transmission(name));
        let front_axle = params
            .front_axle_name
            .as_deref()
            .and_then(|name| catalog.axle(name));
        let rear_axle = params
            .rear_axle_name
            .as_deref()
            .and_then(|name| catalog.axle(name));
        let (Some(transmission), Some(front_axle), Some(rear_axle)) =
            (transmission, front_axle, rear_axle)
        else {
            debug!("hardware lookup incomplete, final ratios left unset");
            return self.last;
        };
        if motor <= 0.0 {
            return self.last;
        }

        let (front_reduction, rear_reduction) = if params.reverse_transmission {
            (transmission.rear, transmission.front)
        } else {
            (transmission.front, transmission.rear)
        };
        let final_front = motor * front_reduction * front_axle.ratio;
        let final_rear = motor * rear_reduction * rear_axle.ratio;

        self.last.final_front_ratio = Some(final_front);
        self.last.final_rear_ratio = Some(final_rear);
        self.last.overdrive_percentage = Some(overdrive_percentage(final_front, final_rear));
        self.last
    }

    /// Estimates free-running wheel speeds in MPH from motor KV, battery
    /// voltage, and tire diameter, extending the current snapshot.
    ///
    /// Needs both final ratios already computed plus a positive KV, voltage,
    /// and tire size; otherwise the speeds are left unset. Call after
    /// [`RatioEngine::compute_ratios`].
    pub fn compute_speeds(&mut self, params: &DrivetrainParameters) -> CalculationResult {
        self.last.front_speed = None;
        self.last.rear_speed = None;

        let motor_kv = params.motor_kv.unwrap_or(0.0);
        let max_voltage = params.max_voltage.unwrap_or(0.0);
        let tire_size = params.tire_size.unwrap_or(0.0);
        let final_front = self.last.final_front_ratio.unwrap_or(0.0);
        let final_rear = self.last.final_rear_ratio.unwrap_or(0.0);
        if motor_kv <= 0.0
            || max_voltage <= 0.0
            || tire_size <= 0.0
            || final_front <= 0.0
            || final_rear <= 0.0
        {
            debug!("speed inputs incomplete, wheel speeds left unset");
            return self.last;
        }

        let circumference = PI * params.tire_size_unit.to_inches(tire_size);
        let motor_rpm = motor_kv * max_voltage;
        self.last.front_speed = Some(wheel_speed_mph(motor_rpm, final_front, circumference));
        self.last.rear_speed = Some(wheel_speed_mph(motor_rpm, final_rear, circumference));
        self.last
    }

    /// Full pass: ratios first, then speeds on top of them.
    pub fn calculate_all(
        &mut self,
        catalog: &HardwareCatalog,
        params: &DrivetrainParameters,
    ) -> CalculationResult {
        self.compute_ratios(catalog, params);
        self.compute_speeds(params)
    }
}

fn wheel_speed_mph(motor_rpm: f64, final_ratio: f64, circumference_inches: f64) -> f64 {
    let wheel_rpm = motor_rpm / final_ratio;
    (wheel_rpm * circumference_inches * MINUTES_PER_HOUR) / (INCHES_PER_FOOT * FEET_PER_MILE)
}
