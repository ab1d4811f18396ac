// battery-soc: no_std battery state-of-charge estimation.
// filter:    trimmed-mean ADC burst with resistor-divider compensation
// curve:     knot tables, binary-search bracket, Q8 interpolation
// curves:    built-in Li-ion tables for both board variants
// charge:    charge-detect input (active low) and the null detector
// ema:       Q8 exponential smoothing with cold-start seeding
// status:    single-writer battery snapshot shared across tasks
// config:    estimator parameters and per-board presets
// estimator: one pipeline cycle (classify, sample, lookup, smooth)

#![cfg_attr(not(test), no_std)]

pub mod charge;
pub mod config;
pub mod curve;
pub mod curves;
pub mod ema;
pub mod estimator;
pub mod filter;
pub mod status;

pub use charge::{ActiveLow, ChargeDetect, NoChargeDetect};
pub use config::{CurvePolicy, EstimatorConfig};
pub use curve::{Curve, CurveError, Knot};
pub use ema::Ema;
pub use estimator::{Estimator, EstimatorError};
pub use filter::{Divider, MilliVoltSource, SampleFilter};
pub use status::{BatteryStatus, StatusCell};
