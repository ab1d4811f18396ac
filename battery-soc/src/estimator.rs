//! One battery estimator cycle.
//!
//! [`Estimator::step`] reads the charge-detect line (charge-aware boards
//! only), samples a filtered cell voltage, looks the voltage up on the
//! curve the policy selects and feeds the percentage through the EMA.
//! The caller owns the cadence and decides where the snapshot goes; see
//! [`Estimator::step_into`] for the usual publish path.

use core::fmt;

use log::{info, trace};

use crate::charge::ChargeDetect;
use crate::config::{CurvePolicy, EstimatorConfig};
use crate::ema::Ema;
use crate::filter::{MilliVoltSource, SampleFilter};
use crate::status::{BatteryStatus, StatusCell};

/// Hardware fault during a cycle. Not recoverable by the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorError<A, C> {
    Adc(A),
    ChargeDetect(C),
}

impl<A: fmt::Debug, C: fmt::Debug> fmt::Display for EstimatorError<A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimatorError::Adc(e) => write!(f, "adc read failed: {:?}", e),
            EstimatorError::ChargeDetect(e) => write!(f, "charge-detect read failed: {:?}", e),
        }
    }
}

pub type StepResult<S, D> = Result<
    BatteryStatus,
    EstimatorError<<S as MilliVoltSource>::Error, <D as ChargeDetect>::Error>,
>;

pub struct Estimator<S, D> {
    source: S,
    detect: D,
    filter: SampleFilter,
    policy: CurvePolicy,
    ema: Ema,
    charging: bool,
}

impl<S: MilliVoltSource, D: ChargeDetect> Estimator<S, D> {
    pub fn new(config: &EstimatorConfig, source: S, detect: D) -> Self {
        Self {
            source,
            detect,
            filter: SampleFilter::new(config.samples, config.divider),
            policy: config.policy,
            ema: Ema::new(),
            charging: false,
        }
    }

    pub fn step(&mut self) -> StepResult<S, D> {
        let charging = if self.policy.uses_charge_detect() {
            self.detect
                .is_charging()
                .map_err(EstimatorError::ChargeDetect)?
        } else {
            false
        };

        let mv = self.filter.read(&mut self.source).map_err(EstimatorError::Adc)?;
        let raw_pct = self.policy.select(charging).lookup(mv);

        let cold = !self.ema.is_initialized();
        let average = self.ema.update(raw_pct);

        if cold {
            info!(
                "battery: first reading {}mV {}%{}",
                mv,
                average,
                if charging { " (charging)" } else { "" }
            );
        } else if charging != self.charging {
            info!(
                "battery: {} at {}mV",
                if charging { "charging" } else { "discharging" },
                mv
            );
        }
        self.charging = charging;

        trace!("battery: {}mV raw {}% avg {}%", mv, raw_pct, average);

        Ok(BatteryStatus {
            last_millivolts: mv,
            ema_q8: self.ema.q8(),
            average_percent: average,
            is_charging: charging,
            initialized: true,
        })
    }

    /// Run one cycle and publish the result to `cell`.
    pub fn step_into(&mut self, cell: &StatusCell) -> StepResult<S, D> {
        let status = self.step()?;
        cell.publish(status);
        Ok(status)
    }

    pub fn ema(&self) -> &Ema {
        &self.ema
    }

    pub fn policy(&self) -> &CurvePolicy {
        &self.policy
    }
}
