// Estimator parameters and per-board presets
//
// Everything here is fixed at build time. CHARGE_AWARE is the board with
// a charger status line and two curves; DISCHARGE_ONLY has no status line
// and one dense discharge curve. Both sample through a 2:1 divider every
// 100 ms.

use crate::curve::Curve;
use crate::curves;
use crate::filter::{DEFAULT_SAMPLES, Divider};

/// Estimator cadence shared by both boards.
pub const PERIOD_MS: u64 = 100;

/// Which curve the estimator looks up each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurvePolicy {
    Single(Curve),
    DualWithChargeDetect { charging: Curve, discharging: Curve },
}

impl CurvePolicy {
    pub const fn uses_charge_detect(&self) -> bool {
        matches!(self, CurvePolicy::DualWithChargeDetect { .. })
    }

    pub const fn select(&self, charging: bool) -> &Curve {
        match self {
            CurvePolicy::Single(curve) => curve,
            CurvePolicy::DualWithChargeDetect { charging: c, .. } if charging => c,
            CurvePolicy::DualWithChargeDetect { discharging, .. } => discharging,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorConfig {
    pub period_ms: u64,
    pub samples: usize,
    pub divider: Divider,
    pub policy: CurvePolicy,
}

pub const CHARGE_AWARE: EstimatorConfig = EstimatorConfig {
    period_ms: PERIOD_MS,
    samples: DEFAULT_SAMPLES,
    divider: Divider::HALF,
    policy: CurvePolicy::DualWithChargeDetect {
        charging: curves::CHARGING,
        discharging: curves::DISCHARGING,
    },
};

pub const DISCHARGE_ONLY: EstimatorConfig = EstimatorConfig {
    period_ms: PERIOD_MS,
    samples: DEFAULT_SAMPLES,
    divider: Divider::HALF,
    policy: CurvePolicy::Single(curves::DISCHARGE_DENSE),
};
