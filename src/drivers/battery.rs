// Battery sense channel and estimator wiring
//
// GPIO2 reads the cell through a 100K/100K divider (2:1). ADC1 with
// 11dB attenuation and curve-fitted calibration returns pin millivolts;
// the estimator doubles them and maps the result onto the board's
// curve. A failed conversion is a hardware fault and ends in a reset.

use battery_soc::config::{self, EstimatorConfig};
use battery_soc::{Estimator, MilliVoltSource};

#[cfg(not(feature = "variant-b"))]
use battery_soc::ActiveLow;
#[cfg(not(feature = "variant-b"))]
use esp_hal::gpio::Input;

#[cfg(feature = "variant-b")]
use battery_soc::NoChargeDetect;

use crate::board::{BatteryAdcPin, BatteryAdcUnit, BatteryHw};

/// Charge-aware board: two curves picked by the charger status line.
#[cfg(not(feature = "variant-b"))]
pub const ESTIMATOR: EstimatorConfig = config::CHARGE_AWARE;
/// Single dense discharge curve, no charger status line.
#[cfg(feature = "variant-b")]
pub const ESTIMATOR: EstimatorConfig = config::DISCHARGE_ONLY;

#[cfg(not(feature = "variant-b"))]
pub type ChargeLine = ActiveLow<Input<'static>>;
#[cfg(feature = "variant-b")]
pub type ChargeLine = NoChargeDetect;

pub type BatteryEstimator = Estimator<BatteryAdc, ChargeLine>;

pub struct BatteryAdc {
    adc: BatteryAdcUnit,
    pin: BatteryAdcPin,
}

impl MilliVoltSource for BatteryAdc {
    type Error = ();

    #[inline]
    fn read_mv(&mut self) -> Result<u16, ()> {
        nb::block!(self.adc.read_oneshot(&mut self.pin))
    }
}

pub fn estimator(hw: BatteryHw) -> BatteryEstimator {
    let adc = BatteryAdc {
        adc: hw.adc,
        pin: hw.pin,
    };

    #[cfg(not(feature = "variant-b"))]
    let charge = ActiveLow::new(hw.charge);
    #[cfg(feature = "variant-b")]
    let charge = NoChargeDetect;

    Estimator::new(&ESTIMATOR, adc, charge)
}
