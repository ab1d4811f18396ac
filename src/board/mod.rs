//! Keypad Board Support Package (BSP)
//!
//! Maps the battery sense divider, the charger status line and the
//! boot-mode straps to named bundles so drivers never touch GPIO numbers.
//! See [`pins`] for the wiring table.

pub mod pins;

use esp_hal::{
    Blocking,
    analog::adc::{Adc, AdcCalCurve, AdcConfig, AdcPin, Attenuation},
    gpio::{Input, InputConfig, Pull},
    peripherals::{ADC1, GPIO2, Peripherals},
};
use log::info;

// Type Aliases
pub type BatteryAdcUnit = Adc<'static, ADC1<'static>, Blocking>;
pub type BatteryAdcPin = AdcPin<GPIO2<'static>, ADC1<'static>, AdcCalCurve<ADC1<'static>>>;

// Hardware Bundles
/// Battery sense hardware: calibrated ADC channel plus charger status.
pub struct BatteryHw {
    pub adc: BatteryAdcUnit,
    pub pin: BatteryAdcPin,
    #[cfg(not(feature = "variant-b"))]
    pub charge: Input<'static>,
}

/// Boot-mode strap inputs, in priority order MODE1, MODE2, MODE3.
pub struct ModeHw {
    pub straps: [Input<'static>; 3],
}

/// Complete board hardware, ready for driver initialization.
pub struct Board {
    pub battery: BatteryHw,
    pub mode: ModeHw,
}

impl Board {
    pub fn init(p: Peripherals) -> Self {
        let mut adc_cfg = AdcConfig::new();

        // 11dB attenuation for the full 0-2.5V pin range, curve-fitted calibration
        let pin = adc_cfg.enable_pin_with_cal::<_, AdcCalCurve<ADC1>>(p.GPIO2, Attenuation::_11dB);
        let adc = Adc::new(p.ADC1, adc_cfg);

        #[cfg(not(feature = "variant-b"))]
        let charge = Input::new(p.GPIO38, InputConfig::default().with_pull(Pull::Up));

        let straps = [
            Input::new(p.GPIO42, InputConfig::default().with_pull(Pull::Down)),
            Input::new(p.GPIO41, InputConfig::default().with_pull(Pull::Down)),
            Input::new(p.GPIO40, InputConfig::default().with_pull(Pull::Down)),
        ];

        info!(
            "board: battery GPIO{}, charge GPIO{}{}, straps GPIO{}/{}/{}",
            pins::BATTERY_ADC,
            pins::CHARGE_DETECT,
            if cfg!(feature = "variant-b") { " (unused)" } else { "" },
            pins::MODE1,
            pins::MODE2,
            pins::MODE3
        );

        Board {
            battery: BatteryHw {
                adc,
                pin,
                #[cfg(not(feature = "variant-b"))]
                charge,
            },
            mode: ModeHw { straps },
        }
    }
}
