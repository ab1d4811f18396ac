//! Charge-detect input.
//!
//! The charger pulls its status line low while current flows into the
//! cell. The level is read once per estimator cycle with no debounce;
//! the 100 ms cadence and the EMA downstream absorb glitches.

use core::convert::Infallible;

use embedded_hal::digital::InputPin;

pub trait ChargeDetect {
    type Error: core::fmt::Debug;

    fn is_charging(&mut self) -> Result<bool, Self::Error>;
}

impl<T: ChargeDetect + ?Sized> ChargeDetect for &mut T {
    type Error = T::Error;

    #[inline]
    fn is_charging(&mut self) -> Result<bool, Self::Error> {
        (**self).is_charging()
    }
}

/// Charger status pin, asserted low while charging.
pub struct ActiveLow<P>(P);

impl<P: InputPin> ActiveLow<P> {
    pub fn new(pin: P) -> Self {
        Self(pin)
    }

    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P: InputPin> ChargeDetect for ActiveLow<P> {
    type Error = P::Error;

    #[inline]
    fn is_charging(&mut self) -> Result<bool, Self::Error> {
        self.0.is_low()
    }
}

/// Boards without a charger status line; never charging.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoChargeDetect;

impl ChargeDetect for NoChargeDetect {
    type Error = Infallible;

    #[inline]
    fn is_charging(&mut self) -> Result<bool, Infallible> {
        Ok(false)
    }
}
