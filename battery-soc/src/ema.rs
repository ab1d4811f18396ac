//! Q8 exponential moving average of the state of charge.
//!
//! `ema_q8 += (target - ema_q8) >> SMOOTHING_SHIFT`, an EMA with decay
//! 1/16 per update: about 16 cycles time constant, 1.6 s at 100 ms.
//! The first update seeds the average exactly so boot shows the real
//! charge instead of ramping up from zero.

pub const SMOOTHING_SHIFT: u32 = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ema {
    q8: u16,
    average: u8,
    initialized: bool,
}

impl Ema {
    pub const fn new() -> Self {
        Self {
            q8: 0,
            average: 0,
            initialized: false,
        }
    }

    /// Feed one raw percentage (0-100); returns the smoothed percentage.
    pub fn update(&mut self, raw_pct: u8) -> u8 {
        let target = (raw_pct as i32) << 8;

        if !self.initialized {
            self.q8 = target as u16;
            self.average = raw_pct;
            self.initialized = true;
            return raw_pct;
        }

        // arithmetic shift: negative deltas round toward -inf
        let delta = target - self.q8 as i32;
        self.q8 = (self.q8 as i32 + (delta >> SMOOTHING_SHIFT)) as u16;
        self.average = ((self.q8 as u32 + 128) >> 8) as u8;
        self.average
    }

    pub const fn q8(&self) -> u16 {
        self.q8
    }

    pub const fn average(&self) -> u8 {
        self.average
    }

    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }
}
