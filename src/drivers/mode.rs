//! Boot-mode straps.
//!
//! Three pulled-down inputs select the device personality. The first
//! strap held high wins (MODE1, MODE2, MODE3); with none high the
//! previous mode stays, which is `Keyboard` at power-on.

use esp_hal::gpio::Input;

use crate::board::ModeHw;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootMode {
    Keyboard,
    Macro,
    Metronome,
}

impl BootMode {
    pub const fn name(self) -> &'static str {
        match self {
            BootMode::Keyboard => "Keyboard",
            BootMode::Macro => "Macro",
            BootMode::Metronome => "Metronome",
        }
    }
}

impl core::fmt::Display for BootMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Strap levels in priority order to a mode; `None` when no strap is high.
pub const fn decode_straps(levels: [bool; 3]) -> Option<BootMode> {
    match levels {
        [true, _, _] => Some(BootMode::Keyboard),
        [false, true, _] => Some(BootMode::Macro),
        [false, false, true] => Some(BootMode::Metronome),
        [false, false, false] => None,
    }
}

pub struct ModeStraps {
    pins: [Input<'static>; 3],
    current: BootMode,
}

impl ModeStraps {
    /// Latch the mode the device boots into.
    pub fn new(hw: ModeHw) -> Self {
        let mut straps = Self {
            pins: hw.straps,
            current: BootMode::Keyboard,
        };
        straps.current = straps.read();
        straps
    }

    /// Mode the straps select right now, falling back to the latched one.
    pub fn read(&self) -> BootMode {
        let levels = [
            self.pins[0].is_high(),
            self.pins[1].is_high(),
            self.pins[2].is_high(),
        ];
        decode_straps(levels).unwrap_or(self.current)
    }

    pub fn current(&self) -> BootMode {
        self.current
    }
}
