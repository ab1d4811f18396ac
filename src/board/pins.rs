//! GPIO |     Function     |      Notes
//! -----+------------------+----------------------------------
//!  2   | ADC1 CH1 Battery | 100K/100K divider, reads 1/2 cell voltage
//! 38   | Charge detect    | Charger STAT, active LOW, internal pullup
//! 40   | MODE3 strap      | Metronome, internal pulldown
//! 41   | MODE2 strap      | Macro pad, internal pulldown
//! 42   | MODE1 strap      | Keyboard, internal pulldown

// ----- Battery -----
pub const BATTERY_ADC: u8 = 2; // GPIO2 - voltage divider, 1/2 of cell voltage
pub const CHARGE_DETECT: u8 = 38; // Digital, active LOW (not fitted on variant B)

// ----- Boot-mode straps (first high wins) -----
pub const MODE1: u8 = 42;
pub const MODE2: u8 = 41;
pub const MODE3: u8 = 40;
