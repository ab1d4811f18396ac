//! Shared battery snapshot.
//!
//! One task writes, any task reads. The whole [`BatteryStatus`] is swapped
//! under a single short critical section, so a reader never pairs the
//! voltage of one cycle with the percentage of the next. There is no
//! reader/writer lock and no waiting.

use core::cell::Cell;

use critical_section::Mutex;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatteryStatus {
    /// Filtered cell voltage of the latest cycle.
    pub last_millivolts: u16,
    /// Smoothed percentage in Q8 (percent * 256).
    pub ema_q8: u16,
    /// `ema_q8` rounded to a whole percent, 0-100.
    pub average_percent: u8,
    /// Charge-detect level; always false on single-curve boards.
    pub is_charging: bool,
    /// False until the first cycle completes.
    pub initialized: bool,
}

impl BatteryStatus {
    pub const ZERO: Self = Self {
        last_millivolts: 0,
        ema_q8: 0,
        average_percent: 0,
        is_charging: false,
        initialized: false,
    };
}

pub struct StatusCell {
    inner: Mutex<Cell<BatteryStatus>>,
}

impl Default for StatusCell {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusCell {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(BatteryStatus::ZERO)),
        }
    }

    pub fn publish(&self, status: BatteryStatus) {
        critical_section::with(|cs| self.inner.borrow(cs).set(status));
    }

    pub fn snapshot(&self) -> BatteryStatus {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }

    /// Percentage for a HID battery-level field, once a cycle has run.
    pub fn battery_level(&self) -> Option<u8> {
        let status = self.snapshot();
        status.initialized.then_some(status.average_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed_and_uninitialized() {
        let cell = StatusCell::new();
        assert_eq!(cell.snapshot(), BatteryStatus::ZERO);
        assert_eq!(cell.battery_level(), None);
    }

    #[test]
    fn publish_replaces_whole_snapshot() {
        static CELL: StatusCell = StatusCell::new();
        let status = BatteryStatus {
            last_millivolts: 3812,
            ema_q8: 57 * 256,
            average_percent: 57,
            is_charging: true,
            initialized: true,
        };
        CELL.publish(status);
        assert_eq!(CELL.snapshot(), status);
        assert_eq!(CELL.battery_level(), Some(57));
    }
}
