// Embassy spawned tasks: battery estimator, battery-level reporting,
// boot-mode watch
//
//   • `battery_task`           owns the estimator (ADC + charge line),
//                              runs one cycle every 100 ms on an
//                              absolute-deadline Ticker and publishes
//                              the snapshot into BATTERY.
//
//   • `battery_report_task`    every 5 s forwards the smoothed
//                              percentage to BATTERY_LEVEL for the HID
//                              battery-level field.
//
//   • `mode_watch_task`        re-reads the boot-mode straps every
//                              100 ms and resets the chip when they
//                              change, so the new personality boots
//                              from scratch.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use log::{error, info};

use battery_soc::StatusCell;

use crate::drivers::battery::{BatteryEstimator, ESTIMATOR};
use crate::drivers::mode::ModeStraps;

// ═════════════════════════════════════════════════════════════════════════
// Battery estimator task
// ═════════════════════════════════════════════════════════════════════════

/// Latest battery snapshot. Written only by [`battery_task`]; any task
/// may read it with [`StatusCell::snapshot`].
pub static BATTERY: StatusCell = StatusCell::new();

/// The battery estimator task.
///
/// A [`Ticker`] schedules each wake at the previous deadline plus the
/// period, so time spent sampling never accumulates as drift. The first
/// cycle runs immediately to seed the average before anyone reads it.
///
/// A sampling fault is not recoverable here: log it and panic, and the
/// panic handler resets the device.
#[embassy_executor::task]
pub async fn battery_task(mut estimator: BatteryEstimator) -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(ESTIMATOR.period_ms));

    loop {
        if let Err(e) = estimator.step_into(&BATTERY) {
            error!("battery: {}", e);
            panic!("battery sampling fault");
        }
        ticker.next().await;
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Battery-level reporting task
// ═════════════════════════════════════════════════════════════════════════

/// Smoothed battery percentage for the HID layer. `Signal` overwrites
/// stale values; the consumer only needs the most recent one.
pub static BATTERY_LEVEL: Signal<CriticalSectionRawMutex, u8> = Signal::new();

const REPORT_INTERVAL_SECS: u64 = 5;

#[embassy_executor::task]
pub async fn battery_report_task() -> ! {
    let mut ticker = Ticker::every(Duration::from_secs(REPORT_INTERVAL_SECS));

    loop {
        ticker.next().await;

        // Nothing to report until the estimator has completed a cycle.
        if let Some(level) = BATTERY.battery_level() {
            BATTERY_LEVEL.signal(level);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Boot-mode watch task
// ═════════════════════════════════════════════════════════════════════════

const MODE_POLL_MS: u64 = 100;

#[embassy_executor::task]
pub async fn mode_watch_task(straps: ModeStraps) -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(MODE_POLL_MS));

    loop {
        ticker.next().await;

        let mode = straps.read();
        if mode != straps.current() {
            info!("mode: {} -> {}, restarting", straps.current(), mode);
            esp_hal::system::software_reset();
        }
    }
}
