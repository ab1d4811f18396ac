// keypad-fw entry point
//
// Boot sequence: logger -> clocks -> esp-rtos timer -> board -> tasks
//
// The battery estimator, battery-level reporter and boot-mode watcher
// run as Embassy tasks. Key scanning, HID transports and the LED
// renderer live outside this crate; the main task waits on the
// reported battery level in their place and logs it.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use log::{debug, info};

use keypad_fw::board::Board;
use keypad_fw::drivers::battery;
use keypad_fw::drivers::mode::ModeStraps;
use keypad_fw::kernel::tasks::{battery_report_task, battery_task, mode_watch_task};
use keypad_fw::kernel::{BATTERY, BATTERY_LEVEL};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting...");

    let timg0 = TimerGroup::new(unsafe { peripherals.TIMG0.clone_unchecked() });
    esp_rtos::start(timg0.timer0);
    info!("timer initialized.");

    let board = Board::init(peripherals);
    let straps = ModeStraps::new(board.mode);
    info!("mode: {}", straps.current());

    let estimator = battery::estimator(board.battery);
    info!(
        "battery: {} curve, {} samples every {}ms",
        if battery::ESTIMATOR.policy.uses_charge_detect() {
            "charge-aware"
        } else {
            "single"
        },
        battery::ESTIMATOR.samples,
        battery::ESTIMATOR.period_ms
    );

    spawner.spawn(battery_task(estimator).unwrap());
    spawner.spawn(battery_report_task().unwrap());
    spawner.spawn(mode_watch_task(straps).unwrap());
    info!("kernel ready.");

    loop {
        let level = BATTERY_LEVEL.wait().await;
        let status = BATTERY.snapshot();
        debug!(
            "battery: {}% ({}mV{})",
            level,
            status.last_millivolts,
            if status.is_charging { ", charging" } else { "" }
        );
    }
}
