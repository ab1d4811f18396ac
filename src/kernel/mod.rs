// Embassy tasks on the esp-rtos executor
// Single core, cooperative. The CPU idles between ticker deadlines.
//
// BATTERY is the shared snapshot cell: one writer, lock-free readers.
// BATTERY_LEVEL carries the reported percentage to the HID layer.

pub mod tasks;

pub use tasks::{BATTERY, BATTERY_LEVEL};
