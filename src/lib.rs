// Firmware for the USB/BLE keypad (ESP32-S3)

#![no_std]

pub mod board;
pub mod drivers;
pub mod kernel;
