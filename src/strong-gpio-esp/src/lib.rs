//! GPIO driver for Espressif MCUs running ESP-IDF.
//!
//! The functions of ESP-IDF's `driver/gpio.h` are linked in by the ESP-IDF build; this crate
//! only declares them and translates between their encodings and the HAL-agnostic types.

#![no_std]
#![deny(clippy::pedantic)]
#![deny(missing_docs)]

use core::ffi::c_int;

use strong_gpio_common::{
    driver::{Driver, Status},
    gpio::{Direction, Level, PullMode, WakeupIntrType},
};

mod sys {
    use core::ffi::{c_int, c_uint};

    pub type EspErr = c_int;
    pub type GpioNum = c_int;

    // `gpio_mode_t`
    pub const GPIO_MODE_INPUT: c_uint = 1 << 0;
    pub const GPIO_MODE_OUTPUT: c_uint = 1 << 1;
    pub const GPIO_MODE_INPUT_OUTPUT_OD: c_uint = (1 << 0) | (1 << 1) | (1 << 2);

    // `gpio_pull_mode_t`
    pub const GPIO_PULLUP_ONLY: c_uint = 0;
    pub const GPIO_PULLDOWN_ONLY: c_uint = 1;
    pub const GPIO_FLOATING: c_uint = 3;

    // `gpio_int_type_t`
    pub const GPIO_INTR_LOW_LEVEL: c_uint = 4;
    pub const GPIO_INTR_HIGH_LEVEL: c_uint = 5;

    extern "C" {
        pub fn gpio_reset_pin(gpio_num: GpioNum) -> EspErr;
        pub fn gpio_set_direction(gpio_num: GpioNum, mode: c_uint) -> EspErr;
        pub fn gpio_set_level(gpio_num: GpioNum, level: u32) -> EspErr;
        pub fn gpio_get_level(gpio_num: GpioNum) -> c_int;
        pub fn gpio_set_pull_mode(gpio_num: GpioNum, pull: c_uint) -> EspErr;
        pub fn gpio_wakeup_enable(gpio_num: GpioNum, intr_type: c_uint) -> EspErr;
        pub fn gpio_wakeup_disable(gpio_num: GpioNum) -> EspErr;
        pub fn gpio_hold_en(gpio_num: GpioNum) -> EspErr;
        pub fn gpio_hold_dis(gpio_num: GpioNum) -> EspErr;
        pub fn gpio_set_drive_capability(gpio_num: GpioNum, strength: c_uint) -> EspErr;
        pub fn gpio_get_drive_capability(gpio_num: GpioNum, strength: *mut c_uint) -> EspErr;
    }
}

/// The ESP-IDF GPIO driver.
#[derive(Debug, Default, Copy, Clone)]
pub struct Gpio;

// GPIO numbers are validated against the capability table before reaching the driver, so they
// are always small enough.
#[expect(clippy::cast_possible_wrap)]
fn gpio_num(pin: u32) -> sys::GpioNum {
    pin as sys::GpioNum
}

fn from_direction(direction: Direction) -> core::ffi::c_uint {
    match direction {
        Direction::Output => sys::GPIO_MODE_OUTPUT,
        Direction::Input => sys::GPIO_MODE_INPUT,
        Direction::OutputInputOpenDrain => sys::GPIO_MODE_INPUT_OUTPUT_OD,
    }
}

fn from_pull_mode(mode: PullMode) -> core::ffi::c_uint {
    match mode {
        PullMode::Floating => sys::GPIO_FLOATING,
        PullMode::PullUp => sys::GPIO_PULLUP_ONLY,
        PullMode::PullDown => sys::GPIO_PULLDOWN_ONLY,
    }
}

fn from_wakeup_intr_type(intr_type: WakeupIntrType) -> core::ffi::c_uint {
    match intr_type {
        WakeupIntrType::LowLevel => sys::GPIO_INTR_LOW_LEVEL,
        WakeupIntrType::HighLevel => sys::GPIO_INTR_HIGH_LEVEL,
    }
}

impl Driver for Gpio {
    fn reset_pin(&mut self, pin: u32) -> Status {
        // SAFETY: plain FFI call on a valid GPIO number.
        Status::from_raw(unsafe { sys::gpio_reset_pin(gpio_num(pin)) })
    }

    fn set_direction(&mut self, pin: u32, direction: Direction) -> Status {
        let mode = from_direction(direction);
        // SAFETY: plain FFI call on a valid GPIO number and mode.
        Status::from_raw(unsafe { sys::gpio_set_direction(gpio_num(pin), mode) })
    }

    fn set_level(&mut self, pin: u32, level: Level) -> Status {
        let level = u32::from(bool::from(level));
        // SAFETY: plain FFI call on a valid GPIO number.
        Status::from_raw(unsafe { sys::gpio_set_level(gpio_num(pin), level) })
    }

    fn level(&self, pin: u32) -> Level {
        // SAFETY: plain FFI call on a valid GPIO number.
        let level: c_int = unsafe { sys::gpio_get_level(gpio_num(pin)) };
        Level::from(level != 0)
    }

    fn set_pull_mode(&mut self, pin: u32, mode: PullMode) -> Status {
        let pull = from_pull_mode(mode);
        // SAFETY: plain FFI call on a valid GPIO number and pull mode.
        Status::from_raw(unsafe { sys::gpio_set_pull_mode(gpio_num(pin), pull) })
    }

    fn wakeup_enable(&mut self, pin: u32, intr_type: WakeupIntrType) -> Status {
        let intr_type = from_wakeup_intr_type(intr_type);
        // SAFETY: plain FFI call on a valid GPIO number and level interrupt type.
        Status::from_raw(unsafe { sys::gpio_wakeup_enable(gpio_num(pin), intr_type) })
    }

    fn wakeup_disable(&mut self, pin: u32) -> Status {
        // SAFETY: plain FFI call on a valid GPIO number.
        Status::from_raw(unsafe { sys::gpio_wakeup_disable(gpio_num(pin)) })
    }

    fn hold_enable(&mut self, pin: u32) -> Status {
        // SAFETY: plain FFI call on a valid GPIO number.
        Status::from_raw(unsafe { sys::gpio_hold_en(gpio_num(pin)) })
    }

    fn hold_disable(&mut self, pin: u32) -> Status {
        // SAFETY: plain FFI call on a valid GPIO number.
        Status::from_raw(unsafe { sys::gpio_hold_dis(gpio_num(pin)) })
    }

    fn set_drive_capability(&mut self, pin: u32, strength: u32) -> Status {
        // SAFETY: plain FFI call on a valid GPIO number and drive capability.
        Status::from_raw(unsafe { sys::gpio_set_drive_capability(gpio_num(pin), strength) })
    }

    fn drive_capability(&self, pin: u32) -> Result<u32, Status> {
        let mut strength = 0;
        // SAFETY: `strength` is valid for writes for the duration of the call.
        let status = Status::from_raw(unsafe {
            sys::gpio_get_drive_capability(gpio_num(pin), &raw mut strength)
        });

        if status.is_ok() {
            Ok(strength)
        } else {
            Err(status)
        }
    }
}
