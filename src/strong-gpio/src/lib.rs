//! Type-checked GPIO configuration for ESP32-family MCUs.
//!
//! Hardware parameters are validated when they are constructed: a [`GpioNum`] or a
//! [`DriveStrength`] can only exist if the MCU being built for supports it, and [`PullMode`]
//! and [`WakeupIntrType`] are closed enums. Pins are then configured as [`Output`], [`Input`]
//! or [`OutputInput`] (open-drain), each only offering the operations meaningful for its
//! direction.
//!
//! ```no_run
//! use strong_gpio::{DriveConfig, DriveStrength, GpioNum, InputConfig, Input, Output, PullMode};
//!
//! # fn main() -> Result<(), strong_gpio::Error> {
//! let mut led = Output::new(GpioNum::new(4)?)?;
//! led.set_drive_strength(DriveStrength::STRONGEST)?;
//! led.set_high()?;
//!
//! let mut button = Input::new(GpioNum::new(9)?)?;
//! button.set_pull_mode(PullMode::PullUp)?;
//! let _pressed = button.is_low();
//! # Ok(())
//! # }
//! ```
//!
//! Outputs cannot be read:
//!
//! ```compile_fail
//! use strong_gpio::{InputConfig, Level, Output};
//!
//! fn read(output: &Output) -> Level {
//!     output.level()
//! }
//! ```
//!
//! and inputs cannot be driven:
//!
//! ```compile_fail
//! use strong_gpio::Input;
//!
//! fn drive(input: &mut Input) {
//!     let _ = input.set_high();
//! }
//! ```
//!
//! The MCU is selected by the build system through the `context` cfg, e.g.,
//! `--cfg context="esp32s3"`, which picks both the [capability table](capability::TARGET) and
//! the [driver](hal::Gpio).
//!
//! # Cargo features
#![doc = document_features::document_features!(feature_label = r#"<span class="stab portability"><code>{feature}</code></span>"#)]
#![cfg_attr(not(test), no_std)]
#![deny(clippy::pedantic)]
#![deny(missing_docs)]

mod gpio;
pub mod hal;
mod param;
pub mod strong;

#[cfg(test)]
mod test_driver;

pub use gpio::{DriveConfig, GpioConfig, Input, InputConfig, Output, OutputInput};
pub use param::{DriveStrength, GpioNum};
pub use strong_gpio_common::{
    capability, driver,
    gpio::{Direction, Level, PullMode, WakeupIntrType},
    Error,
};
