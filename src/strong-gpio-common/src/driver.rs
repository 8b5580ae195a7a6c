//! Driver boundary.
//!
//! A [`Driver`] performs the actual hardware accesses. Each call takes a raw pin number that
//! has already been validated and reports a [`Status`]. Drivers are in charge of translating
//! the closed parameter sets of [`crate::gpio`] into their own numeric encoding.

use crate::{
    gpio::{Direction, Level, PullMode, WakeupIntrType},
    Error,
};

/// Status code returned by a driver call.
///
/// Uses the same encoding as ESP-IDF's `esp_err_t`; only success and non-success are ever
/// told apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status(i32);

impl Status {
    /// Success.
    pub const OK: Self = Self(0);
    /// Generic failure.
    pub const FAIL: Self = Self(-1);
    /// The operation is not supported by the driver.
    pub const NOT_SUPPORTED: Self = Self(0x106);

    /// Wraps a raw status code.
    #[must_use]
    pub const fn from_raw(code: i32) -> Self {
        Self(code)
    }

    /// Returns the raw status code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Whether this status signals success.
    #[must_use]
    pub const fn is_ok(self) -> bool {
        self.0 == Self::OK.0
    }

    /// Turns a non-success status into [`Error::DriverFailure`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] wrapping `self` unless it is [`Status::OK`].
    pub fn into_result(self) -> Result<(), Error> {
        if self.is_ok() {
            Ok(())
        } else {
            crate::error!("gpio: driver call failed with status {}", self.0);
            Err(Error::DriverFailure(self))
        }
    }
}

/// Synchronous GPIO driver.
///
/// `pin` is always a pin number valid for the current target.
pub trait Driver {
    /// Resets the pin to its default, unconfigured electrical state.
    fn reset_pin(&mut self, pin: u32) -> Status;

    /// Commits the pin to a direction.
    fn set_direction(&mut self, pin: u32, direction: Direction) -> Status;

    /// Sets the output level of the pin.
    fn set_level(&mut self, pin: u32, level: Level) -> Status;

    /// Reads the input level of the pin.
    fn level(&self, pin: u32) -> Level;

    /// Configures the pull resistors of the pin.
    fn set_pull_mode(&mut self, pin: u32, mode: PullMode) -> Status;

    /// Arms the pin as light-sleep wakeup source.
    fn wakeup_enable(&mut self, pin: u32, intr_type: WakeupIntrType) -> Status;

    /// Disarms the pin as wakeup source.
    fn wakeup_disable(&mut self, pin: u32) -> Status;

    /// Latches the current state of the pin.
    fn hold_enable(&mut self, pin: u32) -> Status;

    /// Releases the latch set by [`Driver::hold_enable()`].
    fn hold_disable(&mut self, pin: u32) -> Status;

    /// Sets the drive capability of the pin to the raw `strength` selector.
    fn set_drive_capability(&mut self, pin: u32, strength: u32) -> Status;

    /// Returns the raw drive capability selector currently applied to the pin.
    ///
    /// # Errors
    ///
    /// Returns the driver status if the drive capability could not be read.
    fn drive_capability(&self, pin: u32) -> Result<u32, Status>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_into_result() {
        assert_eq!(Status::OK.into_result(), Ok(()));
        assert_eq!(
            Status::from_raw(0x103).into_result(),
            Err(Error::DriverFailure(Status::from_raw(0x103)))
        );
        assert!(!Status::FAIL.is_ok());
    }
}
