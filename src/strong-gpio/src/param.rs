//! Validated GPIO parameters.

use strong_gpio_common::{
    capability::{self, CapabilityTable},
    Error,
};

use crate::strong::define_strong_value;

define_strong_value! {
    /// Number of a GPIO usable on the current target.
    ///
    /// Holding a `GpioNum` guarantees the number has passed [`capability::is_valid_pin()`]. It
    /// does not give exclusive access to the pin: nothing prevents two `GpioNum`s from
    /// referring to the same physical pin.
    pub struct GpioNum(u32);
}

impl GpioNum {
    /// Validates `pin` against the capabilities of the current target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the target has no usable GPIO with this number.
    pub const fn new(pin: u32) -> Result<Self, Error> {
        Self::with_capabilities(pin, &capability::TARGET)
    }

    /// Validates `pin` against `capabilities` instead of the whole MCU, e.g., a board table
    /// excluding pins wired to on-board flash.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `capabilities` rejects the number.
    pub const fn with_capabilities(
        pin: u32,
        capabilities: &CapabilityTable,
    ) -> Result<Self, Error> {
        match capabilities.is_valid_pin(pin) {
            Ok(()) => Ok(Self(pin)),
            Err(err) => Err(err),
        }
    }
}

impl TryFrom<u32> for GpioNum {
    type Error = Error;

    fn try_from(pin: u32) -> Result<Self, Self::Error> {
        Self::new(pin)
    }
}

define_strong_value! {
    /// Drive strength of an output.
    ///
    /// The raw value is the hardware drive-capability selector. On Espressif MCUs:
    ///
    /// | Constant                        | Selector | Current |
    /// | ------------------------------- | -------- | ------- |
    /// | [`WEAK`](Self::WEAK)            | 0        | 5 mA    |
    /// | [`LESS_WEAK`](Self::LESS_WEAK)  | 1        | 10 mA   |
    /// | [`MEDIUM`](Self::MEDIUM)        | 2        | 20 mA   |
    /// | [`STRONGEST`](Self::STRONGEST)  | 3        | 40 mA   |
    pub struct DriveStrength(u32);
}

impl DriveStrength {
    /// Weakest drive strength.
    pub const WEAK: Self = Self::from_selector(0);
    /// Second weakest drive strength.
    pub const LESS_WEAK: Self = Self::from_selector(1);
    /// Medium drive strength.
    pub const MEDIUM: Self = Self::from_selector(2);
    /// Strongest drive strength.
    pub const STRONGEST: Self = Self::from_selector(3);
    /// Reset value of the drive strength, same as [`MEDIUM`](Self::MEDIUM).
    pub const DEFAULT: Self = Self::MEDIUM;

    // Only evaluated in const context, where a failed assert is a compile error.
    const fn from_selector(strength: u32) -> Self {
        assert!(
            capability::TARGET.is_valid_drive_strength(strength).is_ok(),
            "drive strength selector not supported by this MCU"
        );
        Self(strength)
    }

    /// Validates `strength` against the capabilities of the current target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the selector is out of range.
    pub const fn new(strength: u32) -> Result<Self, Error> {
        match capability::is_valid_drive_strength(strength) {
            Ok(()) => Ok(Self(strength)),
            Err(err) => Err(err),
        }
    }

    // The driver only reports selectors defined by the hardware.
    pub(crate) const fn from_driver(strength: u32) -> Self {
        Self(strength)
    }
}

impl Default for DriveStrength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for DriveStrength {
    type Error = Error;

    fn try_from(strength: u32) -> Result<Self, Self::Error> {
        Self::new(strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strong::StrongValue;

    #[test]
    fn test_gpio_num_validity() {
        for pin in 0..64 {
            let result = GpioNum::new(pin);
            if pin < 40 && pin != 24 {
                assert_eq!(result.map(|num| num.get()), Ok(pin));
            } else {
                assert_eq!(result, Err(Error::InvalidArgument(pin)));
            }
        }
    }

    #[test]
    fn test_gpio_num_scenarios() {
        assert!(GpioNum::new(4).is_ok());
        assert_eq!(GpioNum::new(24), Err(Error::InvalidArgument(24)));
        assert_eq!(GpioNum::new(41), Err(Error::InvalidArgument(41)));
        assert_eq!(GpioNum::try_from(40), Err(Error::InvalidArgument(40)));
    }

    #[test]
    fn test_gpio_num_with_capabilities() {
        const BOARD: CapabilityTable = CapabilityTable {
            pin_count: 22,
            excluded_pins: &[11, 12, 13, 14, 15, 16, 17],
            drive_strength_count: 4,
        };

        assert!(GpioNum::with_capabilities(10, &BOARD).is_ok());
        assert_eq!(
            GpioNum::with_capabilities(12, &BOARD),
            Err(Error::InvalidArgument(12))
        );
        // Valid on the MCU itself.
        assert!(GpioNum::new(12).is_ok());
    }

    #[test]
    fn test_drive_strength_validity() {
        for strength in 0..4 {
            assert_eq!(DriveStrength::new(strength).map(|s| s.get()), Ok(strength));
        }
        assert_eq!(DriveStrength::new(4), Err(Error::InvalidArgument(4)));
        assert_eq!(DriveStrength::try_from(100), Err(Error::InvalidArgument(100)));
    }

    #[test]
    fn test_drive_strength_constants() {
        assert_eq!(DriveStrength::DEFAULT, DriveStrength::MEDIUM);
        assert_eq!(DriveStrength::default(), DriveStrength::MEDIUM);
        assert_eq!(DriveStrength::new(0), Ok(DriveStrength::WEAK));
        assert_eq!(DriveStrength::new(1), Ok(DriveStrength::LESS_WEAK));
        assert_eq!(DriveStrength::new(3), Ok(DriveStrength::STRONGEST));
        assert_ne!(DriveStrength::WEAK, DriveStrength::STRONGEST);
    }

    #[test]
    fn test_reinterpret_raw_value() {
        let num = GpioNum::new(17).unwrap();
        assert_eq!(num.get_as::<u64>(), 17);
        assert_eq!(DriveStrength::STRONGEST.get_as::<i64>(), 3);
    }
}
