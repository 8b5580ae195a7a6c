//! Per-target hardware capabilities and the validity predicates built on them.
//!
//! The predicates are target-agnostic: they only consult the [`CapabilityTable`] they are
//! given. The table matching the MCU being built for is [`TARGET`], selected at compile time
//! from the `context` cfg. Builds without an Espressif context (e.g., host builds) use
//! [`HOST`], which mirrors the ESP-IDF Linux target.

use crate::Error;

/// Static description of what the GPIO hardware of a target supports.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CapabilityTable {
    /// Exclusive upper bound of valid pin numbers.
    pub pin_count: u32,
    /// Pin numbers that are in range but not usable on this target, e.g., because they are
    /// not bonded out or wired internally.
    pub excluded_pins: &'static [u32],
    /// Exclusive upper bound of valid drive-strength selectors.
    pub drive_strength_count: u32,
}

impl CapabilityTable {
    /// Checks whether `pin` is a usable GPIO number on this target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `pin` is out of range or excluded.
    pub const fn is_valid_pin(&self, pin: u32) -> Result<(), Error> {
        if pin >= self.pin_count {
            return Err(Error::InvalidArgument(pin));
        }

        let mut excluded = self.excluded_pins;
        while let [first, rest @ ..] = excluded {
            if *first == pin {
                return Err(Error::InvalidArgument(pin));
            }
            excluded = rest;
        }

        Ok(())
    }

    /// Checks whether `strength` is a drive-strength selector supported on this target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `strength` is out of range.
    pub const fn is_valid_drive_strength(&self, strength: u32) -> Result<(), Error> {
        if strength >= self.drive_strength_count {
            return Err(Error::InvalidArgument(strength));
        }

        Ok(())
    }
}

// All Espressif MCUs we support have four drive-strength settings (5, 10, 20 and 40 mA).
const ESP_DRIVE_STRENGTH_COUNT: u32 = 4;

/// ESP32.
pub const ESP32: CapabilityTable = CapabilityTable {
    pin_count: 40,
    excluded_pins: &[24],
    drive_strength_count: ESP_DRIVE_STRENGTH_COUNT,
};

/// ESP32-S2.
pub const ESP32S2: CapabilityTable = CapabilityTable {
    pin_count: 47,
    excluded_pins: &[22, 23, 24, 25],
    drive_strength_count: ESP_DRIVE_STRENGTH_COUNT,
};

/// ESP32-S3.
pub const ESP32S3: CapabilityTable = CapabilityTable {
    pin_count: 49,
    excluded_pins: &[22, 23, 24, 25],
    drive_strength_count: ESP_DRIVE_STRENGTH_COUNT,
};

/// ESP32-C3.
pub const ESP32C3: CapabilityTable = CapabilityTable {
    pin_count: 22,
    excluded_pins: &[],
    drive_strength_count: ESP_DRIVE_STRENGTH_COUNT,
};

/// ESP32-C2.
pub const ESP32C2: CapabilityTable = CapabilityTable {
    pin_count: 21,
    excluded_pins: &[],
    drive_strength_count: ESP_DRIVE_STRENGTH_COUNT,
};

/// Host builds, laid out like the ESP-IDF Linux target.
pub const HOST: CapabilityTable = ESP32;

cfg_if::cfg_if! {
    if #[cfg(context = "esp32")] {
        /// Capabilities of the MCU being built for.
        pub const TARGET: CapabilityTable = ESP32;
    } else if #[cfg(context = "esp32s2")] {
        /// Capabilities of the MCU being built for.
        pub const TARGET: CapabilityTable = ESP32S2;
    } else if #[cfg(context = "esp32s3")] {
        /// Capabilities of the MCU being built for.
        pub const TARGET: CapabilityTable = ESP32S3;
    } else if #[cfg(context = "esp32c3")] {
        /// Capabilities of the MCU being built for.
        pub const TARGET: CapabilityTable = ESP32C3;
    } else if #[cfg(context = "esp32c2")] {
        /// Capabilities of the MCU being built for.
        pub const TARGET: CapabilityTable = ESP32C2;
    } else if #[cfg(context = "esp")] {
        compile_error!("this MCU family is not supported");
    } else {
        /// Capabilities of the MCU being built for.
        pub const TARGET: CapabilityTable = HOST;
    }
}

/// Checks whether `pin` is a usable GPIO number on the current target.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `pin` is out of range or excluded.
pub const fn is_valid_pin(pin: u32) -> Result<(), Error> {
    TARGET.is_valid_pin(pin)
}

/// Checks whether `strength` is a drive-strength selector supported on the current target.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `strength` is out of range.
pub const fn is_valid_drive_strength(strength: u32) -> Result<(), Error> {
    TARGET.is_valid_drive_strength(strength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_validity_follows_table() {
        for table in [ESP32, ESP32S2, ESP32S3, ESP32C3, ESP32C2] {
            for pin in 0..table.pin_count + 8 {
                let expected = pin < table.pin_count && !table.excluded_pins.contains(&pin);
                assert_eq!(table.is_valid_pin(pin).is_ok(), expected, "pin {pin}");
            }
        }
    }

    #[test]
    fn test_excluded_pins() {
        assert_eq!(ESP32.is_valid_pin(24), Err(Error::InvalidArgument(24)));
        assert!(ESP32.is_valid_pin(23).is_ok());
        assert!(ESP32.is_valid_pin(25).is_ok());

        for pin in 22..=25 {
            assert_eq!(ESP32S3.is_valid_pin(pin), Err(Error::InvalidArgument(pin)));
        }
        assert!(ESP32S3.is_valid_pin(26).is_ok());
    }

    #[test]
    fn test_pin_upper_bound_is_exclusive() {
        assert!(ESP32C3.is_valid_pin(21).is_ok());
        assert_eq!(ESP32C3.is_valid_pin(22), Err(Error::InvalidArgument(22)));
        assert_eq!(ESP32.is_valid_pin(40), Err(Error::InvalidArgument(40)));
        assert_eq!(ESP32.is_valid_pin(u32::MAX), Err(Error::InvalidArgument(u32::MAX)));
    }

    #[test]
    fn test_drive_strength_validity() {
        for strength in 0..4 {
            assert!(is_valid_drive_strength(strength).is_ok());
        }
        assert_eq!(is_valid_drive_strength(4), Err(Error::InvalidArgument(4)));
    }

    #[test]
    fn test_host_target() {
        assert_eq!(TARGET, HOST);
        assert!(is_valid_pin(4).is_ok());
        assert_eq!(is_valid_pin(24), Err(Error::InvalidArgument(24)));
        assert_eq!(is_valid_pin(41), Err(Error::InvalidArgument(41)));
    }
}
