use crate::driver::Status;

/// GPIO-related errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The raw value is outside of what the hardware of the current target supports.
    ///
    /// Only returned when constructing a validated parameter.
    InvalidArgument(u32),
    /// The driver reported a non-success status.
    DriverFailure(Status),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidArgument(value) => {
                write!(f, "value {value} is not supported by this hardware")
            }
            Self::DriverFailure(status) => {
                write!(f, "GPIO driver failed with status {:#x}", status.code())
            }
        }
    }
}

impl core::error::Error for Error {}

impl embedded_hal::digital::Error for Error {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_driver_failure_in_hex() {
        let err = Error::DriverFailure(Status::from_raw(0x106));
        assert_eq!(err.to_string(), "GPIO driver failed with status 0x106");
    }

    #[test]
    fn display_invalid_argument() {
        assert_eq!(
            Error::InvalidArgument(41).to_string(),
            "value 41 is not supported by this hardware"
        );
    }
}
