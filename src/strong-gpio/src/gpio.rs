//! Pin configurations.
//!
//! A pin is configured by constructing one of [`Output`], [`Input`] or [`OutputInput`] from a
//! [`GpioNum`]. The constructor resets the pin and commits it to the direction of the type;
//! the direction cannot be changed afterwards, only by dropping the configuration and
//! constructing another one. Dropping a configuration does not reset the pin.
//!
//! Operation sets shared between configurations are exposed through [`GpioConfig`],
//! [`DriveConfig`] and [`InputConfig`]; an [`Output`] has no way to read its level and an
//! [`Input`] has no way to drive the line.

use strong_gpio_common::{
    debug,
    driver::Driver,
    gpio::{Direction, Level, PullMode, WakeupIntrType},
    trace, Error,
};

use crate::{
    hal,
    param::{DriveStrength, GpioNum},
    strong::StrongValue,
};

/// Operations available on every pin configuration.
pub trait GpioConfig {
    /// Returns the number of the configured pin.
    #[must_use]
    fn gpio_num(&self) -> GpioNum;

    /// Latches the current state of the pin, so that it is kept across light sleep and
    /// resets of the peripheral.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] if the driver rejects the call.
    fn hold_enable(&mut self) -> Result<(), Error>;

    /// Releases the latch set by [`GpioConfig::hold_enable()`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] if the driver rejects the call.
    fn hold_disable(&mut self) -> Result<(), Error>;
}

/// Drive-strength control, available on configurations that drive the line.
pub trait DriveConfig: GpioConfig {
    /// Returns the drive strength currently applied to the pin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] if the driver cannot report it.
    fn drive_strength(&self) -> Result<DriveStrength, Error>;

    /// Sets the drive strength of the pin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] if the driver rejects the call.
    fn set_drive_strength(&mut self, strength: DriveStrength) -> Result<(), Error>;
}

/// Input operations, available on configurations that sense the line.
pub trait InputConfig: GpioConfig {
    /// Returns the current input level.
    ///
    /// This never fails: reading an input that has been configured is always well-formed.
    #[must_use]
    fn level(&self) -> Level;

    /// Whether the input level is high.
    #[must_use]
    fn is_high(&self) -> bool {
        self.level() == Level::High
    }

    /// Whether the input level is low.
    #[must_use]
    fn is_low(&self) -> bool {
        self.level() == Level::Low
    }

    /// Configures the pull resistors of the input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] if the driver rejects the call.
    fn set_pull_mode(&mut self, mode: PullMode) -> Result<(), Error>;

    /// Arms the input as wakeup source from light sleep.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] if the driver rejects the call.
    fn wakeup_enable(&mut self, intr_type: WakeupIntrType) -> Result<(), Error>;

    /// Disarms the input as wakeup source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] if the driver rejects the call.
    fn wakeup_disable(&mut self) -> Result<(), Error>;
}

// Shared state and operations of all configurations.
struct Pin<D> {
    num: GpioNum,
    driver: D,
}

impl<D: Driver> Pin<D> {
    fn configure(num: GpioNum, mut driver: D, direction: Direction) -> Result<Self, Error> {
        driver.reset_pin(num.get()).into_result()?;

        let mut pin = Self { num, driver };
        pin.driver
            .set_direction(pin.raw(), direction)
            .into_result()?;

        debug!("gpio: GPIO{} configured as {}", pin.raw(), direction);

        Ok(pin)
    }

    fn raw(&self) -> u32 {
        self.num.get()
    }

    fn set_level(&mut self, level: Level) -> Result<(), Error> {
        trace!("gpio: GPIO{} set to {}", self.raw(), level);
        self.driver.set_level(self.raw(), level).into_result()
    }

    fn level(&self) -> Level {
        self.driver.level(self.raw())
    }

    fn set_pull_mode(&mut self, mode: PullMode) -> Result<(), Error> {
        self.driver.set_pull_mode(self.raw(), mode).into_result()
    }

    fn wakeup_enable(&mut self, intr_type: WakeupIntrType) -> Result<(), Error> {
        self.driver.wakeup_enable(self.raw(), intr_type).into_result()
    }

    fn wakeup_disable(&mut self) -> Result<(), Error> {
        self.driver.wakeup_disable(self.raw()).into_result()
    }

    fn hold_enable(&mut self) -> Result<(), Error> {
        self.driver.hold_enable(self.raw()).into_result()
    }

    fn hold_disable(&mut self) -> Result<(), Error> {
        self.driver.hold_disable(self.raw()).into_result()
    }

    fn drive_strength(&self) -> Result<DriveStrength, Error> {
        let strength = self
            .driver
            .drive_capability(self.raw())
            .map_err(Error::DriverFailure)?;

        Ok(DriveStrength::from_driver(strength))
    }

    fn set_drive_strength(&mut self, strength: DriveStrength) -> Result<(), Error> {
        self.driver
            .set_drive_capability(self.raw(), strength.get())
            .into_result()
    }
}

/// A GPIO configured as push-pull output.
pub struct Output<D: Driver = hal::Gpio> {
    pin: Pin<D>,
}

impl Output {
    /// Configures a GPIO as output, using the driver of the MCU.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] if resetting the pin or setting its direction fails.
    pub fn new(num: GpioNum) -> Result<Self, Error> {
        Self::with_driver(num, hal::Gpio)
    }
}

impl<D: Driver> Output<D> {
    /// Configures a GPIO as output, using `driver`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] if resetting the pin or setting its direction fails.
    pub fn with_driver(num: GpioNum, driver: D) -> Result<Self, Error> {
        let pin = Pin::configure(num, driver, Direction::Output)?;
        Ok(Self { pin })
    }

    /// Drives the output high.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] if the driver rejects the call.
    pub fn set_high(&mut self) -> Result<(), Error> {
        self.pin.set_level(Level::High)
    }

    /// Drives the output low.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] if the driver rejects the call.
    pub fn set_low(&mut self) -> Result<(), Error> {
        self.pin.set_level(Level::Low)
    }

    fn pin(&self) -> &Pin<D> {
        &self.pin
    }

    fn pin_mut(&mut self) -> &mut Pin<D> {
        &mut self.pin
    }
}

/// A GPIO configured as input.
pub struct Input<D: Driver = hal::Gpio> {
    pin: Pin<D>,
}

impl Input {
    /// Configures a GPIO as input, using the driver of the MCU.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] if resetting the pin or setting its direction fails.
    pub fn new(num: GpioNum) -> Result<Self, Error> {
        Self::with_driver(num, hal::Gpio)
    }
}

impl<D: Driver> Input<D> {
    /// Configures a GPIO as input, using `driver`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] if resetting the pin or setting its direction fails.
    pub fn with_driver(num: GpioNum, driver: D) -> Result<Self, Error> {
        let pin = Pin::configure(num, driver, Direction::Input)?;
        Ok(Self { pin })
    }

    fn pin(&self) -> &Pin<D> {
        &self.pin
    }

    fn pin_mut(&mut self) -> &mut Pin<D> {
        &mut self.pin
    }
}

impl<D: Driver> InputConfig for Input<D> {
    fn level(&self) -> Level {
        self.pin.level()
    }

    fn set_pull_mode(&mut self, mode: PullMode) -> Result<(), Error> {
        self.pin.set_pull_mode(mode)
    }

    fn wakeup_enable(&mut self, intr_type: WakeupIntrType) -> Result<(), Error> {
        self.pin.wakeup_enable(intr_type)
    }

    fn wakeup_disable(&mut self) -> Result<(), Error> {
        self.pin.wakeup_disable()
    }
}

/// A GPIO configured as open-drain output with its input enabled.
///
/// This is an [`Input`] that can additionally pull the line low, which is what single-wire
/// protocols need for bit-banging. Driving the output high releases the line, which is then
/// pulled up externally; hence [`OutputInput::set_floating()`] instead of a `set_high()`.
pub struct OutputInput<D: Driver = hal::Gpio> {
    input: Input<D>,
}

impl OutputInput {
    /// Configures a GPIO as open-drain output and input, using the driver of the MCU.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] if resetting the pin or setting its direction fails.
    pub fn new(num: GpioNum) -> Result<Self, Error> {
        Self::with_driver(num, hal::Gpio)
    }
}

impl<D: Driver> OutputInput<D> {
    /// Configures a GPIO as open-drain output and input, using `driver`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] if resetting the pin or setting its direction fails.
    pub fn with_driver(num: GpioNum, driver: D) -> Result<Self, Error> {
        let pin = Pin::configure(num, driver, Direction::OutputInputOpenDrain)?;
        Ok(Self {
            input: Input { pin },
        })
    }

    /// Releases the line, letting external pull resistors determine its level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] if the driver rejects the call.
    pub fn set_floating(&mut self) -> Result<(), Error> {
        self.pin_mut().set_level(Level::High)
    }

    /// Actively pulls the line low.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DriverFailure`] if the driver rejects the call.
    pub fn set_low(&mut self) -> Result<(), Error> {
        self.pin_mut().set_level(Level::Low)
    }

    fn pin(&self) -> &Pin<D> {
        self.input.pin()
    }

    fn pin_mut(&mut self) -> &mut Pin<D> {
        self.input.pin_mut()
    }
}

impl<D: Driver> InputConfig for OutputInput<D> {
    fn level(&self) -> Level {
        self.input.level()
    }

    fn set_pull_mode(&mut self, mode: PullMode) -> Result<(), Error> {
        self.input.set_pull_mode(mode)
    }

    fn wakeup_enable(&mut self, intr_type: WakeupIntrType) -> Result<(), Error> {
        self.input.wakeup_enable(intr_type)
    }

    fn wakeup_disable(&mut self) -> Result<(), Error> {
        self.input.wakeup_disable()
    }
}

macro_rules! impl_gpio_config {
    ($type:ident) => {
        impl<D: Driver> GpioConfig for $type<D> {
            fn gpio_num(&self) -> GpioNum {
                self.pin().num
            }

            fn hold_enable(&mut self) -> Result<(), Error> {
                self.pin_mut().hold_enable()
            }

            fn hold_disable(&mut self) -> Result<(), Error> {
                self.pin_mut().hold_disable()
            }
        }

        impl<D: Driver> embedded_hal::digital::ErrorType for $type<D> {
            type Error = Error;
        }
    };
}

macro_rules! impl_drive_config {
    ($type:ident) => {
        impl<D: Driver> DriveConfig for $type<D> {
            fn drive_strength(&self) -> Result<DriveStrength, Error> {
                self.pin().drive_strength()
            }

            fn set_drive_strength(&mut self, strength: DriveStrength) -> Result<(), Error> {
                self.pin_mut().set_drive_strength(strength)
            }
        }
    };
}

macro_rules! impl_embedded_hal_input_traits {
    ($type:ident) => {
        impl<D: Driver> embedded_hal::digital::InputPin for $type<D> {
            fn is_high(&mut self) -> Result<bool, Self::Error> {
                Ok(InputConfig::is_high(&*self))
            }

            fn is_low(&mut self) -> Result<bool, Self::Error> {
                Ok(InputConfig::is_low(&*self))
            }
        }
    };
}

impl_gpio_config!(Output);
impl_gpio_config!(Input);
impl_gpio_config!(OutputInput);

impl_drive_config!(Output);
impl_drive_config!(OutputInput);

impl_embedded_hal_input_traits!(Input);
impl_embedded_hal_input_traits!(OutputInput);

impl<D: Driver> embedded_hal::digital::OutputPin for Output<D> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Self::set_low(self)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Self::set_high(self)
    }
}

impl<D: Driver> embedded_hal::digital::OutputPin for OutputInput<D> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Self::set_low(self)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_floating()
    }
}
