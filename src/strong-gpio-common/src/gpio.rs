//! Closed GPIO parameter sets.
//!
//! These types have a small, fixed set of legal values that never depends on the target, so
//! any value of them is valid by construction. Only their numeric encoding differs between
//! drivers.

/// Digital level of an input or output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Digital low level.
    Low,
    /// Digital high level.
    High,
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => false,
            Level::High => true,
        }
    }
}

impl From<bool> for Level {
    fn from(boolean: bool) -> Self {
        if boolean {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<embedded_hal::digital::PinState> for Level {
    fn from(pin_state: embedded_hal::digital::PinState) -> Self {
        bool::from(pin_state).into()
    }
}

impl From<Level> for embedded_hal::digital::PinState {
    fn from(level: Level) -> Self {
        bool::from(level).into()
    }
}

/// Pull-up/pull-down resistor configuration of an input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PullMode {
    /// No pull-up or pull-down resistor.
    Floating,
    /// Pull-up resistor only.
    PullUp,
    /// Pull-down resistor only.
    PullDown,
}

/// Input level that wakes the MCU up from light sleep while the input is armed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeupIntrType {
    /// Wake up while the input is low.
    LowLevel,
    /// Wake up while the input is high.
    HighLevel,
}

/// Direction a pin is committed to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Push-pull output, input disabled.
    Output,
    /// Input only.
    Input,
    /// Open-drain output with the input enabled.
    OutputInputOpenDrain,
}
