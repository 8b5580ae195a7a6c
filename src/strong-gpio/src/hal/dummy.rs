use strong_gpio_common::{
    driver::{Driver, Status},
    gpio::{Direction, Level, PullMode, WakeupIntrType},
};

/// Placeholder driver for builds without GPIO hardware.
///
/// Every fallible operation reports [`Status::NOT_SUPPORTED`], so configurations cannot be
/// constructed with it.
#[derive(Debug, Default, Copy, Clone)]
pub struct Gpio;

impl Driver for Gpio {
    fn reset_pin(&mut self, _pin: u32) -> Status {
        Status::NOT_SUPPORTED
    }

    fn set_direction(&mut self, _pin: u32, _direction: Direction) -> Status {
        Status::NOT_SUPPORTED
    }

    fn set_level(&mut self, _pin: u32, _level: Level) -> Status {
        Status::NOT_SUPPORTED
    }

    fn level(&self, _pin: u32) -> Level {
        Level::Low
    }

    fn set_pull_mode(&mut self, _pin: u32, _mode: PullMode) -> Status {
        Status::NOT_SUPPORTED
    }

    fn wakeup_enable(&mut self, _pin: u32, _intr_type: WakeupIntrType) -> Status {
        Status::NOT_SUPPORTED
    }

    fn wakeup_disable(&mut self, _pin: u32) -> Status {
        Status::NOT_SUPPORTED
    }

    fn hold_enable(&mut self, _pin: u32) -> Status {
        Status::NOT_SUPPORTED
    }

    fn hold_disable(&mut self, _pin: u32) -> Status {
        Status::NOT_SUPPORTED
    }

    fn set_drive_capability(&mut self, _pin: u32, _strength: u32) -> Status {
        Status::NOT_SUPPORTED
    }

    fn drive_capability(&self, _pin: u32) -> Result<u32, Status> {
        Err(Status::NOT_SUPPORTED)
    }
}
