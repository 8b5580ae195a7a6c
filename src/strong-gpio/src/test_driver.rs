//! Recording driver for host tests.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use strong_gpio_common::{
    driver::{Driver, Status},
    gpio::{Direction, Level, PullMode, WakeupIntrType},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Call {
    Reset(u32),
    SetDirection(u32, Direction),
    SetLevel(u32, Level),
    SetPullMode(u32, PullMode),
    WakeupEnable(u32, WakeupIntrType),
    WakeupDisable(u32),
    HoldEnable(u32),
    HoldDisable(u32),
    SetDriveCapability(u32, u32),
    GetDriveCapability(u32),
}

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    drive_capabilities: BTreeMap<u32, u32>,
    input_levels: BTreeMap<u32, Level>,
    failure: Option<(fn(&Call) -> bool, Status)>,
}

/// Clones share their state, so a test can keep a handle after moving one into a
/// configuration.
#[derive(Clone, Default)]
pub struct TestDriver(Rc<RefCell<State>>);

impl TestDriver {
    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().calls.clone()
    }

    /// Makes every call matching `filter` report `status` from now on.
    pub fn fail_when(&self, filter: fn(&Call) -> bool, status: Status) {
        self.0.borrow_mut().failure = Some((filter, status));
    }

    pub fn set_input_level(&self, pin: u32, level: Level) {
        self.0.borrow_mut().input_levels.insert(pin, level);
    }

    fn record(&self, call: Call) -> Status {
        let mut state = self.0.borrow_mut();
        state.calls.push(call);
        match state.failure {
            Some((filter, status)) if filter(&call) => status,
            _ => Status::OK,
        }
    }
}

impl Driver for TestDriver {
    fn reset_pin(&mut self, pin: u32) -> Status {
        self.record(Call::Reset(pin))
    }

    fn set_direction(&mut self, pin: u32, direction: Direction) -> Status {
        self.record(Call::SetDirection(pin, direction))
    }

    fn set_level(&mut self, pin: u32, level: Level) -> Status {
        self.record(Call::SetLevel(pin, level))
    }

    fn level(&self, pin: u32) -> Level {
        self.0
            .borrow()
            .input_levels
            .get(&pin)
            .copied()
            .unwrap_or(Level::Low)
    }

    fn set_pull_mode(&mut self, pin: u32, mode: PullMode) -> Status {
        self.record(Call::SetPullMode(pin, mode))
    }

    fn wakeup_enable(&mut self, pin: u32, intr_type: WakeupIntrType) -> Status {
        self.record(Call::WakeupEnable(pin, intr_type))
    }

    fn wakeup_disable(&mut self, pin: u32) -> Status {
        self.record(Call::WakeupDisable(pin))
    }

    fn hold_enable(&mut self, pin: u32) -> Status {
        self.record(Call::HoldEnable(pin))
    }

    fn hold_disable(&mut self, pin: u32) -> Status {
        self.record(Call::HoldDisable(pin))
    }

    fn set_drive_capability(&mut self, pin: u32, strength: u32) -> Status {
        let status = self.record(Call::SetDriveCapability(pin, strength));
        if status.is_ok() {
            self.0.borrow_mut().drive_capabilities.insert(pin, strength);
        }
        status
    }

    fn drive_capability(&self, pin: u32) -> Result<u32, Status> {
        let status = self.record(Call::GetDriveCapability(pin));
        if !status.is_ok() {
            return Err(status);
        }
        // Reset value on Espressif MCUs.
        Ok(self.0.borrow().drive_capabilities.get(&pin).copied().unwrap_or(2))
    }
}
