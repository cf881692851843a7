//! Roller mode selection and actuation.
//!
//! The intake, indexer and scoring roller are driven together as one
//! mechanism with five modes. The driver picks a mode by holding a shoulder
//! button; when several are held the highest-priority one wins:
//!
//! | button | mode  | intake | indexer | roller |
//! |--------|-------|--------|---------|--------|
//! | R1     | store | 0      | +12 V   | 0      |
//! | R2     | low   | +12 V  | 0       | 0      |
//! | L2     | mid   | 0      | 0       | -12 V  |
//! | L1     | high  | 0      | 0       | +12 V  |
//! | none   | stop  | 0      | 0       | 0      |

use std::fmt;

use crate::peripherals::{
    Actuator, FULL_VOLTAGE,
    controller::{ControllerButton, ControllerSample},
};

/// Operating state of the roller mechanism.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RollerMode {
    /// Everything off.
    #[default]
    Stop,
    /// Index game pieces into storage.
    Store,
    /// Run the intake to score low.
    Low,
    /// Reverse the scoring roller.
    Mid,
    /// Run the scoring roller forward.
    High,
}

impl RollerMode {
    pub const ALL: [RollerMode; 5] = [
        RollerMode::Stop,
        RollerMode::Store,
        RollerMode::Low,
        RollerMode::Mid,
        RollerMode::High,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RollerMode::Stop => "stop",
            RollerMode::Store => "store",
            RollerMode::Low => "low",
            RollerMode::Mid => "mid",
            RollerMode::High => "high",
        }
    }
}

impl fmt::Display for RollerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// The four buttons that select a roller mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RollerButtons {
    pub r1: bool,
    pub r2: bool,
    pub l2: bool,
    pub l1: bool,
}

impl RollerButtons {
    pub const fn new(r1: bool, r2: bool, l2: bool, l1: bool) -> Self { Self { r1, r2, l2, l1 } }
}

impl From<&ControllerSample> for RollerButtons {
    fn from(sample: &ControllerSample) -> Self {
        RollerButtons {
            r1: sample.pressed(ControllerButton::ButtonR1),
            r2: sample.pressed(ControllerButton::ButtonR2),
            l2: sample.pressed(ControllerButton::ButtonL2),
            l1: sample.pressed(ControllerButton::ButtonL1),
        }
    }
}

/// Voltages for the three roller motors, in volts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActuatorCommand {
    pub intake:  f64,
    pub indexer: f64,
    pub roller:  f64,
}

impl ActuatorCommand {
    pub const STOP: ActuatorCommand = ActuatorCommand::new(0.0, 0.0, 0.0);

    pub const fn new(intake: f64, indexer: f64, roller: f64) -> Self {
        Self {
            intake,
            indexer,
            roller,
        }
    }
}

/// Picks the roller mode for this cycle.
///
/// Priority, highest first: R1 (store), R2 (low), L2 (mid), L1 (high).
/// With nothing held the mechanism stops.
pub fn select_mode(buttons: RollerButtons) -> RollerMode {
    if buttons.r1 {
        RollerMode::Store
    } else if buttons.r2 {
        RollerMode::Low
    } else if buttons.l2 {
        RollerMode::Mid
    } else if buttons.l1 {
        RollerMode::High
    } else {
        RollerMode::Stop
    }
}

/// Looks up the motor voltages for a mode.
pub fn actuate(mode: RollerMode) -> ActuatorCommand {
    match mode {
        RollerMode::Store => ActuatorCommand::new(0.0, FULL_VOLTAGE, 0.0),
        RollerMode::Low => ActuatorCommand::new(FULL_VOLTAGE, 0.0, 0.0),
        RollerMode::Mid => ActuatorCommand::new(0.0, 0.0, -FULL_VOLTAGE),
        RollerMode::High => ActuatorCommand::new(0.0, 0.0, FULL_VOLTAGE),
        RollerMode::Stop => ActuatorCommand::STOP,
    }
}

/// The three roller motors.
pub struct Rollers<A> {
    pub intake:  A,
    pub indexer: A,
    pub roller:  A,
}

impl<A: Actuator> Rollers<A> {
    pub fn new(intake: A, indexer: A, roller: A) -> Self {
        Rollers {
            intake,
            indexer,
            roller,
        }
    }

    /// Writes every motor, zeros included, so nothing keeps running on a
    /// stale command.
    pub fn apply(&mut self, command: ActuatorCommand) {
        self.intake.set_output(command.intake);
        self.indexer.set_output(command.indexer);
        self.roller.set_output(command.roller);
    }
}
