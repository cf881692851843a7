//! The operator-control cycle.
//!
//! Every cycle samples the controller, drives, selects a roller mode,
//! actuates the rollers and then sleeps for a fixed period. The loop never
//! exits on its own; the competition runtime cancels it when driver control
//! ends.

use std::time::Duration;

use log::{debug, info};
use vexide::time::sleep;

use super::rollers::{RollerButtons, RollerMode, Rollers, actuate, select_mode};
use crate::peripherals::{Actuator, controller::InputSource, drivetrain::DriveBase};

/// Default time between control cycles.
pub const LOOPRATE: Duration = Duration::from_millis(10);

/// Driver control for the drivetrain and roller mechanism.
///
/// Generic over its devices so the cycle can be exercised with fakes.
pub struct OpControl<I, D, A> {
    pub input:   I,
    pub drive:   D,
    pub rollers: Rollers<A>,
    /// Sleep between cycles.
    pub period:  Duration,
}

impl<I: InputSource, D: DriveBase, A: Actuator> OpControl<I, D, A> {
    pub fn new(input: I, drive: D, rollers: Rollers<A>) -> Self {
        OpControl {
            input,
            drive,
            rollers,
            period: LOOPRATE,
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Passes the sticks straight to curvature drive. Deadband and curve
    /// shaping happen in the drivetrain.
    pub fn drive(&mut self, left_y: i32, right_x: i32) { self.drive.curvature(left_y, right_x); }

    /// Runs one cycle without sleeping and returns the selected mode.
    pub fn step(&mut self) -> RollerMode {
        let sample = self.input.sample();

        self.drive(sample.left_y, sample.right_x);

        let mode = select_mode(RollerButtons::from(&sample));
        self.rollers.apply(actuate(mode));
        mode
    }

    /// Runs the control cycle forever.
    pub async fn run(&mut self) {
        info!("Driver Control Loop Started");
        let mut last_mode = RollerMode::Stop;
        loop {
            let mode = self.step();
            // log only, selection never looks at the previous mode
            if mode != last_mode {
                debug!("Roller Mode: {} -> {}", last_mode, mode);
                last_mode = mode;
            }
            sleep(self.period).await;
        }
    }
}
