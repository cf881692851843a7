//! Hardware-facing pieces of the robot: controller sampling, drivetrain
//! control and drive-curve shaping.
//!
//! The traits here ([`Actuator`], [`controller::InputSource`],
//! [`drivetrain::DriveBase`]) are the seams between the operator-control
//! logic and vexide devices, so that logic can run against fakes off-robot.

use log::warn;
use vexide::prelude::Motor;

/// Controller sampling and button naming.
pub mod controller;

/// Joystick shaping and left/right power mixing.
pub mod curve;

/// Differential drivetrain control.
///
/// Provides the [`Differential`](drivetrain::Differential) struct for
/// controlling robots with left and right motor groups using curvature drive.
pub mod drivetrain;

/// Maximum motor voltage on the V5 system.
pub const FULL_VOLTAGE: f64 = 12.0;

/// A single voltage-driven output.
pub trait Actuator {
    /// Commands the output in volts. Failures are reported by the
    /// implementation, never to the caller.
    fn set_output(&mut self, volts: f64);
}

impl Actuator for Motor {
    fn set_output(&mut self, volts: f64) {
        self.set_voltage(volts).unwrap_or_else(|e| {
            warn!("Motor Set Voltage Error: {}", e);
        });
    }
}
