//! Differential drivetrain control.
//!
//! This module provides the `Differential` struct for controlling robots with
//! separate left and right motor groups, commonly known as a "tank drive" or
//! "differential drive" configuration.
//!
//! Driver input reaches the motors through [`DriveBase::curvature`]: both
//! sticks are shaped by an [`ExpoDriveCurve`] and mixed with
//! [`curvature_mix`], then the resulting powers are converted to volts.
//!
//! # Example
//!
//! ```ignore
//! use talos::peripherals::drivetrain::{Differential, DriveBase};
//! use vexide::prelude::*;
//!
//! let mut drivetrain = Differential::new(
//!     [
//!         Motor::new(peripherals.port_1, Gearset::Blue, Direction::Reverse),
//!         Motor::new(peripherals.port_2, Gearset::Blue, Direction::Reverse),
//!     ],
//!     [
//!         Motor::new(peripherals.port_3, Gearset::Blue, Direction::Forward),
//!         Motor::new(peripherals.port_4, Gearset::Blue, Direction::Forward),
//!     ],
//! );
//!
//! // In your control loop, with stick values in -127..=127:
//! drivetrain.curvature(left_y, right_x);
//! ```

use std::{cell::RefCell, rc::Rc};

use vexide::prelude::Motor;

use super::{
    Actuator, FULL_VOLTAGE,
    curve::{ExpoDriveCurve, STICK_MAX, curvature_mix},
};

/// Anything that accepts curvature-style driver commands.
///
/// Implemented by [`Differential`]; tests substitute a recorder.
pub trait DriveBase {
    /// Drives with a forward `throttle` and a `turn`, both in stick units
    /// (-127 to 127).
    fn curvature(&mut self, throttle: i32, turn: i32);
}

/// Converts a stick-unit power to a motor voltage.
pub fn power_to_voltage(power: f64) -> f64 { power / STICK_MAX * FULL_VOLTAGE }

/// A differential drivetrain controller.
///
/// This struct manages a robot with separate left and right motor groups.
/// The motors are stored in reference-counted cells to allow shared ownership
/// with other systems.
///
/// # Motor Configuration
///
/// Motors on opposite sides of the drivetrain typically need to spin in
/// opposite directions to move the robot forward. Configure motor directions
/// appropriately when creating the motors.
#[derive(Clone)]
pub struct Differential {
    /// The left motor group.
    pub left:           Rc<RefCell<dyn AsMut<[Motor]>>>,
    /// The right motor group.
    pub right:          Rc<RefCell<dyn AsMut<[Motor]>>>,
    /// Shaping applied to the forward axis.
    pub throttle_curve: ExpoDriveCurve,
    /// Shaping applied to the turn axis.
    pub steer_curve:    ExpoDriveCurve,
}

impl Differential {
    /// Creates a new drivetrain with the provided left/right motors and the
    /// default drive curves.
    pub fn new<L: AsMut<[Motor]> + 'static, R: AsMut<[Motor]> + 'static>(
        left: L,
        right: R,
    ) -> Self {
        Self {
            left:           Rc::new(RefCell::new(left)),
            right:          Rc::new(RefCell::new(right)),
            throttle_curve: ExpoDriveCurve::default(),
            steer_curve:    ExpoDriveCurve::default(),
        }
    }

    /// Replaces the throttle and steer curves.
    pub fn with_curves(mut self, throttle: ExpoDriveCurve, steer: ExpoDriveCurve) -> Self {
        self.throttle_curve = throttle;
        self.steer_curve = steer;
        self
    }

    /// Sets both sides from stick-unit powers.
    fn set_powers(&self, left: f64, right: f64) {
        let left_voltage = power_to_voltage(left);
        let right_voltage = power_to_voltage(right);

        if let Ok(mut left_motors) = self.left.try_borrow_mut() {
            for motor in left_motors.as_mut() {
                motor.set_output(left_voltage);
            }
        }

        if let Ok(mut right_motors) = self.right.try_borrow_mut() {
            for motor in right_motors.as_mut() {
                motor.set_output(right_voltage);
            }
        }
    }
}

impl DriveBase for Differential {
    fn curvature(&mut self, throttle: i32, turn: i32) {
        let (left, right) = curvature_mix(
            throttle as f64,
            turn as f64,
            &self.throttle_curve,
            &self.steer_curve,
        );
        self.set_powers(left, right);
    }
}

#[cfg(test)]
mod tests {
    use super::power_to_voltage;

    #[test]
    fn power_scales_to_volts() {
        assert!((power_to_voltage(127.0) - 12.0).abs() < 1e-12);
        assert!((power_to_voltage(-127.0) + 12.0).abs() < 1e-12);
        assert_eq!(power_to_voltage(0.0), 0.0);
    }
}
