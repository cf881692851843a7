//! Controller sampling for operator control.
//!
//! A [`ControllerSample`] is a snapshot of the two axes and the shoulder
//! buttons the driver uses, taken once per control cycle. Stick values are
//! reported in stick units (-127 to 127) to match the drive curves.
//!
//! # Example
//!
//! ```ignore
//! use talos::peripherals::controller::InputSource;
//!
//! let sample = peripherals.primary_controller.sample();
//! if sample.r1 {
//!     // ...
//! }
//! ```

use log::warn;
use vexide::{
    controller::{ButtonState, ControllerState},
    prelude::Controller,
};

use super::curve::STICK_MAX;

/// Anything that can be sampled for driver input once per cycle.
pub trait InputSource {
    fn sample(&self) -> ControllerSample;
}

/// One cycle's worth of driver input.
///
/// The default value is the neutral sample: sticks centered, nothing
/// pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerSample {
    /// Left stick, vertical axis. Forward is positive.
    pub left_y:  i32,
    /// Right stick, horizontal axis. Right is positive.
    pub right_x: i32,
    pub r1:      bool,
    pub r2:      bool,
    pub l1:      bool,
    pub l2:      bool,
}

impl ControllerSample {
    /// Returns whether `button` is held in this sample. Buttons that are not
    /// sampled always read as released.
    pub fn pressed(&self, button: ControllerButton) -> bool {
        match button {
            ControllerButton::ButtonR1 => self.r1,
            ControllerButton::ButtonR2 => self.r2,
            ControllerButton::ButtonL1 => self.l1,
            ControllerButton::ButtonL2 => self.l2,
            _ => false,
        }
    }

    fn from_state(state: ControllerState) -> Self {
        ControllerSample {
            left_y:  to_stick_units(state.left_stick.y()),
            right_x: to_stick_units(state.right_stick.x()),
            r1:      get_button_state(state, ControllerButton::ButtonR1).is_pressed(),
            r2:      get_button_state(state, ControllerButton::ButtonR2).is_pressed(),
            l1:      get_button_state(state, ControllerButton::ButtonL1).is_pressed(),
            l2:      get_button_state(state, ControllerButton::ButtonL2).is_pressed(),
        }
    }
}

impl InputSource for Controller {
    /// Samples the controller. A failed read is logged and reported as the
    /// neutral sample, which stops every mechanism.
    fn sample(&self) -> ControllerSample { ControllerSample::from_state(get_state(self)) }
}

/// A list of Controller Buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerButton {
    ButtonA,
    ButtonB,
    ButtonX,
    ButtonY,
    ButtonUp,
    ButtonDown,
    ButtonLeft,
    ButtonRight,
    ButtonL1,
    ButtonL2,
    ButtonR1,
    ButtonR2,
}

/// Converts a normalized axis value (-1.0 to 1.0) to stick units.
pub fn to_stick_units(value: f64) -> i32 {
    (value * STICK_MAX).round().clamp(-STICK_MAX, STICK_MAX) as i32
}

fn get_button_state(state: ControllerState, button: ControllerButton) -> ButtonState {
    match button {
        ControllerButton::ButtonA => state.button_a,
        ControllerButton::ButtonB => state.button_b,
        ControllerButton::ButtonX => state.button_x,
        ControllerButton::ButtonY => state.button_y,
        ControllerButton::ButtonUp => state.button_up,
        ControllerButton::ButtonDown => state.button_down,
        ControllerButton::ButtonLeft => state.button_left,
        ControllerButton::ButtonRight => state.button_right,
        ControllerButton::ButtonL1 => state.button_l1,
        ControllerButton::ButtonL2 => state.button_l2,
        ControllerButton::ButtonR1 => state.button_r1,
        ControllerButton::ButtonR2 => state.button_r2,
    }
}

fn get_state(controller: &Controller) -> ControllerState {
    controller.state().unwrap_or_else(|e| {
        warn!("Controller State Error: {}", e);
        ControllerState::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stick_units_cover_full_range() {
        assert_eq!(to_stick_units(1.0), 127);
        assert_eq!(to_stick_units(-1.0), -127);
        assert_eq!(to_stick_units(0.0), 0);
        assert_eq!(to_stick_units(0.5), 64);
    }

    #[test]
    fn stick_units_clamp_overrange() {
        assert_eq!(to_stick_units(1.2), 127);
        assert_eq!(to_stick_units(-3.0), -127);
    }

    #[test]
    fn neutral_state_is_default_sample() {
        let sample = ControllerSample::from_state(ControllerState::default());
        assert_eq!(sample, ControllerSample::default());
    }

    #[test]
    fn pressed_reads_sampled_buttons_only() {
        let sample = ControllerSample {
            r2: true,
            l1: true,
            ..Default::default()
        };
        assert!(sample.pressed(ControllerButton::ButtonR2));
        assert!(sample.pressed(ControllerButton::ButtonL1));
        assert!(!sample.pressed(ControllerButton::ButtonR1));
        assert!(!sample.pressed(ControllerButton::ButtonA));
    }
}
