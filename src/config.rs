//! Robot configuration.
//!
//! Everything tunable about the robot lives in [`RobotConfig`]: drivetrain
//! geometry, the lateral and angular controller tuning used by motion
//! routines, the driver curves, the control cycle period and the log level.
//! The defaults are the competition values.
//!
//! # Example
//!
//! ```ignore
//! use talos::config::RobotConfig;
//!
//! let mut config = RobotConfig::default();
//! config.throttle_curve.deadband = 5.0;
//! ```

use std::time::Duration;

use log::LevelFilter;

use crate::{opcontrol::driver::LOOPRATE, peripherals::curve::ExpoDriveCurve};

/// Common VEX omni-wheel sizes.
///
/// "New" wheels are the current anti-static omnis, "old" wheels the
/// previous generation. Their nominal and measured diameters differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Omniwheel {
    New2,
    New275,
    Old275,
    New325,
    Old325,
    New4,
    Old4,
}

impl Omniwheel {
    /// Wheel diameter in inches.
    pub fn diameter(self) -> f64 {
        match self {
            Omniwheel::New2 => 2.125,
            Omniwheel::New275 => 2.75,
            Omniwheel::Old275 => 2.75,
            Omniwheel::New325 => 3.25,
            Omniwheel::Old325 => 3.25,
            Omniwheel::New4 => 4.0,
            Omniwheel::Old4 => 4.18,
        }
    }
}

/// Physical configuration of the drivetrain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrivetrainSettings {
    /// The distance between left and right wheels in inches.
    pub track_width:      f64,
    pub wheel:            Omniwheel,
    /// Wheel speed at full power in rpm, after gearing.
    pub rpm:              f64,
    /// Sideways slip allowance used when following curves. Around 2 for
    /// all-omni drivetrains, 8 or more with traction wheels.
    pub horizontal_drift: f64,
}

impl DrivetrainSettings {
    pub fn new(track_width: f64, wheel: Omniwheel, rpm: f64, horizontal_drift: f64) -> Self {
        DrivetrainSettings {
            track_width,
            wheel,
            rpm,
            horizontal_drift,
        }
    }

    /// Distance covered by one wheel revolution, in inches.
    pub fn wheel_circumference(&self) -> f64 { std::f64::consts::PI * self.wheel.diameter() }
}

impl Default for DrivetrainSettings {
    fn default() -> Self { Self::new(9.567, Omniwheel::New325, 450.0, 2.0) }
}

/// Tuning for one feedback controller (lateral or angular).
///
/// Errors are in inches for lateral control and degrees for angular control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    /// Proportional gain.
    pub kp:                  f64,
    /// Integral gain.
    pub ki:                  f64,
    /// Derivative gain.
    pub kd:                  f64,
    /// Integral is only accumulated when the error is within this range.
    pub anti_windup:         f64,
    /// The movement may exit once the error stays below this...
    pub small_error:         f64,
    /// ...for this long.
    pub small_error_timeout: Duration,
    /// Looser exit range, paired with a longer timeout.
    pub large_error:         f64,
    pub large_error_timeout: Duration,
    /// Maximum output change per cycle. Zero disables slew limiting.
    pub slew:                f64,
}

impl ControllerSettings {
    pub const fn new(
        kp: f64,
        ki: f64,
        kd: f64,
        anti_windup: f64,
        small_error: f64,
        small_error_timeout: Duration,
        large_error: f64,
        large_error_timeout: Duration,
        slew: f64,
    ) -> Self {
        ControllerSettings {
            kp,
            ki,
            kd,
            anti_windup,
            small_error,
            small_error_timeout,
            large_error,
            large_error_timeout,
            slew,
        }
    }

    /// Default lateral (forward/backward) tuning.
    pub const fn lateral() -> Self {
        Self::new(
            10.0,
            0.0,
            3.0,
            3.0,
            1.0,
            Duration::from_millis(100),
            3.0,
            Duration::from_millis(500),
            20.0,
        )
    }

    /// Default angular (turning) tuning.
    pub const fn angular() -> Self {
        Self::new(
            2.0,
            0.0,
            10.0,
            3.0,
            1.0,
            Duration::from_millis(100),
            3.0,
            Duration::from_millis(500),
            0.0,
        )
    }
}

/// Complete robot configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotConfig {
    pub drivetrain:     DrivetrainSettings,
    pub lateral:        ControllerSettings,
    pub angular:        ControllerSettings,
    /// Shaping for the forward axis (left stick Y).
    pub throttle_curve: ExpoDriveCurve,
    /// Shaping for the turn axis (right stick X).
    pub steer_curve:    ExpoDriveCurve,
    /// Time between driver control cycles.
    pub loop_period:    Duration,
    /// Minimum level written by the logger.
    pub log_level:      LevelFilter,
}

impl Default for RobotConfig {
    fn default() -> Self {
        RobotConfig {
            drivetrain:     DrivetrainSettings::default(),
            lateral:        ControllerSettings::lateral(),
            angular:        ControllerSettings::angular(),
            throttle_curve: ExpoDriveCurve::new(3.0, 10.0, 1.019),
            steer_curve:    ExpoDriveCurve::new(3.0, 10.0, 1.019),
            loop_period:    LOOPRATE,
            log_level:      LevelFilter::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drivetrain() {
        let dt = DrivetrainSettings::default();
        assert_eq!(dt.track_width, 9.567);
        assert_eq!(dt.wheel.diameter(), 3.25);
        assert_eq!(dt.rpm, 450.0);
        assert_eq!(dt.horizontal_drift, 2.0);
        assert!((dt.wheel_circumference() - 10.2101761).abs() < 1e-6);
    }

    #[test]
    fn default_tuning() {
        let config = RobotConfig::default();
        assert_eq!(config.lateral.kp, 10.0);
        assert_eq!(config.lateral.kd, 3.0);
        assert_eq!(config.lateral.slew, 20.0);
        assert_eq!(config.angular.kp, 2.0);
        assert_eq!(config.angular.kd, 10.0);
        assert_eq!(config.angular.slew, 0.0);
        assert_eq!(config.angular.large_error_timeout, Duration::from_millis(500));
    }

    #[test]
    fn default_driver_settings() {
        let config = RobotConfig::default();
        assert_eq!(config.throttle_curve, ExpoDriveCurve::default());
        assert_eq!(config.steer_curve, config.throttle_curve);
        assert_eq!(config.loop_period, Duration::from_millis(10));
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
