//! # Talos
//!
//! Operator control and drivetrain configuration for a VEX V5 competition
//! robot, built on top of [Vexide](https://vexide.dev):
//!
//! - **Drivetrain**: a six-motor differential drive steered with curvature
//!   drive, with exponential stick curves and a deadband.
//! - **Rollers**: an intake, indexer and scoring roller driven as one
//!   mechanism with five button-selected modes.
//! - **Logging**: a file-based logger for debugging on the robot.
//!
//! ## Quick Start
//!
//! ```ignore
//! use talos::{config::RobotConfig, robot::{self, Robot}};
//! use vexide::prelude::*;
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     let config = RobotConfig::default();
//!     robot::initialize(&config);
//!     Robot::new(peripherals, config).compete().await;
//! }
//! ```

/// Robot configuration: drivetrain geometry, controller tuning, drive curves.
pub mod config;

/// Filesystem utilities module.
///
/// Contains logging functionality for recording robot telemetry and debug
/// information to files on the V5 Brain's SD card.
pub mod fs;

/// Operator control module.
///
/// Maps controller input to the drivetrain and the roller mechanism during
/// driver control.
pub mod opcontrol;

/// Controller sampling, drivetrain control and drive curves.
pub mod peripherals;

/// Hardware map and competition lifecycle.
pub mod robot;
