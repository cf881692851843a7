//! Operator control for driver control periods.
//!
//! Maps controller input to the drivetrain and the roller mechanism every
//! cycle.
//!
//! # Example
//!
//! ```ignore
//! use talos::opcontrol::{driver::OpControl, rollers::Rollers};
//!
//! let rollers = Rollers::new(intake, indexer, roller);
//! let mut op = OpControl::new(peripherals.primary_controller, drivetrain, rollers);
//! op.run().await;
//! ```

/// The fixed-period driver control cycle.
pub mod driver;

/// Roller mode selection and the intake, indexer and roller motors.
pub mod rollers;
