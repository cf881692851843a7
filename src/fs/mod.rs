//! Filesystem utilities for the V5 Brain.
//!
//! # Logging
//!
//! The `logger` submodule provides a file-based logger that writes to
//! `log.txt` on the SD card. This is useful for debugging issues that
//! only occur on the robot.
//!
//! ```ignore
//! use talos::fs::logger;
//! use log::{info, LevelFilter};
//!
//! logger::init(LevelFilter::Debug).expect("Failed to initialize logger");
//! info!("Robot initialized successfully");
//! ```

/// File-based logging for the V5 Brain.
pub mod logger;
