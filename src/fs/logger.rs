//! File-based logger implementation for the V5 Brain.
//!
//! This module implements the [`log`] crate's logging facade, writing log
//! messages to both the console (terminal/debug output) and a file on the
//! V5 Brain's SD card.
//!
//! # Usage
//!
//! Initialize the logger once at the start of your program:
//!
//! ```ignore
//! use talos::fs::logger;
//! use log::{info, LevelFilter};
//!
//! logger::init(LevelFilter::Debug)?;
//! info!("Program started");
//! ```
//!
//! # Log Output
//!
//! Each line holds the level, the time since program start, the target
//! (module path) and the message:
//!
//! ```text
//! INFO [2m 5s 123ms] talos::opcontrol::driver - Driver Control Loop Started
//! WARN [2m 5s 456ms] talos::peripherals::controller - Controller State Error: Disconnected
//! ```

use std::{
    fmt,
    fs::OpenOptions,
    io::{BufWriter, Write},
    sync::{Mutex, OnceLock},
    time::Duration,
};

use humantime::format_duration;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use vexide::time::user_uptime;

/// Default log file, in the root of the SD card.
pub const LOG_FILE: &str = "log.txt";

/// A dual-output logger writing to the console and a log file.
pub struct TalosLogger {
    /// `None` when the file could not be opened (e.g. no SD card present);
    /// console output continues regardless.
    file_writer: Mutex<Option<BufWriter<std::fs::File>>>,
}

impl TalosLogger {
    /// Opens `path`, truncating any log from a previous run.
    fn new(path: &str) -> Self {
        let file_writer = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .ok()
            .map(BufWriter::new);

        Self {
            file_writer: Mutex::new(file_writer),
        }
    }
}

impl log::Log for TalosLogger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), get_time(), record.target(), record.args());

        print!("{}", line);

        if let Ok(mut guard) = self.file_writer.lock() {
            if let Some(writer) = guard.as_mut() {
                let _ = writer.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file_writer.lock() {
            if let Some(writer) = guard.as_mut() {
                let _ = writer.flush();
            }
        }
    }
}

static LOGGER: OnceLock<TalosLogger> = OnceLock::new();

/// Initializes the logger, writing to [`LOG_FILE`].
///
/// Must be called once before any logging macros are used; messages logged
/// earlier are dropped.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> { init_with_path(level, LOG_FILE) }

/// Initializes the logger, writing to `path`.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
pub fn init_with_path(level: LevelFilter, path: &str) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| TalosLogger::new(path));
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Formats one log line, newline included.
pub fn format_line(level: Level, uptime: Duration, target: &str, args: &fmt::Arguments) -> String {
    // humantime prints sub-millisecond noise; trim to whole milliseconds
    let uptime = Duration::from_millis(uptime.as_millis() as u64);
    format!("{} [{}] {} - {}\n", level, format_duration(uptime), target, args)
}

/// Time since the user program started.
///
/// Off the Brain (host tests) this is a fixed placeholder.
fn get_time() -> Duration {
    if cfg!(target_os = "vexos") {
        user_uptime()
    } else {
        Duration::from_millis(123432)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use log::{Level, LevelFilter, debug, error, info, trace, warn};

    use super::format_line;

    #[test]
    fn line_format() {
        let line = format_line(
            Level::Warn,
            Duration::from_millis(125_123),
            "talos::peripherals::controller",
            &format_args!("Controller State Error: {}", "Disconnected"),
        );
        assert_eq!(
            line,
            "WARN [2m 5s 123ms] talos::peripherals::controller - Controller State Error: Disconnected\n"
        );
    }

    #[test]
    fn line_format_drops_sub_millisecond() {
        let line = format_line(
            Level::Info,
            Duration::from_micros(1_500),
            "talos",
            &format_args!("ok"),
        );
        assert_eq!(line, "INFO [1ms] talos - ok\n");
    }

    #[test]
    #[ignore = "filesystem access needed (file write)"]
    fn log_full_test() {
        super::init(LevelFilter::Trace).expect("Failed to initialize logger");

        trace!("This is a trace message");
        debug!("This is a debug message");
        info!("This is an info message");
        warn!("This is a warning message");
        error!("This is an error message");

        log::logger().flush();

        assert!(
            log::logger().enabled(
                &log::Metadata::builder()
                    .level(log::Level::Error)
                    .target("test")
                    .build()
            )
        );
    }
}
