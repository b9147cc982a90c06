//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

use crate::coordinate::CoordinateList;

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output, if any
    file: Mutex<Option<File>>,
    /// Most verbose level this logger records
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: LevelFilter::Debug,
        })
    }

    /// Creates a logger that keeps no file; `log` calls become no-ops
    pub fn without_file() -> Self {
        Logger {
            file: Mutex::new(None),
            level: LevelFilter::Debug,
        }
    }

    /// Sets the most verbose level recorded through the `log` crate
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs every coordinate of a path, one per line
    ///
    /// # Arguments
    ///
    /// * `title` - Heading written before the coordinates
    /// * `coordinates` - The path to record
    pub fn log_coordinates(&self, title: &str, coordinates: &CoordinateList) -> io::Result<()> {
        self.log(&format!("{} ({} points):", title, coordinates.len()))?;

        for (i, coordinate) in coordinates.iter().enumerate() {
            let message = format!(
                "  #{}: lat={}, lon={}",
                i, coordinate.latitude(), coordinate.longitude()
            );
            self.log(&message)?;
        }

        Ok(())
    }

    /// Static method to initialize the global logger
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path of the file the global logger writes to
    /// * `level` - Most verbose level to record
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> io::Result<()> {
        // Create a dedicated logger for the log crate
        let global_logger = Logger::new(log_file)?.with_level(level);

        // Only the first installation wins; later calls keep the existing logger
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // Also echo to stderr; stdout carries command output
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
