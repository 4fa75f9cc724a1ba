//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate. Every record is printed to the console and, when a
//! log file is configured, appended to that file as well.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// Custom logger implementation
pub struct Logger {
    /// Optional file handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level that is emitted
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Optional path to a log file, truncated on creation
    /// * `level` - Most verbose level to emit
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: Option<&Path>, level: LevelFilter) -> io::Result<Self> {
        let file = log_file.map(File::create).transpose()?;
        Ok(Logger {
            file: Mutex::new(file),
            level,
        })
    }

    /// Appends a line to the log file, if one is configured
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        let mut guard = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger(log_file: Option<&Path>, level: LevelFilter) -> io::Result<()> {
        let global_logger = Logger::new(log_file, level)?;

        // Only called once at startup; a second call keeps the first logger
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
            let _ = self.write_line(&message);

            // Also print to console
            println!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in write_line
    }
}
