//! Internal logging system for the particle octree
//!
//! This module provides a flexible logging system with:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - Thread-safe global logger slot with RwLock
//! - File and line information for detailed ERROR logs

use colored::*;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Logger trait for custom logging implementations
///
/// Implement this trait to create custom loggers (file logging, test capture, etc.)
///
/// # Example
///
/// ```no_run
/// use particle_octree::octree3d::log::{Logger, LogEntry};
///
/// struct FileLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);

    /// Whether entries of this severity would be kept
    ///
    /// The `octree_*!` macros skip formatting when this returns false.
    fn enabled(&self, _severity: LogSeverity) -> bool {
        true
    }
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "particle_octree::Octree")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-node events (splits, removal misses)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (with file:line details)
    Error,
}

/// Default logger implementation using colored console output
///
/// Entries below `min_severity` are dropped. The octree reports every split
/// at Trace, so the default threshold is Info.
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger {
    min_severity: LogSeverity,
}

impl DefaultLogger {
    pub fn new() -> Self {
        Self::with_min_severity(LogSeverity::Info)
    }

    pub fn with_min_severity(min_severity: LogSeverity) -> Self {
        Self { min_severity }
    }

    pub fn min_severity(&self) -> LogSeverity {
        self.min_severity
    }

    /// Build the console line for an entry (without trailing newline)
    pub fn format_entry(entry: &LogEntry) -> String {
        // YYYY-MM-DD HH:MM:SS.mmm
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity_str, source, entry.message, file, line
            )
        } else {
            format!("[{}] [{}] [{}] {}", timestamp, severity_str, source, entry.message)
        }
    }
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        if !self.enabled(entry.severity) {
            return;
        }
        println!("{}", Self::format_entry(entry));
    }

    fn enabled(&self, severity: LogSeverity) -> bool {
        severity >= self.min_severity
    }
}

// ===== GLOBAL LOGGER FACADE =====

/// Access point for the process-wide logger
///
/// The `octree_*!` macros route through [`Log::log`] and [`Log::log_detailed`].
pub struct Log;

impl Log {
    fn slot() -> &'static RwLock<Box<dyn Logger>> {
        LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::new())))
    }

    /// Replace the global logger
    ///
    /// # Example
    ///
    /// ```no_run
    /// use particle_octree::octree3d::Log;
    /// use particle_octree::octree3d::log::{DefaultLogger, LogSeverity};
    ///
    /// Log::set_logger(DefaultLogger::with_min_severity(LogSeverity::Trace));
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = Self::slot().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger, Info threshold)
    pub fn reset_logger() {
        if let Ok(mut lock) = Self::slot().write() {
            *lock = Box::new(DefaultLogger::new());
        }
    }

    /// Whether the current logger keeps entries of this severity
    pub fn enabled(severity: LogSeverity) -> bool {
        match Self::slot().read() {
            Ok(lock) => lock.enabled(severity),
            Err(_) => false,
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like octree_info!, octree_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = Self::slot().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = Self::slot().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose, dropped by the default logger)
///
/// # Example
///
/// ```no_run
/// particle_octree::octree_trace!("particle_octree::Octree", "Split node at depth {}", 3);
/// ```
#[macro_export]
macro_rules! octree_trace {
    ($source:expr, $($arg:tt)*) => {
        if $crate::octree3d::Log::enabled($crate::octree3d::log::LogSeverity::Trace) {
            $crate::octree3d::Log::log(
                $crate::octree3d::log::LogSeverity::Trace,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a DEBUG message (development information)
#[macro_export]
macro_rules! octree_debug {
    ($source:expr, $($arg:tt)*) => {
        if $crate::octree3d::Log::enabled($crate::octree3d::log::LogSeverity::Debug) {
            $crate::octree3d::Log::log(
                $crate::octree3d::log::LogSeverity::Debug,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an INFO message (important events)
///
/// # Example
///
/// ```no_run
/// particle_octree::octree_info!("demo", "Inserted {} particles", 1000);
/// ```
#[macro_export]
macro_rules! octree_info {
    ($source:expr, $($arg:tt)*) => {
        if $crate::octree3d::Log::enabled($crate::octree3d::log::LogSeverity::Info) {
            $crate::octree3d::Log::log(
                $crate::octree3d::log::LogSeverity::Info,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a WARN message (potential issues)
#[macro_export]
macro_rules! octree_warn {
    ($source:expr, $($arg:tt)*) => {
        if $crate::octree3d::Log::enabled($crate::octree3d::log::LogSeverity::Warn) {
            $crate::octree3d::Log::log(
                $crate::octree3d::log::LogSeverity::Warn,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! octree_error {
    ($source:expr, $($arg:tt)*) => {
        if $crate::octree3d::Log::enabled($crate::octree3d::log::LogSeverity::Error) {
            $crate::octree3d::Log::log_detailed(
                $crate::octree3d::log::LogSeverity::Error,
                $source,
                format!($($arg)*),
                file!(),
                line!()
            )
        }
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
