//! Dispatcher diagnostics
//!
//! Every message the crate emits goes through one process-wide [`Logger`].
//! Out of the box that is [`DefaultLogger`], which prints colored lines to
//! stdout. Hosts that own a console or log file install their own sink with
//! [`set_logger`]; tests use the same hook to capture entries.
//!
//! Only ERROR entries carry a source location.

use colored::*;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Destination for dispatcher log entries
///
/// # Example
///
/// ```no_run
/// use prim_dispatch::prim::log::{Logger, LogEntry, LogSeverity, set_logger};
///
/// struct ErrorsToStderr;
///
/// impl Logger for ErrorsToStderr {
///     fn log(&self, entry: &LogEntry) {
///         if entry.severity == LogSeverity::Error {
///             eprintln!("{}: {}", entry.source, entry.message);
///         }
///     }
/// }
///
/// set_logger(ErrorsToStderr);
/// ```
pub trait Logger: Send + Sync {
    fn log(&self, entry: &LogEntry);
}

/// One emitted message
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,
    pub timestamp: SystemTime,
    /// Emitting component, e.g. "prim::Dispatcher" or "prim::Bitmap"
    pub source: String,
    pub message: String,
    /// Set for ERROR entries only
    pub file: Option<&'static str>,
    /// Set for ERROR entries only
    pub line: Option<u32>,
}

/// Message severity, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// One line per draw call, see `Config::log_draw_calls`
    Trace,
    /// Decisions worth knowing when debugging (e.g. no native layout built)
    Debug,
    /// Backend registration
    Info,
    Warn,
    /// Failed operations; carries file and line
    Error,
}

impl LogSeverity {
    fn label(self) -> ColoredString {
        match self {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        }
    }
}

/// Colored stdout sink installed until [`set_logger`] is called
///
/// Lines look like `[2026-01-01 12:00:00.000] [INFO ] [prim::Dispatcher] message`,
/// with ` (file:line)` appended when the entry has a location.
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let local: DateTime<Local> = entry.timestamp.into();
        let location = match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(" ({}:{})", file, line),
            _ => String::new(),
        };

        println!(
            "[{}] [{}] [{}] {}{}",
            local.format("%Y-%m-%d %H:%M:%S%.3f"),
            entry.severity.label(),
            entry.source.bright_blue(),
            entry.message,
            location
        );
    }
}

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

/// Route all further entries to `sink`
pub fn set_logger<L: Logger + 'static>(sink: L) {
    if let Ok(mut current) = logger().write() {
        *current = Box::new(sink);
    }
}

/// Go back to [`DefaultLogger`]
pub fn reset_logger() {
    if let Ok(mut current) = logger().write() {
        *current = Box::new(DefaultLogger);
    }
}

fn emit(severity: LogSeverity, source: &str, message: String, location: Option<(&'static str, u32)>) {
    // A poisoned lock means a sink panicked; drop the entry
    if let Ok(current) = logger().read() {
        current.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: location.map(|(file, _)| file),
            line: location.map(|(_, line)| line),
        });
    }
}

/// Emit an entry without a location (backs `prim_trace!` to `prim_warn!`)
pub fn log(severity: LogSeverity, source: &str, message: String) {
    emit(severity, source, message, None);
}

/// Emit an entry tagged with `file:line` (backs `prim_error!` and `prim_err!`)
pub fn log_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    emit(severity, source, message, Some((file, line)));
}

// ===== MACROS =====

#[macro_export]
macro_rules! prim_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Trace, $source, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! prim_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Debug, $source, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! prim_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Info, $source, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! prim_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Warn, $source, format!($($arg)*))
    };
}

/// ERROR entry carrying the caller's `file!()` and `line!()`
///
/// ```ignore
/// prim_error!("prim::Dispatcher", "Backend failed: {}", error);
/// ```
#[macro_export]
macro_rules! prim_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
