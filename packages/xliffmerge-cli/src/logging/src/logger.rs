// Logger Interface
//
// Every sink implements `write`; the per-level methods filter by the
// configured level and funnel into it.

use std::fmt;

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    /// Level selected by the `--verbose` / `--quiet` flags. Quiet wins.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            LogLevel::Error
        } else if verbose {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// `[LEVEL] message`, the line shape shared by all sinks.
pub fn format_line(level: LogLevel, msg: &str) -> String {
    format!("[{}] {}", level.tag(), msg)
}

/// Shared with the per-language workers, hence `Send + Sync`.
pub trait Logger: Send + Sync {
    fn level(&self) -> LogLevel;

    /// Emits one message that already passed the level filter.
    fn write(&self, level: LogLevel, msg: &str);

    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    fn log(&self, level: LogLevel, msg: &str) {
        if self.is_enabled(level) {
            self.write(level, msg);
        }
    }

    fn debug(&self, msg: &str) {
        self.log(LogLevel::Debug, msg);
    }

    fn info(&self, msg: &str) {
        self.log(LogLevel::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.log(LogLevel::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.log(LogLevel::Error, msg);
    }
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn level(&self) -> LogLevel {
        LogLevel::Error
    }

    fn write(&self, _level: LogLevel, _msg: &str) {}
}
