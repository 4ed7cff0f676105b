// Console Logger
//
// Progress (`[INFO]`) goes to stdout so it can be piped; debug output,
// warnings and errors go to stderr.

use std::io::{self, Write};

use super::logger::{format_line, LogLevel, Logger};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    pub fn for_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Info => Stream::Stdout,
            LogLevel::Debug | LogLevel::Warn | LogLevel::Error => Stream::Stderr,
        }
    }
}

#[derive(Debug)]
pub struct ConsoleLogger {
    level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }
}

impl Logger for ConsoleLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn write(&self, level: LogLevel, msg: &str) {
        let line = format_line(level, msg);
        // a closed pipe must not abort the merge
        let _ = match Stream::for_level(level) {
            Stream::Stdout => writeln!(io::stdout().lock(), "{}", line),
            Stream::Stderr => writeln!(io::stderr().lock(), "{}", line),
        };
    }
}
