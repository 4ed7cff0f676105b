// Buffer Logger
//
// Keeps the lines a console logger would print, for inspecting a run.

use std::sync::Mutex;

use super::logger::{format_line, LogLevel, Logger};

#[derive(Debug)]
pub struct BufferLogger {
    level: LogLevel,
    buffer: Mutex<String>,
}

impl BufferLogger {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            buffer: Mutex::new(String::new()),
        }
    }

    /// Everything written so far, one line per message.
    pub fn contents(&self) -> String {
        match self.buffer.lock() {
            Ok(buffer) => buffer.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Logger for BufferLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn write(&self, level: LogLevel, msg: &str) {
        let mut buffer = match self.buffer.lock() {
            Ok(buffer) => buffer,
            Err(poisoned) => poisoned.into_inner(),
        };
        buffer.push_str(&format_line(level, msg));
        buffer.push('\n');
    }
}
