//! Console Logger
//!
//! A `log` backend for browser apps. Records are formatted with a local
//! timestamp and routed to the matching `console.*` method, so the level
//! filter in devtools works as expected. Off wasm32 it writes to stderr.

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger that writes to the browser console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Install as the global logger
    pub fn init(self) -> Result<(), SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(
            &Local::now().format("%H:%M:%S%.3f").to_string(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install a console logger with the given level
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    ConsoleLogger::new(level).init()
}

/// Format a single log line: `time LEVEL target: message`
pub fn format_record(time: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} {}: {}", time, level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}
