//! Browser console backend for the `log` facade.
//!
//! The core crate logs through `log`; this routes records to
//! `console.error` / `warn` / `info` / `debug` so they show up in the
//! host's developer tools with the right severity.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Console line for a record (e.g., "[neighbour_nav_core::navigator] next ...").
fn format_record(record: &Record<'_>) -> String {
    format!("[{}] {}", record.target(), record.args())
}

/// Install the console logger with the given maximum level.
///
/// Safe to call more than once; later calls only change the level.
pub fn init(level: LevelFilter) {
    // set_logger fails if a logger is already installed, which is fine
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Parse a level name from the host ("debug", "WARN", ...).
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record() {
        assert_eq!(
            format_record(
                &Record::builder()
                    .args(format_args!("opened {}", "notes/2.md"))
                    .level(Level::Debug)
                    .target("neighbour_nav_core::navigator")
                    .build()
            ),
            "[neighbour_nav_core::navigator] opened notes/2.md"
        );
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("loud"), None);
    }
}
