//! `log` backend writing to the browser console.
//!
//! The shared crate logs through `tracing`; with no tracing subscriber
//! installed those events are forwarded to `log` and end up here.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::any::Any;
use std::panic::Location;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Console logger, one console method per level.
#[derive(Debug)]
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Installs the console logger.
///
/// # Errors
/// Fails if a logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// Reports panics through the logger, payload and location untruncated.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        log::error!("{}", describe_panic(info.payload(), info.location()));
    }));
}

fn describe_panic(payload: &(dyn Any + Send), location: Option<&Location<'_>>) -> String {
    let message = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .map_or_else(|| "Unknown panic".to_string(), |s| format!("Panic: {s}"));
    match location {
        Some(location) => format!(
            "{message}\n  at {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ),
        None => message,
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}
