/*
 * Copyright (c) 2025 Dylan Storey
 * Licensed under the Elastic License 2.0.
 * See LICENSE file in the project root for full license text.
 */

//! # IT Docs Logging Module
//!
//! A small `log` backend shared by the itdocs binaries.
//!
//! ## Usage
//!
//! ```ignore
//! itdocs_utils::logging::init_with_format("info", "json")?;
//!
//! use itdocs_utils::logging::prelude::*;
//! info!("catalog loaded");
//! ```
//!
//! The level can be changed at runtime with [`update_log_level`]. Output goes to
//! stderr either as a single text line or as one JSON object per record.

use log::{LevelFilter, Metadata, Record, SetLoggerError};
use once_cell::sync::OnceCell;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

pub use log::{debug, error, info, trace, warn};

static LOGGER: ItdocsLogger = ItdocsLogger;
static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(LevelFilter::Info as u8);
static FORMAT: AtomicU8 = AtomicU8::new(LogFormat::Text as u8);
static INSTALLED: OnceCell<()> = OnceCell::new();

/// Output format of log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text = 0,
    Json = 1,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

/// Process-wide logger writing to stderr.
pub struct ItdocsLogger;

impl ItdocsLogger {
    fn render(&self, record: &Record) -> String {
        if FORMAT.load(Ordering::Relaxed) == LogFormat::Json as u8 {
            serde_json::json!({
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "level": record.level().as_str().to_lowercase(),
                "target": record.target(),
                "message": record.args().to_string(),
                "module": record.module_path(),
                "line": record.line(),
            })
            .to_string()
        } else {
            format!(
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        }
    }
}

impl log::Log for ItdocsLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= current_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", self.render(record));
        }
    }

    fn flush(&self) {}
}

/// Initializes logging at `level` with text output.
pub fn init(level: &str) -> Result<(), SetLoggerError> {
    init_with_format(level, "text")
}

/// Initializes logging at `level` with the given format ("text" or "json").
///
/// The backend is installed once per process; later calls only change the level
/// and format. An unknown level falls back to `info`, an unknown format to
/// `text`.
pub fn init_with_format(level: &str, format: &str) -> Result<(), SetLoggerError> {
    INSTALLED.get_or_try_init(|| log::set_logger(&LOGGER))?;

    let format = format.parse::<LogFormat>().unwrap_or(LogFormat::Text);
    FORMAT.store(format as u8, Ordering::Relaxed);
    set_level(parse_level(level));
    Ok(())
}

/// Updates the current log level. Unknown names are rejected and leave the level unchanged.
pub fn update_log_level(level: &str) -> Result<(), String> {
    match LevelFilter::from_str(level) {
        Ok(filter) => {
            set_level(filter);
            Ok(())
        }
        Err(_) => Err(format!("unknown log level: {}", level)),
    }
}

/// Returns the level currently in effect.
pub fn current_level() -> LevelFilter {
    match CURRENT_LEVEL.load(Ordering::Relaxed) {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn set_level(filter: LevelFilter) {
    CURRENT_LEVEL.store(filter as u8, Ordering::Relaxed);
    log::set_max_level(filter);
}

fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or(LevelFilter::Info)
}

pub mod prelude {
    pub use log::{debug, error, info, trace, warn};
}
