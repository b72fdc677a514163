//! Console logger for the `log` facade.
//!
//! Warnings and errors go to stderr prefixed with their level; `--debug`
//! adds debug lines. The logger counts warnings so the CLI can report how
//! many elements were skipped during a build.

use log::{Level, LevelFilter, Metadata, Record};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone)]
pub struct ConsoleLogger {
    level: LevelFilter,
    warnings: Arc<AtomicUsize>,
}

impl ConsoleLogger {
    pub fn new(debug: bool) -> Self {
        Self {
            level: if debug {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
            warnings: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Install as the global logger. The returned handle shares the counter.
    pub fn init(self) -> Result<Self, log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self.clone()))?;
        log::set_max_level(self.level);
        Ok(self)
    }

    /// Warnings and errors logged so far.
    pub fn warning_count(&self) -> usize {
        self.warnings.load(Ordering::Relaxed)
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if record.level() <= Level::Warn {
            self.warnings.fetch_add(1, Ordering::Relaxed);
        }
        // Info is progress output and belongs on stdout via `output`.
        if record.level() != Level::Info {
            eprintln!("{}", format_line(record.level(), &record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

pub fn format_line(level: Level, message: &str) -> String {
    let label = match level {
        Level::Warn => "warning".to_string(),
        other => other.as_str().to_lowercase(),
    };
    format!("{label}: {message}")
}
