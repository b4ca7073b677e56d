//! Minimal stderr logger for the `log` facade
//!
//! Lines look like `[dropblox] DEBUG dropblox_core::field: dropped block 3 ...`.

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// One formatted log line, without the trailing newline
    pub fn format(record: &Record<'_>) -> String {
        format!("[dropblox] {} {}: {}", record.level(), record.target(), record.args())
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", Self::format(record));
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the logger globally; fails if a logger is already set
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(StderrLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn format_includes_level_and_target() {
        let line = StderrLogger::format(
            &Record::builder()
                .args(format_args!("dropped block {}", 3))
                .level(Level::Debug)
                .target("dropblox_core::field")
                .build(),
        );
        assert_eq!(line, "[dropblox] DEBUG dropblox_core::field: dropped block 3");
    }

    #[test]
    fn respects_level() {
        let logger = StderrLogger::new(LevelFilter::Warn);
        let meta = Metadata::builder().level(Level::Info).build();
        assert!(!logger.enabled(&meta));
        let meta = Metadata::builder().level(Level::Error).build();
        assert!(logger.enabled(&meta));
    }
}
