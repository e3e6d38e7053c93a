use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};

/// Timestamped log lines on stderr, keeping stdout for command output
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Info by default, one more level of detail per `-v`
    pub fn from_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        Self::new(level)
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let target = if record.level() >= Level::Debug {
                record.target()
            } else {
                "pjig"
            };
            eprintln!(
                "{} {:<5} {}: {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                target,
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(StderrLogger::from_verbosity(0).level, LevelFilter::Info);
        assert_eq!(StderrLogger::from_verbosity(1).level, LevelFilter::Debug);
        assert_eq!(StderrLogger::from_verbosity(5).level, LevelFilter::Trace);
    }

    #[test]
    fn test_init_installs_logger() -> anyhow::Result<()> {
        StderrLogger::from_verbosity(1).init()?;
        assert_eq!(log::max_level(), LevelFilter::Debug);
        Ok(())
    }
}
