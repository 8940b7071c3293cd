pub use log::{debug, error, info, log, log_enabled, trace, warn, Level, LevelFilter};
use once_cell::sync::OnceCell;

static LOG: OnceCell<Log> = OnceCell::new();

/// Log configuration
pub struct Log {
    /// Initialization time (for relative time stamps)
    pub instant: std::time::Instant,
    /// Log level configuration for different targets
    pub targets: Vec<(String, LevelFilter)>,
}

/// Subscription failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeError {
    /// `Log::subscribe` was already called once
    AlreadySubscribed,
    /// Another `log` implementation is installed
    ForeignLogger,
}

impl std::fmt::Display for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscribeError::AlreadySubscribed => {
                write!(f, "Log subscription must be initiated only once")
            }
            SubscribeError::ForeignLogger => write!(f, "Other log subscription already exists"),
        }
    }
}

impl std::error::Error for SubscribeError {}

impl Default for Log {
    fn default() -> Self {
        Self {
            instant: std::time::Instant::now(),
            targets: vec![],
        }
    }
}

impl log::Log for Log {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.allows(metadata.target(), metadata.level())
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let elapsed = self.instant.elapsed().as_secs_f64();
            println!(
                "{:.4} {} {} - {}",
                elapsed,
                level_mark(record.level()),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

impl Log {
    /// Sets max logging level for the specified target module name prefix
    pub fn level(mut self, target_filter: impl Into<String>, target_level: LevelFilter) -> Self {
        self.targets.push((target_filter.into(), target_level));
        self
    }

    /// Checks the level of a record against the first matching target filter
    pub fn allows(&self, target: &str, level: Level) -> bool {
        for (target_filter, level_filter) in self.targets.iter() {
            if target_filter == "*" || target.starts_with(target_filter.as_str()) {
                return level.to_level_filter() <= *level_filter;
            }
        }
        false
    }

    /// Subscribe to logging with `Log` config
    pub fn subscribe(self) -> Result<(), SubscribeError> {
        let max_level = self
            .targets
            .iter()
            .map(|(_, level_filter)| *level_filter)
            .max()
            .unwrap_or(LevelFilter::Off);

        if LOG.set(self).is_err() {
            return Err(SubscribeError::AlreadySubscribed);
        }

        let logger = LOG.get().ok_or(SubscribeError::AlreadySubscribed)?;
        log::set_logger(logger)
            .map(|()| log::set_max_level(max_level))
            .map_err(|_| SubscribeError::ForeignLogger)
    }
}

fn level_mark(level: Level) -> &'static str {
    match level {
        Level::Error => "!!",
        Level::Warn => "!~",
        Level::Info => "--",
        Level::Debug => "**",
        Level::Trace => "->",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_target_wins() {
        let log = Log::default()
            .level("gymnasia::avatar", LevelFilter::Debug)
            .level("gymnasia", LevelFilter::Warn);

        assert!(log.allows("gymnasia::avatar::high_bar", Level::Debug));
        assert!(!log.allows("gymnasia::loaders", Level::Info));
        assert!(log.allows("gymnasia::loaders", Level::Error));
        assert!(!log.allows("image", Level::Error));
    }

    #[test]
    fn wildcard_matches_everything() {
        let log = Log::default().level("*", LevelFilter::Info);
        assert!(log.allows("anything", Level::Info));
        assert!(!log.allows("anything", Level::Trace));
    }

    #[test]
    fn marks_are_distinct() {
        assert_eq!(level_mark(Level::Error), "!!");
        assert_eq!(level_mark(Level::Warn), "!~");
        assert_eq!(level_mark(Level::Trace), "->");
    }
}
