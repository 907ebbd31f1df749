use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Info,
    Debug,
}

pub struct Logger {
    prefix: Option<String>,
    max_level: LogLevel,
}

impl Logger {
    fn new(prefix: Option<String>, max_level: LogLevel) -> Self {
        Self { prefix, max_level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.max_level
    }

    fn format_line(&self, level: LogLevel, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let level_tag = match level {
            LogLevel::Info => "",
            LogLevel::Debug => "[debug]",
        };
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}]{} {}", timestamp, prefix, level_tag, message),
            None => format!("[{}]{} {}", timestamp, level_tag, message),
        }
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if self.enabled(level) {
            println!("{}", self.format_line(level, message));
        }
    }
}

/// First call wins; later calls are ignored.
pub fn init_logger(prefix: Option<String>, max_level: LogLevel) {
    LOGGER.get_or_init(|| Logger::new(prefix, max_level));
}

pub fn log(level: LogLevel, message: &str) {
    match LOGGER.get() {
        Some(logger) => logger.log(level, message),
        None if level == LogLevel::Info => {
            eprintln!("Logger not initialized! Call init_logger() first.");
        }
        None => {}
    }
}

pub fn debug_enabled() -> bool {
    LOGGER
        .get()
        .is_some_and(|logger| logger.enabled(LogLevel::Debug))
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, &format!($($arg)*))
    };
}

/// Skips formatting entirely unless debug output is on.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logger::debug_enabled() {
            $crate::logger::log($crate::logger::LogLevel::Debug, &format!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_logger_filters_debug() {
        let logger = Logger::new(None, LogLevel::Info);
        assert!(logger.enabled(LogLevel::Info));
        assert!(!logger.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_line_contains_prefix_and_message() {
        let logger = Logger::new(Some("Snake".to_string()), LogLevel::Debug);
        let line = logger.format_line(LogLevel::Debug, "apple placed");
        assert!(line.contains("[Snake][debug] apple placed"), "{}", line);
    }

    #[test]
    fn test_line_without_prefix() {
        let logger = Logger::new(None, LogLevel::Info);
        let line = logger.format_line(LogLevel::Info, "game over");
        assert!(line.ends_with("] game over"), "{}", line);
    }
}
