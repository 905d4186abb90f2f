use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => {
                println!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
            }
            None => println!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }
}

/// Installs the process-wide logger. Later calls are ignored.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

pub fn is_verbose() -> bool {
    LOGGER.get().is_some_and(|logger| logger.verbose)
}

// Messages are dropped until init_logger is called (unit tests, benches).
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

/// Like `log!`, but only prints when the logger was initialized as verbose.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            $crate::logger::log(file!(), line!(), &format!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    // No test in this crate installs the global logger.
    #[test]
    fn test_uninitialized_logger_is_quiet() {
        assert!(!is_verbose());
        log("logger.rs", 1, "dropped");
        crate::trace!("dropped {}", 1);
    }

    #[test]
    fn test_verbose_flag_is_kept_per_logger() {
        assert!(Logger::new(None, true).verbose);
        assert!(!Logger::new(Some("Snake".to_string()), false).verbose);
    }
}
