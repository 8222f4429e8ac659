//! Logger plumbing.
//!
//! The client writes to the [`log::Log`] instance it was configured with
//! instead of the process-wide `log` macros, so two clients in one process
//! can log at different levels.

use std::fmt;
use std::sync::Arc;

use log::{Level, Log, Metadata, Record};

/// Shared logger handle carried by [`ClientConfig`](crate::ClientConfig).
pub type Logger = Arc<dyn Log + Send + Sync>;

pub const TARGET: &str = "thumbtack";

/// Send one record to `logger` if it is enabled for `level`.
pub fn emit(logger: &dyn Log, level: Level, args: fmt::Arguments<'_>) {
    let metadata = Metadata::builder().level(level).target(TARGET).build();
    if !logger.enabled(&metadata) {
        return;
    }
    logger.log(
        &Record::builder()
            .metadata(metadata)
            .args(args)
            .module_path_static(Some(module_path!()))
            .build(),
    );
}

struct Silent;

impl Log for Silent {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        false
    }

    fn log(&self, _: &Record<'_>) {}

    fn flush(&self) {}
}

/// A logger that drops everything.
pub fn silent() -> Logger {
    Arc::new(Silent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Capture {
        max: Option<Level>,
        lines: Mutex<Vec<String>>,
    }

    impl Log for Capture {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            self.max.is_some_and(|max| metadata.level() <= max)
        }

        fn log(&self, record: &Record<'_>) {
            self.lines
                .lock()
                .unwrap()
                .push(format!("{} {}", record.level(), record.args()));
        }

        fn flush(&self) {}
    }

    #[test]
    fn test_emit_respects_instance_level() {
        let capture = Capture {
            max: Some(Level::Info),
            ..Capture::default()
        };
        emit(&capture, Level::Debug, format_args!("hidden"));
        emit(&capture, Level::Error, format_args!("op={} shown", "PostsAdd"));
        assert_eq!(
            *capture.lines.lock().unwrap(),
            vec!["ERROR op=PostsAdd shown".to_string()]
        );
    }

    #[test]
    fn test_silent_logger_is_disabled() {
        let logger = silent();
        let metadata = Metadata::builder().level(Level::Error).build();
        assert!(!logger.enabled(&metadata));
    }
}
