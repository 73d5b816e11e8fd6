use std::sync::{Mutex, PoisonError};

use log::Level;

/// Receiver of the reader's diagnostic lines.
///
/// Entries are purely informational: a sink cannot influence the
/// outcome of a load.
pub trait DiagnosticSink {
    fn record(&self, level: Level, tag: &str, message: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn record(&self, level: Level, tag: &str, message: &str) {
        (**self).record(level, tag, message)
    }
}

/// Forwards diagnostics to the `log` facade, using the tag as target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&self, level: Level, tag: &str, message: &str) {
        log::log!(target: tag, level, "{}", message);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub level: Level,
    pub tag: String,
    pub message: String,
}

/// Keeps every entry in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<Entry>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Entries at `Level::Error` or `Level::Warn`.
    pub fn failures(&self) -> Vec<Entry> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.level <= Level::Warn)
            .collect()
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, level: Level, tag: &str, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Entry {
                level,
                tag: tag.to_owned(),
                message: message.to_owned(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::sync::Once;

    thread_local! {
        static CAPTURED: RefCell<Vec<(Level, String, String)>> =
            RefCell::new(Vec::new());
    }

    /// Keeps records per thread so parallel tests don't see each other.
    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            CAPTURED.with(|captured| {
                captured.borrow_mut().push((
                    record.level(),
                    record.target().to_owned(),
                    record.args().to_string(),
                ))
            });
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT: Once = Once::new();

    fn capture() {
        INIT.call_once(|| {
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(log::LevelFilter::Trace);
        });
        CAPTURED.with(|captured| captured.borrow_mut().clear());
    }

    #[test]
    fn log_sink_uses_tag_as_target() {
        capture();

        LogSink.record(Level::Debug, "Minko", "Reading scene.json");
        LogSink.record(Level::Error, "assets", "scene.json is unavailable");

        let captured = CAPTURED.with(|captured| captured.borrow().clone());
        assert_eq!(
            captured,
            vec![
                (
                    Level::Debug,
                    "Minko".to_owned(),
                    "Reading scene.json".to_owned()
                ),
                (
                    Level::Error,
                    "assets".to_owned(),
                    "scene.json is unavailable".to_owned()
                ),
            ]
        );
    }

    #[test]
    fn recording_sink_separates_failures() {
        let sink = RecordingSink::new();
        sink.record(Level::Debug, "Minko", "Reading a.bin");
        sink.record(Level::Error, "Minko", "boom");

        assert_eq!(sink.entries().len(), 2);
        let failures = sink.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].message, "boom");
        assert_eq!(failures[0].tag, "Minko");

        sink.clear();
        assert!(sink.entries().is_empty());
    }
}
