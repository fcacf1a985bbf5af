//! Logging capability injected into the fetcher

use std::sync::{Arc, Mutex};

/// Sink for the error messages a fetch emits when it gives up on a document
pub trait Logger: Send + Sync {
    fn error(&self, message: &str);
}

/// Forwards to `tracing` at error level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Keeps every message in memory
///
/// Meant for tests of code built on a [`crate::Fetcher`]: hand a clone to
/// the fetcher and inspect [`RecordingLogger::messages`] afterwards.
///
/// ```
/// use dd_fetch::{Logger, RecordingLogger};
///
/// let logger = RecordingLogger::new();
/// logger.error("https://dd.b.pvp.net/... returned status code 404 Not Found.");
///
/// assert_eq!(logger.messages().len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordingLogger {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Logger for RecordingLogger {
    fn error(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}
