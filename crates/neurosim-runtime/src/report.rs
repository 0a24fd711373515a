//! User-facing status output.
//!
//! Setup steps print through a [`Reporter`] so adapters decide where the
//! lines go and tests can assert on exactly what was printed, in order.

use std::sync::Mutex;

/// Sink for the status lines a setup run prints.
pub trait Reporter: Send + Sync {
    /// Emit one message (may contain newlines).
    fn message(&self, msg: &str);
}

/// Prints every message to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn message(&self, msg: &str) {
        println!("{msg}");
    }
}

/// Keeps messages in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    lines: Mutex<Vec<String>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl Reporter for MemoryReporter {
    fn message(&self, msg: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(msg.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reporter_keeps_order() {
        let reporter = MemoryReporter::new();
        reporter.message("first");
        reporter.message("second");
        assert_eq!(reporter.lines(), vec!["first", "second"]);
    }
}
