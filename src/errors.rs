use tracing::warn;

/// Append-only log of recoverable failures, surfaced in the final summary.
#[derive(Debug, Default)]
pub struct ErrorLog {
    entries: Vec<String>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one failure description and emit it as a warning.
    pub fn record(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{message}");
        self.entries.push(message);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First `n` entries, for the bounded summary excerpt.
    pub fn first(&self, n: usize) -> &[String] {
        &self.entries[..self.entries.len().min(n)]
    }
}
