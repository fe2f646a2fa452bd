use std::sync::{Arc, Mutex};

/// Shared append-only list of formatted match lines.
///
/// Clones share the same underlying list. One mutex makes each append
/// atomic with respect to the others; the resulting order is whatever
/// interleaving of completion times the run produced.
#[derive(Clone, Default)]
pub struct ResultCollector {
    lines: Arc<Mutex<Vec<String>>>,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, line: String) {
        self.lock().push(line);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drain the collected lines. The orchestrator calls this once, after
    /// every worker has been joined.
    pub fn take_lines(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A poisoned lock means some worker panicked mid-run; the lines
        // already appended are still intact.
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
