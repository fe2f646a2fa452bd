//! Work queue distributing words to probe workers.
//!
//! The queue is seeded once, before any worker starts, and the sender is
//! dropped right after. A failed dequeue is therefore the authoritative
//! "drained" signal; `is_empty` is advisory only.

use crossbeam_channel::{unbounded, Receiver};

pub struct WorkQueue {
    rx: Receiver<String>,
    total: usize,
}

impl WorkQueue {
    /// Build the queue pre-loaded with every word, in wordlist order.
    pub fn from_words(words: Vec<String>) -> Self {
        let (tx, rx) = unbounded();
        let total = words.len();
        for word in words {
            // The receiver is still in scope, so the send cannot fail.
            let _ = tx.send(word);
        }
        Self { rx, total }
    }

    /// Handle for one worker. Clones share the same underlying queue.
    pub fn handle(&self) -> WorkQueueHandle {
        WorkQueueHandle {
            rx: self.rx.clone(),
        }
    }

    /// Number of words the queue was seeded with.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Advisory: a worker that sees `false` here may still find the queue
    /// drained by the time it dequeues.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }
}

/// Dequeue side handed to each worker.
#[derive(Clone)]
pub struct WorkQueueHandle {
    rx: Receiver<String>,
}

impl WorkQueueHandle {
    /// Dequeue-or-empty. `None` terminates the worker's loop.
    pub fn next_word(&self) -> Option<String> {
        self.rx.try_recv().ok()
    }
}
