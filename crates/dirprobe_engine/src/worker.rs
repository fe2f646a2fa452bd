//! Probe worker: the loop each pool thread runs until the queue drains.

use std::sync::atomic::{AtomicU64, Ordering};

use dirprobe_core::{format_match_line, normalize_word, target_url};

use crate::queue::WorkQueueHandle;
use crate::scanner::ScanConfig;
use crate::{ProbeTransport, ProgressSink, ResultCollector};

pub(crate) fn worker_loop(
    id: usize,
    queue: WorkQueueHandle,
    transport: &dyn ProbeTransport,
    config: &ScanConfig,
    collector: &ResultCollector,
    completed: &AtomicU64,
    sink: &dyn ProgressSink,
) {
    log::debug!("worker {id} starting");

    while let Some(raw) = queue.next_word() {
        let word = normalize_word(&raw);
        let url = target_url(&config.base_url, word);

        match transport.probe(&url) {
            Ok(response) => {
                if config.match_codes.contains(response.status) {
                    collector.append(format_match_line(
                        word,
                        response.status,
                        response.content_length,
                    ));
                }
            }
            Err(error) => {
                // One failed probe never takes the worker down; report it
                // and move on to the next word.
                log::warn!("worker {id}: probe for {word:?} failed: {error}");
                sink.probe_failed(word, &error);
            }
        }

        completed.fetch_add(1, Ordering::Relaxed);
        sink.advance(1);
    }

    log::debug!("worker {id} finished: queue drained");
}
