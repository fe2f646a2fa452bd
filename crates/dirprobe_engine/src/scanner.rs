//! Scan orchestration: a fixed pool of probe threads over a shared queue.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use dirprobe_core::MatchCodeSet;
use thiserror::Error;

use crate::worker::worker_loop;
use crate::{
    ProbeError, ProbeSettings, ProbeTransport, ProgressSink, ReqwestTransport, ResultCollector,
    WorkQueue,
};

/// Everything a worker needs to turn a word into a probe.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Base URL with trailing slashes already stripped.
    pub base_url: String,
    /// Number of probe threads. The caller validates this against the
    /// wordlist length before the scan starts.
    pub worker_count: usize,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Status codes that make a probe a match.
    pub match_codes: MatchCodeSet,
}

/// What a finished run hands back to the orchestrator.
#[derive(Debug)]
pub struct ScanReport {
    /// Formatted match lines, in completion order.
    pub matches: Vec<String>,
    /// Probes completed, success or failure. Equals the wordlist length
    /// for a run that was not interrupted.
    pub probes_completed: u64,
    /// Wall-clock duration of the probing phase.
    pub elapsed: Duration,
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan requires at least one worker")]
    NoWorkers,
    #[error("worker {id} could not build its transport: {source}")]
    Transport { id: usize, source: ProbeError },
    #[error("worker {id} could not be spawned: {source}")]
    Spawn {
        id: usize,
        source: std::io::Error,
    },
    #[error("worker {id} panicked")]
    WorkerPanicked { id: usize },
}

/// Fans a wordlist out to `worker_count` OS threads and aggregates their
/// matches.
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Run with reqwest transports, one pooled client per worker.
    pub fn run(
        &self,
        words: Vec<String>,
        sink: Arc<dyn ProgressSink>,
    ) -> Result<ScanReport, ScanError> {
        let settings = ProbeSettings {
            timeout: self.config.timeout,
        };
        self.run_with(words, sink, |_id| {
            ReqwestTransport::new(&settings)
                .map(|transport| Box::new(transport) as Box<dyn ProbeTransport>)
        })
    }

    /// Run with caller-supplied transports. The factory is invoked once
    /// per worker, on the orchestrating thread, before that worker spawns.
    pub fn run_with<F>(
        &self,
        words: Vec<String>,
        sink: Arc<dyn ProgressSink>,
        mut transports: F,
    ) -> Result<ScanReport, ScanError>
    where
        F: FnMut(usize) -> Result<Box<dyn ProbeTransport>, ProbeError>,
    {
        // Zero workers can never drain the queue.
        if self.config.worker_count == 0 {
            return Err(ScanError::NoWorkers);
        }

        let queue = WorkQueue::from_words(words);
        let collector = ResultCollector::new();
        let completed = Arc::new(AtomicU64::new(0));
        let config = Arc::new(self.config.clone());

        let started = Instant::now();

        let mut handles = Vec::with_capacity(self.config.worker_count);
        for id in 0..self.config.worker_count {
            let transport = transports(id).map_err(|source| ScanError::Transport { id, source })?;
            let queue = queue.handle();
            let collector = collector.clone();
            let completed = Arc::clone(&completed);
            let config = Arc::clone(&config);
            let sink = Arc::clone(&sink);

            let handle = thread::Builder::new()
                .name(format!("probe-{id}"))
                .spawn(move || {
                    worker_loop(
                        id,
                        queue,
                        transport.as_ref(),
                        &config,
                        &collector,
                        &completed,
                        sink.as_ref(),
                    )
                })
                .map_err(|source| ScanError::Spawn { id, source })?;
            handles.push(handle);
        }

        for (id, handle) in handles.into_iter().enumerate() {
            handle.join().map_err(|_| ScanError::WorkerPanicked { id })?;
        }

        sink.finish();

        Ok(ScanReport {
            matches: collector.take_lines(),
            probes_completed: completed.load(Ordering::Relaxed),
            elapsed: started.elapsed(),
        })
    }
}
