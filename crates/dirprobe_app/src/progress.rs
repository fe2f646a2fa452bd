//! Terminal progress rendering for the scan.

use dirprobe_engine::{ProbeError, ProgressSink};
use indicatif::{ProgressBar, ProgressStyle};

/// indicatif-backed progress bar: one tick per completed probe.
pub struct IndicatifSink {
    bar: ProgressBar,
}

impl IndicatifSink {
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .expect("Invalid progress template")
                .progress_chars("#>-"),
        );
        Self { bar }
    }
}

impl ProgressSink for IndicatifSink {
    fn advance(&self, n: u64) {
        self.bar.inc(n);
    }

    fn probe_failed(&self, word: &str, error: &ProbeError) {
        // println through the bar keeps the error line and the bar from
        // tearing each other up.
        self.bar.println(format!("Error for {word}: {error}"));
    }

    fn finish(&self) {
        self.bar.finish();
    }
}

/// Quiet-mode sink: no bar, errors straight to stderr.
pub struct PlainSink;

impl ProgressSink for PlainSink {
    fn advance(&self, _n: u64) {}

    fn probe_failed(&self, word: &str, error: &ProbeError) {
        eprintln!("Error for {word}: {error}");
    }

    fn finish(&self) {}
}
