//! Dirprobe engine: work distribution, probing, and result aggregation.
mod collector;
mod progress;
mod queue;
mod scanner;
mod transport;
mod wordlist;
mod worker;

pub use collector::ResultCollector;
pub use progress::{NullProgress, ProgressSink};
pub use queue::{WorkQueue, WorkQueueHandle};
pub use scanner::{ScanConfig, ScanError, ScanReport, Scanner};
pub use transport::{ProbeError, ProbeResponse, ProbeSettings, ProbeTransport, ReqwestTransport};
pub use wordlist::{load_wordlist, WordlistError};
