//! Dirprobe core: pure scan rules and report formatting.
mod codes;
mod error;
mod report;
mod target;

pub use codes::{MatchCodeSet, DEFAULT_MATCH_CODES};
pub use error::ConfigError;
pub use report::{format_match_line, DISPLAY_WIDTH};
pub use target::{normalize_base_url, normalize_word, target_url, validate_worker_count};
