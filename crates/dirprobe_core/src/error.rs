use std::error::Error;
use std::fmt;

/// A configuration problem that must stop the run before any probe is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidUrl { url: String, reason: String },
    UnsupportedScheme { url: String, scheme: String },
    InvalidWorkerCount { requested: usize, wordlist_len: usize },
    InvalidMatchCodes { input: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidUrl { url, reason } => {
                write!(f, "invalid base url {url}: {reason}")
            }
            ConfigError::UnsupportedScheme { url, scheme } => {
                write!(f, "unsupported scheme {scheme} in {url}: expected http or https")
            }
            ConfigError::InvalidWorkerCount {
                requested,
                wordlist_len,
            } => {
                write!(
                    f,
                    "invalid number of threads {requested}: must be > 0 and <= the wordlist size ({wordlist_len})"
                )
            }
            ConfigError::InvalidMatchCodes { input, reason } => {
                write!(f, "invalid match codes {input:?}: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}
