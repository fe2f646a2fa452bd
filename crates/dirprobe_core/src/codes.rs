use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

/// Status codes considered interesting enough to report.
pub const DEFAULT_MATCH_CODES: [u16; 6] = [200, 301, 302, 401, 403, 429];

/// The set of HTTP status codes a probe must return to count as a match.
///
/// Fixed at startup and read-only for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCodeSet {
    codes: Vec<u16>,
}

impl MatchCodeSet {
    pub fn new(codes: Vec<u16>) -> Self {
        let mut deduped: Vec<u16> = Vec::with_capacity(codes.len());
        for code in codes {
            if !deduped.contains(&code) {
                deduped.push(code);
            }
        }
        Self { codes: deduped }
    }

    pub fn contains(&self, status: u16) -> bool {
        self.codes.contains(&status)
    }

    pub fn codes(&self) -> &[u16] {
        &self.codes
    }
}

impl Default for MatchCodeSet {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_CODES.to_vec())
    }
}

impl fmt::Display for MatchCodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for code in &self.codes {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{code}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for MatchCodeSet {
    type Err = ConfigError;

    /// Parses a comma-separated list such as `"200,301,403"`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut codes = Vec::new();
        for token in input.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let code = token.parse::<u16>().map_err(|_| ConfigError::InvalidMatchCodes {
                input: input.to_owned(),
                reason: format!("{token:?} is not a status code"),
            })?;
            codes.push(code);
        }
        if codes.is_empty() {
            return Err(ConfigError::InvalidMatchCodes {
                input: input.to_owned(),
                reason: "no status codes given".to_owned(),
            });
        }
        Ok(Self::new(codes))
    }
}
