use url::Url;

use crate::ConfigError;

/// Strip trailing slashes from the base URL and validate it.
///
/// The stripped form is what probes concatenate against, so this runs once
/// at startup. A URL that does not parse as absolute http(s) is a
/// configuration error, not something to rediscover once per word.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let base = raw.trim_end_matches('/');
    let parsed = Url::parse(base).map_err(|err| ConfigError::InvalidUrl {
        url: raw.to_owned(),
        reason: err.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(base.to_owned()),
        scheme => Err(ConfigError::UnsupportedScheme {
            url: raw.to_owned(),
            scheme: scheme.to_owned(),
        }),
    }
}

/// A word probes the same target with or without one leading slash.
pub fn normalize_word(word: &str) -> &str {
    word.strip_prefix('/').unwrap_or(word)
}

/// Target for one probe. Built fresh per word; never cached.
pub fn target_url(base_url: &str, word: &str) -> String {
    format!("{base_url}/{word}")
}

/// The pool is bounded above by the wordlist length: more workers than
/// words would only ever spin on an empty queue.
pub fn validate_worker_count(requested: usize, wordlist_len: usize) -> Result<(), ConfigError> {
    if requested == 0 || requested > wordlist_len {
        return Err(ConfigError::InvalidWorkerCount {
            requested,
            wordlist_len,
        });
    }
    Ok(())
}
