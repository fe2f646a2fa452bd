//! CLI argument parsing using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Concurrent HTTP directory discovery.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirprobe",
    version,
    about = "Concurrent HTTP directory discovery",
    after_help = "EXAMPLES:\n    \
        dirprobe http://target.example wordlist.txt\n    \
        dirprobe https://target.example/app wordlist.txt 20\n    \
        dirprobe http://target.example wordlist.txt 20 --match-codes 200,403"
)]
pub struct CliArgs {
    /// Base URL to probe (trailing slashes are stripped)
    #[arg(value_name = "URL")]
    pub url: String,

    /// Newline-delimited wordlist of path segments
    #[arg(value_name = "WORDLIST")]
    pub wordlist: PathBuf,

    /// Number of probe threads (must not exceed the wordlist length)
    #[arg(value_name = "THREADS", default_value_t = 10)]
    pub threads: usize,

    /// Per-request timeout in seconds
    #[arg(short = 't', long, default_value_t = 5, value_name = "SECS")]
    pub timeout: u64,

    /// Status codes to report, comma separated (default: 200, 301, 302, 401, 403, 429)
    #[arg(short = 'c', long, value_name = "CODES")]
    pub match_codes: Option<String>,

    /// Suppress the banner and the live progress bar
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Debug-level logging to ./dirprobe.log
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
