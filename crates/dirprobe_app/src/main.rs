//! dirprobe - concurrent HTTP path discovery.
//!
//! Entry point for the CLI application.

mod cli;
mod output;
mod progress;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use cli::CliArgs;
use dirprobe_core::{normalize_base_url, validate_worker_count, MatchCodeSet};
use dirprobe_engine::{load_wordlist, ProgressSink, ScanConfig, Scanner};
use probe_logging::LogDestination;
use progress::{IndicatifSink, PlainSink};

fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version land here too; only genuine argument
            // errors exit nonzero.
            let failed = err.use_stderr();
            let _ = err.print();
            return if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<()> {
    setup_logging(args.verbose);

    let base_url = normalize_base_url(&args.url)?;
    let match_codes = match &args.match_codes {
        Some(raw) => raw.parse::<MatchCodeSet>()?,
        None => MatchCodeSet::default(),
    };

    let words = load_wordlist(&args.wordlist).context("could not load wordlist")?;
    validate_worker_count(args.threads, words.len())?;

    // Workers are abandoned with the process on interrupt; nothing joins
    // an in-flight probe.
    ctrlc::set_handler(|| {
        eprintln!("\nInterrupt received, exiting...");
        std::process::exit(1);
    })
    .context("could not set interrupt handler")?;

    if !args.quiet {
        output::print_banner(&base_url, &args.wordlist, args.threads, &match_codes);
    }

    let total = words.len();
    let sink: Arc<dyn ProgressSink> = if args.quiet {
        Arc::new(PlainSink)
    } else {
        Arc::new(IndicatifSink::new(total as u64))
    };

    log::info!(
        "starting scan of {base_url} with {} words on {} threads",
        total,
        args.threads
    );

    let scanner = Scanner::new(ScanConfig {
        base_url,
        worker_count: args.threads,
        timeout: Duration::from_secs(args.timeout),
        match_codes,
    });

    let report = scanner.run(words, sink).context("scan failed")?;

    log::info!(
        "scan finished: {} probes, {} matches",
        report.probes_completed,
        report.matches.len()
    );

    output::print_report(&report);
    output::print_summary(total, report.elapsed);

    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    probe_logging::initialize(LogDestination::File, level);
}
