//! Console output: banner, final report, and summary.

use std::path::Path;
use std::time::Duration;

use console::style;
use dirprobe_core::MatchCodeSet;
use dirprobe_engine::ScanReport;

/// Print the configuration header at the start of the run.
pub fn print_banner(url: &str, wordlist: &Path, threads: usize, match_codes: &MatchCodeSet) {
    println!();
    println!(
        "{} {}",
        style("dirprobe").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", style("─".repeat(50)).dim());
    println!("  {} {}", style("Url:").bold(), url);
    println!("  {} {}", style("Wordlist:").bold(), wordlist.display());
    println!("  {} {}", style("Threads:").bold(), threads);
    println!("  {} {}", style("Status Codes:").bold(), match_codes);
    println!();
}

pub fn print_report(report: &ScanReport) {
    if report.matches.is_empty() {
        println!("\nNo valid directories found.");
    } else {
        println!("\n{}", style("Found Directories:").green().bold());
        for line in &report.matches {
            println!("{line}");
        }
    }
}

pub fn print_summary(total: usize, elapsed: Duration) {
    println!("\n{}\n", summary_line(total, elapsed));
}

fn summary_line(total: usize, elapsed: Duration) -> String {
    format!(
        "Checked {} directories in {:.2} seconds.",
        total,
        elapsed.as_secs_f64()
    )
}
