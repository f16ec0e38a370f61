//! User-facing terminal lines. Colors are enabled only when stdout is a TTY.

use owo_colors::OwoColorize;

use crate::config::Mode;
use crate::linker::LinkStats;

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// One-line run summary, e.g. `series: 12 linked, 40 already present, 3 directories created`.
pub fn summary_line(mode: Mode, stats: &LinkStats, dry_run: bool) -> String {
    let verb = if dry_run { "would link" } else { "linked" };
    format!(
        "{mode}: {} {verb}, {} already present, {} directories created, {} skipped by extension",
        stats.links_created, stats.links_present, stats.directories_created, stats.files_filtered
    )
}

/// Print the summary; failures turn it into a warning pointing at the logs.
pub fn print_summary(mode: Mode, stats: &LinkStats, dry_run: bool) {
    let line = summary_line(mode, stats, dry_run);
    if stats.failures == 0 {
        print_success(&line);
    } else {
        print_warn(&format!(
            "{line}; {} folder(s) failed, see the log for details",
            stats.failures
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_mentions_counts_and_mode() {
        let stats = LinkStats {
            links_created: 3,
            links_present: 2,
            directories_created: 1,
            files_filtered: 4,
            failures: 0,
        };
        let line = summary_line(Mode::Series, &stats, false);
        assert_eq!(
            line,
            "series: 3 linked, 2 already present, 1 directories created, 4 skipped by extension"
        );
        assert!(summary_line(Mode::Movies, &stats, true).contains("would link"));
    }
}
