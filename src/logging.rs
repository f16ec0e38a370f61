//! Tracing subscriber setup for the binary.
//!
//! Stdout always gets a layer (compact or JSON). A file layer is added on top
//! when `log_file` is set and can be opened safely; otherwise the run goes on
//! with stdout only and a warning.

use anyhow::Result;
use chrono::Local;
use std::fmt as stdfmt;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

use jellylink::output as out;
use jellylink::platform::open_log_file_secure_append;
use jellylink::{default_log_path, path_has_symlink_ancestor, LogLevel};

/// `YYYY-MM-DD HH:MM:SS` in local time.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Dependencies stay at warn; our own targets follow the program level.
fn filter_for(level: &LogLevel) -> EnvFilter {
    let ours = match level {
        LogLevel::Quiet => "error",
        LogLevel::Normal => "info",
        LogLevel::Info => "debug",
        LogLevel::Debug => "trace",
    };
    EnvFilter::new(format!("warn,jellylink={ours}"))
}

fn file_writer(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    match path_has_symlink_ancestor(path) {
        Ok(false) => {}
        Ok(true) => {
            out::print_warn(&format!(
                "Not logging to {}: a parent directory is a symlink",
                path.display()
            ));
            return None;
        }
        Err(e) => {
            out::print_warn(&format!("Cannot inspect log path {}: {e}", path.display()));
            return None;
        }
    }
    open_log_file_secure_append(path)
        .map(tracing_appender::non_blocking)
        .map_err(|e| out::print_warn(&format!("Cannot open log file {}: {e}", path.display())))
        .ok()
}

/// Install the global subscriber. The returned guard flushes the file layer when dropped.
pub fn init_tracing(
    level: &LogLevel,
    log_file: Option<&Path>,
    json: bool,
) -> Result<Option<WorkerGuard>> {
    let (file, guard) = match log_file.map(|p| (p, file_writer(p))) {
        Some((_, Some((writer, guard)))) => (Some(writer), Some(guard)),
        Some((path, None)) => {
            out::print_warn(&format!(
                "File logging to '{}' is disabled for this run; logs go to stdout only.",
                path.display()
            ));
            if let Some(def) = default_log_path() {
                out::print_info(&format!("The default log path may work instead: {}", def.display()));
            }
            (None, None)
        }
        None => (None, None),
    };

    if json {
        let stdout = tsfmt::layer().json().with_timer(LocalTime).with_target(true);
        let file = file.map(|w| {
            tsfmt::layer()
                .json()
                .with_timer(LocalTime)
                .with_target(true)
                .with_ansi(false)
                .with_writer(w)
        });
        registry()
            .with(filter_for(level))
            .with(stdout)
            .with(file)
            .try_init()?;
    } else {
        let stdout = tsfmt::layer().compact().with_timer(LocalTime).with_target(false);
        let file = file.map(|w| {
            tsfmt::layer()
                .compact()
                .with_timer(LocalTime)
                .with_target(false)
                .with_ansi(false)
                .with_writer(w)
        });
        registry()
            .with(filter_for(level))
            .with(stdout)
            .with(file)
            .try_init()?;
    }
    Ok(guard)
}
