//! Mode dispatch: pick the extension set and entry point for a run.

use tracing::info;

use crate::config::{Config, Mode};
use crate::linker::{LinkStats, Linker};
use crate::report::Reporter;

/// Run one mode over `config.source` -> `config.destination`.
///
/// Per-folder failures are reported through `reporter` and counted in the
/// returned stats; they never abort the run.
pub fn run_mode(config: &Config, mode: Mode, reporter: &dyn Reporter) -> LinkStats {
    let extensions = config.extensions_for(mode);
    info!(
        %mode,
        source = %config.source.display(),
        destination = %config.destination.display(),
        extensions = %extensions,
        dry_run = config.dry_run,
        "Starting run"
    );

    let mut linker = Linker::new(config.link_options(), reporter);
    match mode {
        Mode::Movies => linker.link_movies(&config.source, &config.destination, extensions),
        Mode::Series | Mode::Pictures => {
            linker.link_series(&config.source, &config.destination, extensions)
        }
    }
    let stats = linker.into_stats();
    info!(
        links_created = stats.links_created,
        links_present = stats.links_present,
        directories_created = stats.directories_created,
        failures = stats.failures,
        "Run finished"
    );
    stats
}
