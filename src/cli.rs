//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Every flag is optional; unset flags leave config-file values alone.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::{Path, PathBuf};

use crate::config::types::{Config, LogLevel, Mode};

/// Mirror a media library into a hard-linked tree for media servers.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Mirror a media library into a hard-linked tree for media servers"
)]
pub struct Args {
    /// Library to read from (default: ./Library).
    #[arg(short = 's', long, value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Tree to populate with hard links (default: ./Library-Jellyfin).
    #[arg(short = 'd', long, value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub destination: Option<PathBuf>,

    /// Layout mode.
    #[arg(short = 't', long = "type", value_enum, value_name = "MODE")]
    pub mode: Option<Mode>,

    /// Folders with at least this many direct entries are flattened with name prefixes.
    #[arg(long, value_name = "N")]
    pub collection_threshold: Option<usize>,

    /// Number of folder-name words used as the collection prefix.
    #[arg(long, value_name = "N")]
    pub prefix_words: Option<usize>,

    /// Dry-run: log actions but do not modify the filesystem.
    #[arg(
        long,
        help = "Show what would be linked, but do not create links or directories"
    )]
    pub dry_run: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where jellylink looks for its config file, then exit.
    #[arg(long, help = "Print the config file location and exit")]
    pub print_config: bool,

    /// Write a commented template config file, then exit.
    #[arg(long, help = "Write a template config file to the config location and exit")]
    pub init_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(p) = &self.source {
            cfg.source = sanitize_path(p);
        }
        if let Some(p) = &self.destination {
            cfg.destination = sanitize_path(p);
        }
        if let Some(mode) = self.mode {
            cfg.mode = Some(mode);
        }
        if let Some(n) = self.collection_threshold {
            cfg.collection_threshold = n;
        }
        if let Some(n) = self.prefix_words {
            cfg.prefix_words = n;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(p) = &self.log_file {
            cfg.log_file = Some(sanitize_path(p));
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

/// Strip quotes left behind by shells (PowerShell/CMD quoting mistakes) and one trailing separator.
/// Non-UTF-8 paths are returned untouched.
fn sanitize_path(p: &Path) -> PathBuf {
    let Some(s) = p.to_str() else {
        return p.to_path_buf();
    };
    let trimmed = s.trim();
    let mut inner = if trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
    {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.trim_matches(|c| c == '\'' || c == '"').to_string()
    };

    // Avoid stripping root "/" or "C:\" patterns.
    if inner.len() > 1 && (inner.ends_with('\\') || inner.ends_with('/')) && !inner.ends_with(":\\") {
        inner.pop();
    }

    PathBuf::from(inner)
}

pub fn parse() -> Args {
    Args::parse()
}
