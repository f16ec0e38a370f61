//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.
//! - Mode selects which layout entry point and extension set a run uses.

use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::linker::{
    ExtensionSet, LinkOptions, COLLECTION_THRESHOLD_DEFAULT, PREFIX_WORDS_DEFAULT,
};

use super::{DESTINATION_DEFAULT, SOURCE_DEFAULT};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// Per-file actions
    Info,
    /// Everything, including already-present targets
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// What kind of library a run mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Video files at the top level of the source only
    Movies,
    /// Video files, classified folder by folder
    Series,
    /// Image files, classified folder by folder
    Pictures,
}

impl Mode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movies" | "movie" => Some(Mode::Movies),
            "series" | "shows" => Some(Mode::Series),
            "pictures" | "photos" => Some(Mode::Pictures),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Movies => "movies",
            Mode::Series => "series",
            Mode::Pictures => "pictures",
        };
        f.write_str(s)
    }
}

impl FromStr for Mode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid mode: '{s}' (expected movies, series or pictures)"))
    }
}

/// Runtime configuration for one linking run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Library to read from
    pub source: PathBuf,
    /// Tree to populate with hard links
    pub destination: PathBuf,
    /// Layout mode; must be set by config or CLI before running
    pub mode: Option<Mode>,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, report actions but do not modify the filesystem
    pub dry_run: bool,
    /// Folders with at least this many direct entries are flattened as collections
    pub collection_threshold: usize,
    /// Words of the folder name used as collection prefix
    pub prefix_words: usize,
    pub video_extensions: ExtensionSet,
    pub image_extensions: ExtensionSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_DEFAULT),
            destination: PathBuf::from(DESTINATION_DEFAULT),
            mode: None,
            log_level: LogLevel::Normal,
            log_file: None,
            dry_run: false,
            collection_threshold: COLLECTION_THRESHOLD_DEFAULT,
            prefix_words: PREFIX_WORDS_DEFAULT,
            video_extensions: ExtensionSet::videos(),
            image_extensions: ExtensionSet::images(),
        }
    }
}

impl Config {
    /// Construct a Config with explicit roots; other fields use defaults.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            ..Default::default()
        }
    }

    pub fn link_options(&self) -> LinkOptions {
        LinkOptions {
            dry_run: self.dry_run,
            collection_threshold: self.collection_threshold,
            prefix_words: self.prefix_words,
        }
    }

    /// Extension set a mode filters on.
    pub fn extensions_for(&self, mode: Mode) -> &ExtensionSet {
        match mode {
            Mode::Movies | Mode::Series => &self.video_extensions,
            Mode::Pictures => &self.image_extensions,
        }
    }
}
