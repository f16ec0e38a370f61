//! Core library for `jellylink`.
//!
//! Mirrors a media library into a second tree made of hard links, shaped for a
//! media server: season folders are mirrored, bulk "collection" folders are
//! flattened with a name prefix, and pure container folders are descended into.
//!
//! Layout:
//! - `linker`: path resolution, idempotent link primitives and the layout strategies
//! - `run`: mode dispatch (movies / series / pictures)
//! - `report`: the diagnostic sink the core reports through
//! - `config`, `cli`, `output`, `platform`, `shutdown`: the surrounding tool

pub mod cli;
pub mod config;
pub mod errors;
pub mod linker;
pub mod output;
pub mod platform;
pub mod report;
pub mod run;
pub mod shutdown;

pub use config::{
    create_template_config, default_config_path, default_log_path, load_config,
    load_config_from_xml_path, path_has_symlink_ancestor, Config, LogLevel, Mode,
};
pub use errors::LinkError;
pub use linker::{
    ExtensionFilter, ExtensionSet, FsEntry, LinkContext, LinkOptions, LinkStats, Linker,
    NamingStrategy,
};
pub use report::{Event, Reporter, TracingReporter};
pub use run::run_mode;
