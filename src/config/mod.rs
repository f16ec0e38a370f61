//! Config module.
//! Provides configuration types, default paths, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel, Mode};
pub use xml::{create_template_config, load_config, load_config_from_xml_path};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "JELLYLINK_CONFIG";

/// Default roots, relative to the working directory like the layout media servers expect.
pub const SOURCE_DEFAULT: &str = "Library";
pub const DESTINATION_DEFAULT: &str = "Library-Jellyfin";
