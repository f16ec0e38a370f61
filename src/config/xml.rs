//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a commented template on request (`--init-config`).
//!
//! Notes:
//! - This module only reads/writes the config file; directory validation happens elsewhere.
//! - Unknown XML fields are a hard error so typos surface instead of being ignored.

use anyhow::{bail, Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::{DESTINATION_DEFAULT, SOURCE_DEFAULT};

use crate::config::types::{Config, LogLevel, Mode};
use crate::linker::{
    ExtensionSet, COLLECTION_THRESHOLD_DEFAULT, IMAGE_EXTENSIONS, PREFIX_WORDS_DEFAULT,
    VIDEO_EXTENSIONS,
};
use crate::platform::{set_dir_mode_0700, write_config_secure_new_0600};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    source: Option<String>,
    destination: Option<String>,
    mode: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
    #[serde(default, deserialize_with = "de_usize_trimmed_opt")]
    collection_threshold: Option<usize>,
    #[serde(default, deserialize_with = "de_usize_trimmed_opt")]
    prefix_words: Option<usize>,
    video_extensions: Option<String>,
    image_extensions: Option<String>,
}

// Custom deserializer that trims surrounding whitespace for optional usize
fn de_usize_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<usize>()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid number '{s}': {e}"))),
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

// Map XmlConfig -> Config; absent fields keep their defaults.
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = non_empty(parsed.source.as_deref()) {
        cfg.source = PathBuf::from(s);
    }
    if let Some(s) = non_empty(parsed.destination.as_deref()) {
        cfg.destination = PathBuf::from(s);
    }
    if let Some(s) = non_empty(parsed.mode.as_deref()) {
        cfg.mode = Some(s.parse::<Mode>().map_err(anyhow::Error::msg)?);
    }
    if let Some(s) = non_empty(parsed.log_level.as_deref()) {
        cfg.log_level = s.parse::<LogLevel>().map_err(anyhow::Error::msg)?;
    }
    cfg.log_file = non_empty(parsed.log_file.as_deref()).map(PathBuf::from);

    if let Some(n) = parsed.collection_threshold {
        cfg.collection_threshold = n;
    }
    if let Some(n) = parsed.prefix_words {
        cfg.prefix_words = n;
    }
    if let Some(s) = non_empty(parsed.video_extensions.as_deref()) {
        cfg.video_extensions = ExtensionSet::parse_list(s);
    }
    if let Some(s) = non_empty(parsed.image_extensions.as_deref()) {
        cfg.image_extensions = ExtensionSet::parse_list(s);
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid value in '{}'", path.display()))
}

/// Load the config from `$JELLYLINK_CONFIG` or the default location.
///
/// Ok(None) when no file exists there; an explicitly named file that is missing is an error.
pub fn load_config() -> Result<Option<Config>> {
    let explicit = std::env::var_os(super::CONFIG_ENV).is_some();
    let Some(path) = default_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        if explicit {
            bail!("config file named by {} does not exist: {}", super::CONFIG_ENV, path.display());
        }
        return Ok(None);
    }
    info!("Using config file {}", path.display());
    load_config_from_xml_path(&path).map(Some)
}

/// Write the commented template config to `path` (0600 on Unix).
///
/// Refuses to overwrite an existing file or to write below a symlinked ancestor.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
        let _ = set_dir_mode_0700(parent);
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "/path/to/jellylink.log".into());

    let content = format!(
        "<!--\n  jellylink configuration (XML)\n\n  source                -> library to read from\n  destination           -> tree to populate with hard links (same filesystem as source)\n  mode                  -> movies | series | pictures (the CLI type flag overrides)\n  log_level             -> quiet | normal | info | debug\n  log_file              -> optional log file (stdout is always used); leave empty to disable,\n                           e.g. {}\n  collection_threshold  -> folders with at least this many entries are flattened with prefixes\n  prefix_words          -> words of the folder name used as the collection prefix\n  video_extensions      -> extensions used by movies and series\n  image_extensions      -> extensions used by pictures\n\n  CLI flags override XML values.\n-->\n<config>\n  <source>{}</source>\n  <destination>{}</destination>\n  <mode></mode>\n  <log_level>normal</log_level>\n  <log_file></log_file>\n  <collection_threshold>{}</collection_threshold>\n  <prefix_words>{}</prefix_words>\n  <video_extensions>{}</video_extensions>\n  <image_extensions>{}</image_extensions>\n</config>\n",
        suggested_log,
        SOURCE_DEFAULT,
        DESTINATION_DEFAULT,
        COLLECTION_THRESHOLD_DEFAULT,
        PREFIX_WORDS_DEFAULT,
        VIDEO_EXTENSIONS.join(", "),
        IMAGE_EXTENSIONS.join(", "),
    );

    write_config_secure_new_0600(path, content.as_bytes())
        .with_context(|| format!("write template config '{}'", path.display()))?;
    info!("Created template config at {}", path.display());
    Ok(())
}
