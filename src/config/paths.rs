//! Where jellylink keeps its own files, and the symlink check guarding them.

use dirs::{config_dir, data_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::CONFIG_ENV;

const APP_DIR: &str = "jellylink";

/// `<base>/jellylink/<file>`, falling back to `$HOME/<home_rel>/jellylink/<file>`.
fn app_file(base: Option<PathBuf>, home_rel: &[&str], file: &str) -> Option<PathBuf> {
    let base = base.or_else(|| {
        let home = PathBuf::from(env::var_os("HOME")?);
        Some(home_rel.iter().fold(home, |p, seg| p.join(seg)))
    })?;
    Some(base.join(APP_DIR).join(file))
}

/// Config file location: `$JELLYLINK_CONFIG` if set, else the OS config dir.
pub fn default_config_path() -> Option<PathBuf> {
    match env::var_os(CONFIG_ENV) {
        Some(p) => Some(PathBuf::from(p)),
        None => app_file(config_dir(), &[".config"], "config.xml"),
    }
}

/// Suggested log file location in the OS data dir. Nothing is created here.
pub fn default_log_path() -> Option<PathBuf> {
    app_file(data_dir(), &[".local", "share"], "jellylink.log")
}

/// True if any existing ancestor of `path` (not `path` itself) is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    for anc in path.ancestors().skip(1).filter(|a| a.exists()) {
        if fs::symlink_metadata(anc)?.file_type().is_symlink() {
            return Ok(true);
        }
    }
    Ok(false)
}
