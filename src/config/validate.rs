//! Config validation logic.
//! Verifies the source is a readable directory, canonicalizes both roots, rejects
//! overlapping ones and only then creates the destination.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use super::types::Config;

impl Config {
    /// Validate both roots and replace them with their canonical absolute form.
    pub fn validate_and_normalize(&mut self) -> Result<()> {
        if self.collection_threshold == 0 {
            bail!("collection_threshold must be at least 1");
        }
        if self.prefix_words == 0 {
            bail!("prefix_words must be at least 1");
        }

        // 1) Source: must exist, be a directory, and be readable.
        ensure_dir_exists_and_is_dir(&self.source, "source")?;
        ensure_readable(&self.source, "source")?;

        // 2) Canonicalize and ensure the roots are disjoint (neither contains the other).
        let src_real = dunce::canonicalize(&self.source)
            .with_context(|| format!("resolve source '{}'", self.source.display()))?;
        let dst_real = resolve_destination(&self.destination)?;

        if src_real == dst_real {
            bail!(
                "source and destination resolve to the same path: '{}'",
                src_real.display()
            );
        }
        if dst_real.starts_with(&src_real) {
            bail!(
                "destination '{}' must not be inside source '{}'",
                dst_real.display(),
                src_real.display()
            );
        }
        if src_real.starts_with(&dst_real) {
            bail!(
                "source '{}' must not be inside destination '{}'",
                src_real.display(),
                dst_real.display()
            );
        }

        // 3) Destination: must be a directory; create if missing (not in dry-run).
        ensure_dir_is_or_create(&dst_real, "destination", self.dry_run)?;

        warn_if_cross_device(&src_real, &dst_real);

        self.source = src_real;
        self.destination = dst_real;
        info!(
            "Config validated: source='{}' destination='{}'",
            self.source.display(),
            self.destination.display()
        );
        Ok(())
    }
}

/// Canonical form of the destination; a missing one is resolved through its nearest existing ancestor.
fn resolve_destination(path: &Path) -> Result<PathBuf> {
    let abs = std::path::absolute(path)
        .with_context(|| format!("resolve destination '{}'", path.display()))?;
    let mut existing = abs.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return Ok(abs),
        }
    }
    let mut real = dunce::canonicalize(existing)
        .with_context(|| format!("resolve destination '{}'", path.display()))?;
    real.extend(missing.iter().rev());
    Ok(real)
}

/// Ensure path exists and is a directory; emit clear errors with path context.
fn ensure_dir_exists_and_is_dir(path: &Path, name: &str) -> Result<()> {
    if !path.exists() {
        error!("{name} does not exist: {}", path.display());
        bail!("{name} does not exist: {}", path.display());
    }
    if !path.is_dir() {
        error!("{name} is not a directory: {}", path.display());
        bail!("{name} is not a directory: {}", path.display());
    }
    Ok(())
}

/// Ensure directory is readable by attempting to open its entries.
fn ensure_readable(path: &Path, name: &str) -> Result<()> {
    fs::read_dir(path).with_context(|| {
        format!("Cannot read {name} directory '{}'; check permissions", path.display())
    })?;
    debug!("{name} readable: {}", path.display());
    Ok(())
}

/// Ensure directory exists (create if missing). If exists, it must be a directory.
fn ensure_dir_is_or_create(path: &Path, name: &str, dry_run: bool) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            error!("{name} exists but isn't a directory: {}", path.display());
            bail!("{name} exists but isn't a directory: {}", path.display());
        }
    } else if dry_run {
        info!(action = "mkdir -p", path = %path.display(), "dry-run");
    } else {
        fs::create_dir_all(path).with_context(|| {
            format!("Failed to create {name} directory '{}'", path.display())
        })?;
        info!("Created {name} directory: {}", path.display());
    }
    Ok(())
}

/// Hard links cannot cross filesystems; say so up front instead of once per file.
#[cfg(unix)]
fn warn_if_cross_device(source: &Path, destination: &Path) {
    use std::os::unix::fs::MetadataExt;
    let (Ok(s), Ok(d)) = (fs::metadata(source), fs::metadata(destination)) else {
        return;
    };
    if s.dev() != d.dev() {
        warn!(
            source = %source.display(),
            destination = %destination.display(),
            "source and destination are on different filesystems; hard links will fail"
        );
    }
}

#[cfg(not(unix))]
fn warn_if_cross_device(_source: &Path, _destination: &Path) {}
