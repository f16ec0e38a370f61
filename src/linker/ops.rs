//! Idempotent filesystem primitives.
//!
//! These are the only calls in the core that mutate the filesystem. An existing
//! target is the steady state of a re-run and is reported as `AlreadyPresent`,
//! never as an error.

use std::fs;
use std::io;
use std::path::Path;

use crate::errors::LinkError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ensured {
    Created,
    AlreadyPresent,
}

/// Create one directory level at `path`.
pub fn ensure_directory(path: &Path) -> Result<Ensured, LinkError> {
    match fs::create_dir(path) {
        Ok(()) => Ok(Ensured::Created),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(Ensured::AlreadyPresent),
        Err(source) => Err(LinkError::DirectoryCreation {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Hard-link `src` at `dest`. An existing `dest` is not checked for identity.
pub fn ensure_hard_link(src: &Path, dest: &Path) -> Result<Ensured, LinkError> {
    match fs::hard_link(src, dest) {
        Ok(()) => Ok(Ensured::Created),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(Ensured::AlreadyPresent),
        Err(source) => Err(LinkError::LinkCreation {
            src: src.to_path_buf(),
            dest: dest.to_path_buf(),
            source,
        }),
    }
}

/// True when something (file, directory or dangling link) occupies `path`.
pub(crate) fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}
