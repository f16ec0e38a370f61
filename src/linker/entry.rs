//! Filesystem entries as the core sees them: a path plus its kind.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::LinkError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Immutable view onto one filesystem entry, read on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    path: PathBuf,
    kind: EntryKind,
}

impl FsEntry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryKind::File)
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryKind::Directory)
    }

    fn from_dir_entry(entry: &fs::DirEntry) -> io::Result<Self> {
        let path = entry.path();
        let ftype = entry.file_type()?;
        let kind = if ftype.is_dir() {
            EntryKind::Directory
        } else if ftype.is_symlink() {
            // Classify by target; a dangling link is treated as a file.
            match fs::metadata(&path) {
                Ok(meta) if meta.is_dir() => EntryKind::Directory,
                _ => EntryKind::File,
            }
        } else {
            EntryKind::File
        };
        Ok(Self { path, kind })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    pub fn extension(&self) -> Option<&OsStr> {
        self.path.extension()
    }
}

/// List the direct children of `dir`, sorted by file name.
///
/// Callers must not depend on the order; sorting only keeps logs stable between runs.
pub fn read_entries(dir: &Path) -> Result<Vec<FsEntry>, LinkError> {
    let read_err = |source| LinkError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = Vec::new();
    for item in fs::read_dir(dir).map_err(read_err)? {
        let item = item.map_err(read_err)?;
        entries.push(FsEntry::from_dir_entry(&item).map_err(read_err)?);
    }
    entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn read_entries_classifies_children() {
        let td = tempdir().unwrap();
        fs::create_dir(td.path().join("Season 1")).unwrap();
        fs::write(td.path().join("ep1.mkv"), b"x").unwrap();

        let entries = read_entries(td.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind(), EntryKind::Directory);
        assert_eq!(entries[0].file_name(), Some(OsStr::new("Season 1")));
        assert_eq!(entries[1].kind(), EntryKind::File);
        assert_eq!(entries[1].extension(), Some(OsStr::new("mkv")));
    }

    #[test]
    fn read_entries_missing_dir_is_read_dir_error() {
        let td = tempdir().unwrap();
        let err = read_entries(&td.path().join("nope")).unwrap_err();
        assert_eq!(err.kind(), "read_dir");
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_counts_as_file() {
        let td = tempdir().unwrap();
        std::os::unix::fs::symlink(td.path().join("gone"), td.path().join("link.mkv")).unwrap();
        let entries = read_entries(td.path()).unwrap();
        assert_eq!(entries[0].kind(), EntryKind::File);
    }
}
