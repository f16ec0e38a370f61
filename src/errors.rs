//! Typed error definitions for the linking core.
//! Every failure the core can raise is a `LinkError`; "already exists" is never one of them.

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("cannot create directory '{}'{}", .path.display(), io_hint(.source))]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot hard-link '{}' -> '{}'{}", .src.display(), .dest.display(), io_hint(.source))]
    LinkCreation {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read directory '{}'{}", .path.display(), io_hint(.source))]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("directory walk failed")]
    Walk(#[from] walkdir::Error),

    #[error("unknown naming strategy '{0}' (expected tree, root or collection)")]
    UnknownStrategy(String),

    #[error("contract violation: {0}")]
    ContractViolation(String),

    #[error("interrupted by user")]
    Interrupted,
}

impl LinkError {
    /// Stable numeric code, logged as a structured field.
    pub fn code(&self) -> i32 {
        match self {
            LinkError::DirectoryCreation { .. } => 10,
            LinkError::LinkCreation { .. } => 11,
            LinkError::ReadDir { .. } => 12,
            LinkError::Walk(_) => 13,
            LinkError::UnknownStrategy(_) => 20,
            LinkError::ContractViolation(_) => 21,
            LinkError::Interrupted => 130,
        }
    }

    /// Short machine-friendly label, logged as `kind`.
    pub fn kind(&self) -> &'static str {
        match self {
            LinkError::DirectoryCreation { .. } => "directory_creation",
            LinkError::LinkCreation { .. } => "link_creation",
            LinkError::ReadDir { .. } => "read_dir",
            LinkError::Walk(_) => "walk",
            LinkError::UnknownStrategy(_) => "unknown_strategy",
            LinkError::ContractViolation(_) => "contract_violation",
            LinkError::Interrupted => "interrupted",
        }
    }
}

/// Render an error and all of its sources as one line: `outer: cause: root cause`.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut msg = err.to_string();
    let mut cur = err.source();
    while let Some(cause) = cur {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        cur = cause.source();
    }
    msg
}

/// Platform-aware hint appended to I/O-backed messages (empty when nothing useful applies).
pub(crate) fn io_hint(e: &io::Error) -> &'static str {
    if let Some(hint) = e.raw_os_error().and_then(os_code_hint) {
        return hint;
    }
    match e.kind() {
        io::ErrorKind::PermissionDenied => " (permission denied; check ownership and write permissions)",
        io::ErrorKind::NotFound => " (path not found; does the parent directory exist?)",
        _ => "",
    }
}

#[cfg(unix)]
fn os_code_hint(code: i32) -> Option<&'static str> {
    Some(match code {
        libc::EXDEV => " (cross-device; hard links cannot span filesystems)",
        libc::EACCES | libc::EPERM => " (permission denied; check ownership and write permissions)",
        libc::ENOENT => " (path not found; does the parent directory exist?)",
        libc::ENOTDIR => " (a path component is not a directory)",
        libc::EMLINK => " (too many links to this file)",
        libc::ENOSPC => " (no space left on device)",
        libc::EROFS => " (read-only filesystem)",
        libc::ENAMETOOLONG => " (file name or path too long)",
        _ => return None,
    })
}

#[cfg(windows)]
fn os_code_hint(code: i32) -> Option<&'static str> {
    Some(match code {
        5 => " (access denied; check permissions)",
        17 => " (not same device; hard links cannot span volumes)",
        2 | 3 => " (path not found; does the parent directory exist?)",
        1142 => " (too many links to this file)",
        112 => " (insufficient disk space)",
        206 => " (file name or path too long)",
        _ => return None,
    })
}

#[cfg(not(any(unix, windows)))]
fn os_code_hint(_code: i32) -> Option<&'static str> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_error_message_names_both_paths() {
        let err = LinkError::LinkCreation {
            src: PathBuf::from("/lib/a.mkv"),
            dest: PathBuf::from("/out/a.mkv"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let msg = err.to_string();
        assert!(msg.contains("/lib/a.mkv"));
        assert!(msg.contains("/out/a.mkv"));
        assert!(msg.contains("path not found"), "msg was: {msg}");
        assert_eq!(err.kind(), "link_creation");
    }

    #[cfg(unix)]
    #[test]
    fn cross_device_hint_present() {
        let err = LinkError::LinkCreation {
            src: PathBuf::from("/a"),
            dest: PathBuf::from("/b"),
            source: io::Error::from_raw_os_error(libc::EXDEV),
        };
        assert!(err.to_string().contains("cross-device"));
    }

    #[cfg(unix)]
    #[test]
    fn unmapped_os_codes_fall_back_to_the_error_kind() {
        assert_eq!(io_hint(&io::Error::from_raw_os_error(libc::EAGAIN)), "");
        assert!(io_hint(&io::Error::from_raw_os_error(libc::ENOENT)).contains("path not found"));
        assert!(io_hint(&io::Error::from(io::ErrorKind::PermissionDenied)).contains("permission denied"));
    }

    #[test]
    fn chain_includes_io_cause() {
        let err = LinkError::DirectoryCreation {
            path: PathBuf::from("/x/y"),
            source: io::Error::other("disk on fire"),
        };
        let chain = error_chain(&err);
        assert!(chain.starts_with("cannot create directory '/x/y'"));
        assert!(chain.ends_with(": disk on fire"), "chain was: {chain}");
    }

    #[test]
    fn codes_are_distinct() {
        let errs = [
            LinkError::UnknownStrategy("x".into()),
            LinkError::ContractViolation("y".into()),
            LinkError::Interrupted,
        ];
        let codes: Vec<i32> = errs.iter().map(LinkError::code).collect();
        assert_eq!(codes, vec![20, 21, 130]);
    }
}
