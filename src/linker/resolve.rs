//! Destination path resolution.
//!
//! Pure functions: nothing here touches the filesystem. Every result is the
//! destination root joined with a suffix of the entry's path relative to the
//! context's source root, so it can never escape the destination root.

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use crate::errors::LinkError;

use super::context::{LinkContext, NamingStrategy};
use super::entry::FsEntry;

/// Compute where `entry` belongs in the destination tree.
pub fn resolve(
    entry: &FsEntry,
    ctx: &LinkContext<'_>,
    prefix: Option<&OsStr>,
) -> Result<PathBuf, LinkError> {
    match ctx.strategy {
        NamingStrategy::TreeMirror => {
            // Files resolve to their governing directory.
            let governing = if entry.is_dir() {
                entry.path()
            } else {
                entry.path().parent().ok_or_else(|| {
                    LinkError::ContractViolation(format!(
                        "file '{}' has no parent directory",
                        entry.path().display()
                    ))
                })?
            };
            let suffix = relative_suffix(governing, ctx.source_root)?;
            Ok(ctx.destination_root.join(suffix))
        }
        NamingStrategy::RootFlatten => {
            let name = entry.file_name().ok_or_else(|| {
                LinkError::ContractViolation(format!(
                    "'{}' has no final name segment",
                    entry.path().display()
                ))
            })?;
            Ok(ctx.destination_root.join(name))
        }
        NamingStrategy::CollectionPrefix => {
            if entry.is_dir() {
                return Err(LinkError::ContractViolation(format!(
                    "collection naming applies to files only, got directory '{}'",
                    entry.path().display()
                )));
            }
            let suffix = relative_suffix(entry.path(), ctx.source_root)?;
            let resolved = ctx.destination_root.join(suffix);
            match (prefix, resolved.file_name()) {
                (Some(prefix), Some(name)) => {
                    let mut renamed = OsString::from(prefix);
                    renamed.push(" - ");
                    renamed.push(name);
                    Ok(resolved.with_file_name(renamed))
                }
                _ => Ok(resolved),
            }
        }
    }
}

/// First `words` whitespace-separated words of `dir`'s name, joined by single spaces.
///
/// Names that are not valid UTF-8 are split on ASCII whitespace and keep
/// their original bytes.
pub fn prefix_token(dir: &Path, words: usize) -> Option<OsString> {
    let name = dir.file_name()?;
    let token = match name.to_str() {
        Some(name) => OsString::from(name.split_whitespace().take(words).collect::<Vec<_>>().join(" ")),
        None => raw_prefix(name, words),
    };
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(unix)]
fn raw_prefix(name: &OsStr, words: usize) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};
    let joined = name
        .as_bytes()
        .split(u8::is_ascii_whitespace)
        .filter(|w| !w.is_empty())
        .take(words)
        .collect::<Vec<_>>()
        .join(&b' ');
    OsString::from_vec(joined)
}

#[cfg(not(unix))]
fn raw_prefix(name: &OsStr, words: usize) -> OsString {
    let lossy = name.to_string_lossy();
    OsString::from(lossy.split_whitespace().take(words).collect::<Vec<_>>().join(" "))
}

/// Segments of `path` beyond `root`; only plain name segments are accepted.
fn relative_suffix<'p>(path: &'p Path, root: &Path) -> Result<&'p Path, LinkError> {
    let suffix = path.strip_prefix(root).map_err(|_| {
        LinkError::ContractViolation(format!(
            "'{}' is not located under source root '{}'",
            path.display(),
            root.display()
        ))
    })?;
    if let Some(bad) = suffix
        .components()
        .find(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Err(LinkError::ContractViolation(format!(
            "'{}' contains a disallowed segment {:?} below '{}'",
            path.display(),
            bad.as_os_str(),
            root.display()
        )));
    }
    Ok(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_token_takes_first_two_words() {
        let p = Path::new("/lib/Best Of 2019 Summer");
        assert_eq!(prefix_token(p, 2).as_deref(), Some(OsStr::new("Best Of")));
        assert_eq!(prefix_token(p, 1).as_deref(), Some(OsStr::new("Best")));
    }

    #[test]
    fn prefix_token_collapses_whitespace() {
        let p = Path::new("/lib/  Holiday \t  Pics  ");
        assert_eq!(prefix_token(p, 2).as_deref(), Some(OsStr::new("Holiday Pics")));
    }

    #[test]
    fn prefix_token_single_word_and_blank() {
        assert_eq!(
            prefix_token(Path::new("/lib/Wallpapers"), 2).as_deref(),
            Some(OsStr::new("Wallpapers"))
        );
        assert_eq!(prefix_token(Path::new("/lib/   "), 2), None);
        assert_eq!(prefix_token(Path::new("/"), 2), None);
    }

    #[cfg(unix)]
    #[test]
    fn prefix_token_keeps_non_utf8_bytes() {
        use std::os::unix::ffi::OsStrExt;
        let dir = Path::new(OsStr::from_bytes(b"/lib/Trip \xff1\t  extra words"));
        let token = prefix_token(dir, 2).unwrap();
        assert_eq!(token.as_bytes(), b"Trip \xff1");
        assert_ne!(prefix_token(Path::new(OsStr::from_bytes(b"/lib/Trip \xfe1")), 2), Some(token));
        assert_eq!(prefix_token(Path::new(OsStr::from_bytes(b"/lib/ \t ")), 2), None);
    }

    #[test]
    fn relative_suffix_rejects_parent_segments() {
        let err = relative_suffix(Path::new("/src/a/../../etc"), Path::new("/src")).unwrap_err();
        assert_eq!(err.kind(), "contract_violation");
    }
}
