//! Extension sets and the optional filter built from them.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

pub const VIDEO_EXTENSIONS: &[&str] = &["mkv", "avi", "mp4"];
pub const IMAGE_EXTENSIONS: &[&str] = &["jpeg", "jpg", "img", "bmp"];

/// Set of file extensions without the leading dot. Case is kept and matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtensionSet(BTreeSet<String>);

impl ExtensionSet {
    pub fn new<I, S>(exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            exts.into_iter()
                .map(|e| e.as_ref().trim().trim_start_matches('.').to_string())
                .filter(|e| !e.is_empty())
                .collect(),
        )
    }

    pub fn videos() -> Self {
        Self::new(VIDEO_EXTENSIONS)
    }

    pub fn images() -> Self {
        Self::new(IMAGE_EXTENSIONS)
    }

    /// Parse a comma or whitespace separated list such as `"mkv, .avi mp4"`.
    pub fn parse_list(s: &str) -> Self {
        Self::new(s.split(|c: char| c == ',' || c.is_whitespace()))
    }

    /// True when the final extension of `path` is in the set; `EP1.MKV` does not match `mkv`.
    pub fn contains_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.0.contains(e))
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list: Vec<&str> = self.0.iter().map(String::as_str).collect();
        f.write_str(&list.join(", "))
    }
}

/// Which files a linker considers: everything, or only a set of extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionFilter {
    Any,
    Only(ExtensionSet),
}

impl ExtensionFilter {
    pub fn matches(&self, path: &Path) -> bool {
        match self {
            ExtensionFilter::Any => true,
            ExtensionFilter::Only(set) => set.contains_path(path),
        }
    }
}

impl From<ExtensionSet> for ExtensionFilter {
    fn from(set: ExtensionSet) -> Self {
        ExtensionFilter::Only(set)
    }
}
