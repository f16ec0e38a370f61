use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::errors::LinkError;

use super::filter::ExtensionFilter;

/// How a source path is mapped into the destination tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingStrategy {
    /// Keep the entry's position relative to the source root.
    TreeMirror,
    /// Keep only the entry's own name, directly under the destination root.
    RootFlatten,
    /// Like `TreeMirror` for a file, with the file name prefixed by a folder token.
    CollectionPrefix,
}

impl NamingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingStrategy::TreeMirror => "tree",
            NamingStrategy::RootFlatten => "root",
            NamingStrategy::CollectionPrefix => "collection",
        }
    }
}

impl fmt::Display for NamingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingStrategy {
    type Err = LinkError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tree" | "tree-mirror" => Ok(NamingStrategy::TreeMirror),
            "root" | "root-flatten" => Ok(NamingStrategy::RootFlatten),
            "collection" | "collection-prefix" => Ok(NamingStrategy::CollectionPrefix),
            _ => Err(LinkError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Source/destination pair plus filter and strategy for one resolution scope.
#[derive(Debug, Clone, Copy)]
pub struct LinkContext<'a> {
    pub source_root: &'a Path,
    pub destination_root: &'a Path,
    pub filter: &'a ExtensionFilter,
    pub strategy: NamingStrategy,
}

impl<'a> LinkContext<'a> {
    pub fn new(
        source_root: &'a Path,
        destination_root: &'a Path,
        filter: &'a ExtensionFilter,
        strategy: NamingStrategy,
    ) -> Self {
        Self {
            source_root,
            destination_root,
            filter,
            strategy,
        }
    }
}
