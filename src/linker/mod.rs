//! Hard-link tree shaping.
//!
//! `Linker` owns the per-run options and statistics and drives the layout
//! strategies implemented in the submodules. All traversals are iterative.

mod collection;
mod context;
mod entry;
mod filter;
mod flat;
pub mod ops;
mod resolve;
mod series;
mod tree;
mod walk;

pub use context::{LinkContext, NamingStrategy};
pub use entry::{read_entries, EntryKind, FsEntry};
pub use filter::{ExtensionFilter, ExtensionSet, IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
pub use ops::Ensured;
pub use resolve::{prefix_token, resolve};
pub use series::FolderClass;

use std::path::{Component, Path};

use crate::errors::LinkError;
use crate::report::{Event, Reporter};
use crate::shutdown;

/// Folders with at least this many direct entries are treated as collections.
pub const COLLECTION_THRESHOLD_DEFAULT: usize = 53;
/// Number of folder-name words used as a collection prefix.
pub const PREFIX_WORDS_DEFAULT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkOptions {
    pub dry_run: bool,
    pub collection_threshold: usize,
    pub prefix_words: usize,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            collection_threshold: COLLECTION_THRESHOLD_DEFAULT,
            prefix_words: PREFIX_WORDS_DEFAULT,
        }
    }
}

/// Counters accumulated over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    pub directories_created: usize,
    pub links_created: usize,
    pub links_present: usize,
    pub files_filtered: usize,
    pub failures: usize,
}

pub struct Linker<'r> {
    options: LinkOptions,
    reporter: &'r dyn Reporter,
    stats: LinkStats,
}

impl<'r> Linker<'r> {
    pub fn new(options: LinkOptions, reporter: &'r dyn Reporter) -> Self {
        Self {
            options,
            reporter,
            stats: LinkStats::default(),
        }
    }

    pub fn stats(&self) -> LinkStats {
        self.stats
    }

    pub fn into_stats(self) -> LinkStats {
        self.stats
    }

    /// `ops::ensure_directory` plus dry-run, stats and reporting.
    pub fn ensure_directory(&mut self, path: &Path) -> Result<Ensured, LinkError> {
        if self.options.dry_run {
            if ops::occupied(path) {
                return Ok(Ensured::AlreadyPresent);
            }
            self.reporter.report(&Event::WouldCreateDirectory { path });
            self.stats.directories_created += 1;
            return Ok(Ensured::Created);
        }
        let outcome = ops::ensure_directory(path)?;
        if outcome == Ensured::Created {
            self.stats.directories_created += 1;
            self.reporter.report(&Event::DirectoryCreated { path });
        }
        Ok(outcome)
    }

    /// `ops::ensure_hard_link` plus dry-run, stats and reporting.
    pub fn ensure_hard_link(&mut self, src: &Path, dest: &Path) -> Result<Ensured, LinkError> {
        let outcome = if self.options.dry_run {
            if ops::occupied(dest) {
                Ensured::AlreadyPresent
            } else {
                self.reporter.report(&Event::WouldLink { src, dest });
                Ensured::Created
            }
        } else {
            let outcome = ops::ensure_hard_link(src, dest)?;
            if outcome == Ensured::Created {
                self.reporter.report(&Event::Linked { src, dest });
            }
            outcome
        };
        match outcome {
            Ensured::Created => self.stats.links_created += 1,
            Ensured::AlreadyPresent => {
                self.stats.links_present += 1;
                self.reporter.report(&Event::AlreadyPresent { path: dest });
            }
        }
        Ok(outcome)
    }

    /// Ensure every directory level from `root` (which must exist) down to `dest`.
    pub fn ensure_directory_chain(&mut self, root: &Path, dest: &Path) -> Result<(), LinkError> {
        let suffix = dest.strip_prefix(root).map_err(|_| {
            LinkError::ContractViolation(format!(
                "'{}' is not located under '{}'",
                dest.display(),
                root.display()
            ))
        })?;
        let mut cur = root.to_path_buf();
        for comp in suffix.components() {
            match comp {
                Component::Normal(name) => {
                    cur.push(name);
                    self.ensure_directory(&cur)?;
                }
                Component::CurDir => {}
                other => {
                    return Err(LinkError::ContractViolation(format!(
                        "disallowed segment {:?} in '{}'",
                        other.as_os_str(),
                        dest.display()
                    )));
                }
            }
        }
        Ok(())
    }

    fn check_interrupted(&self) -> Result<(), LinkError> {
        if shutdown::is_requested() {
            Err(LinkError::Interrupted)
        } else {
            Ok(())
        }
    }

    /// Record a subtree failure; the caller moves on to the next subtree.
    fn fail(&mut self, scope: &Path, error: &LinkError) {
        self.stats.failures += 1;
        self.reporter.report(&Event::Failed { scope, error });
    }

    /// Link the top-level files of `source` into `destination` (movies mode).
    ///
    /// Failures are reported and counted, never returned.
    pub fn link_movies(&mut self, source: &Path, destination: &Path, extensions: &ExtensionSet) {
        let filter = ExtensionFilter::Only(extensions.clone());
        match self.link_flat(source, destination, &filter) {
            Ok(()) => {}
            Err(LinkError::Interrupted) => self.reporter.report(&Event::Interrupted),
            Err(e) => self.fail(source, &e),
        }
    }
}
