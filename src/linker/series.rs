use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::errors::LinkError;
use crate::report::Event;

use super::context::{LinkContext, NamingStrategy};
use super::entry::{read_entries, FsEntry};
use super::filter::{ExtensionFilter, ExtensionSet};
use super::resolve::resolve;
use super::Linker;

/// How the orchestrator treats one folder, judged from its direct contents only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderClass {
    /// No direct matching content: descend into it.
    Container,
    /// Matching content and fewer entries than the threshold: mirror its tree.
    Season { items: usize },
    /// Matching content and at least the threshold: flatten with prefixes.
    Collection { items: usize },
}

impl Linker<'_> {
    /// Classify `folder` by its immediate contents.
    pub fn classify(
        &self,
        folder: &Path,
        extensions: &ExtensionSet,
    ) -> Result<FolderClass, LinkError> {
        let contents = read_entries(folder)?;
        if !contents.iter().any(|c| extensions.contains_path(c.path())) {
            return Ok(FolderClass::Container);
        }
        let items = contents.len();
        if items < self.options.collection_threshold {
            Ok(FolderClass::Season { items })
        } else {
            Ok(FolderClass::Collection { items })
        }
    }

    /// Walk the folders under `source_root` and link every episode-bearing one.
    ///
    /// Containers are queued with their name mirrored under the current
    /// destination. A failure in one folder is reported and counted, and the
    /// run goes on with the next; only an interrupt stops it early.
    pub fn link_series(
        &mut self,
        source_root: &Path,
        destination_root: &Path,
        extensions: &ExtensionSet,
    ) {
        let filter = ExtensionFilter::Only(extensions.clone());
        let mut pending: VecDeque<(PathBuf, PathBuf)> = VecDeque::new();
        pending.push_back((source_root.to_path_buf(), destination_root.to_path_buf()));

        while let Some((root, dest)) = pending.pop_front() {
            let folders = match read_entries(&root) {
                Ok(entries) => entries.into_iter().filter(FsEntry::is_dir),
                Err(e) => {
                    self.fail(&root, &e);
                    continue;
                }
            };

            for folder in folders {
                let outcome = self.dispatch(&folder, &root, &dest, destination_root, &filter, extensions);
                match outcome {
                    Ok(Some(child)) => pending.push_back(child),
                    Ok(None) => {}
                    Err(LinkError::Interrupted) => {
                        self.reporter.report(&Event::Interrupted);
                        return;
                    }
                    Err(e) => self.fail(folder.path(), &e),
                }
            }
        }
    }

    /// Handle one subfolder; returns the (source, destination) pair to queue for containers.
    fn dispatch(
        &mut self,
        folder: &FsEntry,
        root: &Path,
        dest: &Path,
        destination_root: &Path,
        filter: &ExtensionFilter,
        extensions: &ExtensionSet,
    ) -> Result<Option<(PathBuf, PathBuf)>, LinkError> {
        self.check_interrupted()?;
        let class = self.classify(folder.path(), extensions)?;
        self.reporter.report(&Event::Classified {
            folder: folder.path(),
            class,
        });

        match class {
            FolderClass::Container => {
                let ctx = LinkContext::new(root, dest, filter, NamingStrategy::RootFlatten);
                let child_dest = resolve(folder, &ctx, None)?;
                Ok(Some((folder.path().to_path_buf(), child_dest)))
            }
            FolderClass::Season { .. } => {
                self.ensure_directory_chain(destination_root, dest)?;
                self.link_tree_flat_walk(folder.path(), dest, filter)?;
                Ok(None)
            }
            FolderClass::Collection { .. } => {
                self.ensure_directory_chain(destination_root, dest)?;
                self.link_collection(folder.path(), dest, filter)?;
                Ok(None)
            }
        }
    }
}
