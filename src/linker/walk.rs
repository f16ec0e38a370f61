use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::LinkError;

use super::context::{LinkContext, NamingStrategy};
use super::entry::FsEntry;
use super::filter::ExtensionFilter;
use super::resolve::resolve;
use super::Linker;

impl Linker<'_> {
    /// Mirror `source` as `dest_dir/<source name>` in one top-down walk.
    ///
    /// A non-directory `source` is replaced by its parent. Directories are
    /// yielded before their contents, so every link target's parent exists by
    /// the time the file is reached. Returns the top-level destination folder.
    pub fn link_tree_flat_walk(
        &mut self,
        source: &Path,
        dest_dir: &Path,
        filter: &ExtensionFilter,
    ) -> Result<PathBuf, LinkError> {
        let source = if source.is_dir() {
            source
        } else {
            source.parent().ok_or_else(|| {
                LinkError::ContractViolation(format!("'{}' has no parent", source.display()))
            })?
        };
        let (Some(anchor), Some(name)) = (source.parent(), source.file_name()) else {
            return Err(LinkError::ContractViolation(format!(
                "cannot mirror '{}': it has no name",
                source.display()
            )));
        };

        let top = dest_dir.join(name);
        self.ensure_directory(&top)?;

        // Resolution is anchored at the source's parent so its own name is kept.
        let ctx = LinkContext::new(anchor, dest_dir, filter, NamingStrategy::TreeMirror);

        for item in WalkDir::new(source).min_depth(1).sort_by_file_name() {
            self.check_interrupted()?;
            let item = item?;
            if item.file_type().is_dir() {
                let dir = resolve(&FsEntry::directory(item.path()), &ctx, None)?;
                self.ensure_directory(&dir)?;
                continue;
            }
            if !filter.matches(item.path()) {
                self.stats.files_filtered += 1;
                continue;
            }
            let parent = resolve(&FsEntry::file(item.path()), &ctx, None)?;
            self.ensure_hard_link(item.path(), &parent.join(item.file_name()))?;
        }
        Ok(top)
    }
}
