use std::path::{Path, PathBuf};

use crate::errors::LinkError;

use super::context::{LinkContext, NamingStrategy};
use super::entry::read_entries;
use super::filter::ExtensionFilter;
use super::resolve::{prefix_token, resolve};
use super::Linker;

impl Linker<'_> {
    /// Flatten the subtree under `source_dir` into `dest_dir`.
    ///
    /// Each file is renamed `"<prefix> - <name>"`, where the prefix comes from the
    /// folder that directly contains it (recomputed per folder, not inherited),
    /// so same-named files from sibling folders do not collide.
    pub fn link_collection(
        &mut self,
        source_dir: &Path,
        dest_dir: &Path,
        filter: &ExtensionFilter,
    ) -> Result<(), LinkError> {
        let mut pending: Vec<PathBuf> = vec![source_dir.to_path_buf()];

        while let Some(dir) = pending.pop() {
            self.check_interrupted()?;
            let prefix = prefix_token(&dir, self.options.prefix_words);
            let ctx = LinkContext::new(&dir, dest_dir, filter, NamingStrategy::CollectionPrefix);

            for entry in read_entries(&dir)? {
                self.check_interrupted()?;
                if entry.is_dir() {
                    pending.push(entry.into_path());
                    continue;
                }
                if !filter.matches(entry.path()) {
                    self.stats.files_filtered += 1;
                    continue;
                }
                let link = resolve(&entry, &ctx, prefix.as_deref())?;
                if let Some(parent) = link.parent() {
                    self.ensure_directory(parent)?;
                }
                self.ensure_hard_link(entry.path(), &link)?;
            }
        }
        Ok(())
    }
}
