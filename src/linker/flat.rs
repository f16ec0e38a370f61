use std::path::Path;

use crate::errors::LinkError;

use super::entry::{read_entries, FsEntry};
use super::filter::ExtensionFilter;
use super::Linker;

impl Linker<'_> {
    /// Link every matching file directly inside `source_dir` to `dest_dir/<name>`.
    /// Subdirectories are skipped; `dest_dir` must already exist.
    pub fn link_flat(
        &mut self,
        source_dir: &Path,
        dest_dir: &Path,
        filter: &ExtensionFilter,
    ) -> Result<(), LinkError> {
        let entries = read_entries(source_dir)?;
        self.link_files(&entries, dest_dir, filter)
    }

    pub(super) fn link_files(
        &mut self,
        entries: &[FsEntry],
        dest_dir: &Path,
        filter: &ExtensionFilter,
    ) -> Result<(), LinkError> {
        for entry in entries.iter().filter(|e| !e.is_dir()) {
            self.check_interrupted()?;
            if !filter.matches(entry.path()) {
                self.stats.files_filtered += 1;
                continue;
            }
            let Some(name) = entry.file_name() else {
                continue;
            };
            self.ensure_hard_link(entry.path(), &dest_dir.join(name))?;
        }
        Ok(())
    }
}
