use std::path::{Path, PathBuf};

use crate::errors::LinkError;

use super::context::{LinkContext, NamingStrategy};
use super::entry::read_entries;
use super::filter::ExtensionFilter;
use super::resolve::resolve;
use super::Linker;

impl Linker<'_> {
    /// Mirror the whole subtree under `source_dir` into `dest_dir`.
    ///
    /// Each level links its own files, then every subdirectory is resolved with
    /// `TreeMirror` relative to its parent, created and queued. The work stack
    /// keeps the call depth flat however deep the source tree is.
    pub fn link_tree(
        &mut self,
        source_dir: &Path,
        dest_dir: &Path,
        filter: &ExtensionFilter,
    ) -> Result<(), LinkError> {
        let mut pending: Vec<(PathBuf, PathBuf)> =
            vec![(source_dir.to_path_buf(), dest_dir.to_path_buf())];

        while let Some((src, dest)) = pending.pop() {
            self.check_interrupted()?;
            let ctx = LinkContext::new(&src, &dest, filter, NamingStrategy::TreeMirror);
            let entries = read_entries(&src)?;
            self.link_files(&entries, &dest, ctx.filter)?;

            for sub in entries.iter().filter(|e| e.is_dir()) {
                let resolved = resolve(sub, &ctx, None)?;
                self.ensure_directory(&resolved)?;
                pending.push((sub.path().to_path_buf(), resolved));
            }
        }
        Ok(())
    }
}
