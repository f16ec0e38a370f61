//! Diagnostic sink for the linking core.
//!
//! The core never logs on its own: every noteworthy step is handed to a
//! `Reporter` passed in by the caller. `TracingReporter` turns those events into
//! `tracing` records; tests plug in their own recorder.

use std::path::Path;
use tracing::{debug, error, info, trace, warn};

use crate::errors::{error_chain, LinkError};
use crate::linker::FolderClass;

#[derive(Debug)]
pub enum Event<'a> {
    DirectoryCreated { path: &'a Path },
    Linked { src: &'a Path, dest: &'a Path },
    AlreadyPresent { path: &'a Path },
    WouldCreateDirectory { path: &'a Path },
    WouldLink { src: &'a Path, dest: &'a Path },
    Classified { folder: &'a Path, class: FolderClass },
    Failed { scope: &'a Path, error: &'a LinkError },
    Interrupted,
}

pub trait Reporter {
    fn report(&self, event: &Event<'_>);
}

/// Forwards events to the globally installed `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: &Event<'_>) {
        match event {
            Event::DirectoryCreated { path } => {
                debug!(path = %path.display(), "Created directory")
            }
            Event::Linked { src, dest } => {
                debug!(src = %src.display(), dest = %dest.display(), "Linked")
            }
            Event::AlreadyPresent { path } => {
                trace!(path = %path.display(), "Already present")
            }
            Event::WouldCreateDirectory { path } => {
                info!(action = "mkdir", path = %path.display(), "dry-run")
            }
            Event::WouldLink { src, dest } => {
                info!(action = "link", src = %src.display(), dest = %dest.display(), "dry-run")
            }
            Event::Classified { folder, class } => match class {
                FolderClass::Container => {
                    info!(folder = %folder.display(), "No direct matches; descending")
                }
                FolderClass::Season { items } => {
                    info!(folder = %folder.display(), items, "Mirroring folder tree")
                }
                FolderClass::Collection { items } => {
                    info!(folder = %folder.display(), items, "Flattening collection with prefixes")
                }
            },
            Event::Failed { scope, error } => {
                error!(
                    code = error.code(),
                    kind = error.kind(),
                    scope = %scope.display(),
                    error = %error_chain(*error),
                    "Linking failed; continuing with the remaining folders"
                )
            }
            Event::Interrupted => warn!("Interrupted; stopping before the remaining folders"),
        }
    }
}
