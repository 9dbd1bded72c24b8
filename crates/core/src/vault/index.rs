//! One-shot file-name index over the vault.

use std::collections::HashMap;
use std::ops::ControlFlow;
use std::path::PathBuf;

use tracing::debug;

use super::walker::{FileLocator, VaultWalker, VaultWalkerError};

/// In-memory map from file name to the first path carrying it.
///
/// Built with a single walk in the same order [`VaultWalker`] searches, so
/// lookups resolve exactly as a fresh walk would. Lives for one run only.
#[derive(Debug, Default)]
pub struct VaultIndex {
    by_name: HashMap<String, PathBuf>,
}

impl VaultIndex {
    /// Walk the vault once and record every file name.
    pub fn build(walker: &VaultWalker) -> Result<Self, VaultWalkerError> {
        let mut by_name = HashMap::new();

        walker.visit_files(|entry| {
            if let Some(name) = entry.file_name().to_str() {
                by_name.entry(name.to_string()).or_insert_with(|| entry.path().to_path_buf());
            }
            ControlFlow::Continue(())
        })?;

        debug!("Indexed {} file names under {}", by_name.len(), walker.root().display());

        Ok(Self { by_name })
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.by_name.len()
    }
}

impl FileLocator for VaultIndex {
    fn locate(&self, file_name: &str) -> Result<Option<PathBuf>, VaultWalkerError> {
        Ok(self.by_name.get(file_name).cloned())
    }
}
