//! Recursive vault directory walker and file lookup.

use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::export::BUNDLE_PREFIX;

#[derive(Debug, Error)]
pub enum VaultWalkerError {
    #[error("vault root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to read vault root {0}: {1}")]
    UnreadableRoot(String, #[source] std::io::Error),

    #[error("failed to walk vault directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// Resolves a file name (e.g. `Note.md`, `pic.png`) to a file inside the vault.
pub trait FileLocator {
    /// Returns the absolute path of the first regular file named `file_name`,
    /// or `None` when the vault has no such file.
    fn locate(&self, file_name: &str) -> Result<Option<PathBuf>, VaultWalkerError>;
}

/// Walker that scans the vault tree on every lookup.
///
/// Traversal is depth-first with the entries of each directory visited in
/// lexical file-name order, so the first match is deterministic.
#[derive(Debug)]
pub struct VaultWalker {
    root: PathBuf,
    /// Folders to exclude from walking (relative paths from vault root).
    excluded_folders: Vec<PathBuf>,
}

impl VaultWalker {
    /// Create a new walker for the given vault root.
    pub fn new(root: &Path) -> Result<Self, VaultWalkerError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Create a new walker with folder exclusions.
    ///
    /// Excluded folders can be specified as:
    /// - Relative paths from vault root (e.g., "automations/templates")
    /// - Absolute paths (will be converted to relative)
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, VaultWalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| VaultWalkerError::MissingRoot(root.display().to_string()))?;

        // A root we cannot list is a structural failure, not a skipped entry.
        std::fs::read_dir(&root)
            .map_err(|e| VaultWalkerError::UnreadableRoot(root.display().to_string(), e))?;

        let excluded_folders = excluded_folders
            .into_iter()
            .map(|p| {
                if p.is_absolute() {
                    p.strip_prefix(&root).unwrap_or(&p).to_path_buf()
                } else {
                    p
                }
            })
            .collect();

        Ok(Self { root, excluded_folders })
    }

    /// Visit every regular file of the vault in traversal order until `visit`
    /// breaks.
    ///
    /// Unreadable entries below the root are skipped; failing to read the
    /// root itself aborts the walk.
    pub fn visit_files<F>(&self, mut visit: F) -> Result<(), VaultWalkerError>
    where
        F: FnMut(&DirEntry) -> ControlFlow<()>,
    {
        let walk = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e));

        for entry in walk {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(VaultWalkerError::WalkError(
                        self.root.display().to_string(),
                        e,
                    ));
                }
                Err(e) => {
                    debug!("Skipping unreadable vault entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if visit(&entry).is_break() {
                break;
            }
        }

        Ok(())
    }

    /// Check if an entry should be excluded from walking.
    fn is_excluded(&self, entry: &DirEntry) -> bool {
        // Never filter the root directory (depth 0)
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_string_lossy();

        if name.starts_with('.') {
            return true;
        }

        if matches!(name.as_ref(), "node_modules" | "target" | "__pycache__" | "venv") {
            return true;
        }

        // Bundles written by earlier exports into the vault
        if entry.file_type().is_dir() && name.starts_with(BUNDLE_PREFIX) {
            return true;
        }

        if !self.excluded_folders.is_empty()
            && let Ok(relative) = entry.path().strip_prefix(&self.root)
        {
            return self.excluded_folders.iter().any(|excluded| relative.starts_with(excluded));
        }

        false
    }

    /// Get the vault root path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileLocator for VaultWalker {
    fn locate(&self, file_name: &str) -> Result<Option<PathBuf>, VaultWalkerError> {
        let mut found = None;

        self.visit_files(|entry| {
            if entry.file_name().to_str() == Some(file_name) {
                found = Some(entry.path().to_path_buf());
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })?;

        Ok(found)
    }
}
