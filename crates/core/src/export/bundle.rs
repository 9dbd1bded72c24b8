//! Writing a resolved closure into a bundle directory.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use super::BUNDLE_PREFIX;
use super::transform::transform_note;
use crate::closure::{ClosureSet, ResolvedFile};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create bundle directory in {path}: {source}")]
    CreateBundle {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("path has no usable file name: {0}")]
    InvalidFileName(String),
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub bundle_dir: PathBuf,
    pub notes_written: usize,
    pub assets_written: usize,
}

/// A flat output directory holding copies of the exported files.
#[derive(Debug)]
pub struct Bundle {
    dir: PathBuf,
}

impl Bundle {
    /// Create a fresh, uniquely named bundle directory inside `parent`.
    /// The directory outlives the process.
    pub fn create(parent: &Path) -> Result<Self, ExportError> {
        let dir = tempfile::Builder::new()
            .prefix(BUNDLE_PREFIX)
            .tempdir_in(parent)
            .map_err(|e| ExportError::CreateBundle {
                path: parent.display().to_string(),
                source: e,
            })?
            .keep();

        debug!("Created bundle directory {}", dir.display());
        Ok(Self { dir })
    }

    #[cfg(test)]
    fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Copy every file of the closure into the bundle, then rewrite the
    /// copied notes for the target viewer.
    pub fn write(&self, closure: &ClosureSet) -> Result<ExportReport, ExportError> {
        let mut report = ExportReport {
            bundle_dir: self.dir.clone(),
            notes_written: 0,
            assets_written: 0,
        };

        for file in closure {
            let dest = self.copy_in(file)?;

            if file.is_note() {
                rewrite_note(&dest)?;
                report.notes_written += 1;
            } else {
                report.assets_written += 1;
            }
        }

        Ok(report)
    }

    fn copy_in(&self, file: &ResolvedFile) -> Result<PathBuf, ExportError> {
        let name = file
            .file_name()
            .ok_or_else(|| ExportError::InvalidFileName(file.path.display().to_string()))?;
        let dest = self.dir.join(name);

        fs::copy(&file.path, &dest).map_err(|e| ExportError::Copy {
            from: file.path.display().to_string(),
            to: dest.display().to_string(),
            source: e,
        })?;

        debug!("Copied {} into bundle", file.path.display());
        Ok(dest)
    }
}

/// Create a bundle in `parent` and write `closure` into it.
pub fn export_bundle(closure: &ClosureSet, parent: &Path) -> Result<ExportReport, ExportError> {
    Bundle::create(parent)?.write(closure)
}

fn rewrite_note(path: &Path) -> Result<(), ExportError> {
    let bytes = fs::read(path)
        .map_err(|e| ExportError::Read { path: path.display().to_string(), source: e })?;

    let content = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            warn!("{} is not valid UTF-8, replacing invalid bytes", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let rewritten = transform_note(&stem, &content);

    fs::write(path, rewritten)
        .map_err(|e| ExportError::Write { path: path.display().to_string(), source: e })
}
