//! Dry-run output formatting.

use std::path::Path;

use mdbundle_core::closure::{ClosureSet, FileKind, ResolvedFile};
use serde::Serialize;

/// Formatted resolved file for JSON output.
#[derive(Debug, Serialize)]
pub struct FileOutput {
    pub path: String,
    pub relative_path: String,
    pub kind: FileKind,
}

impl FileOutput {
    pub fn from_file(file: &ResolvedFile, vault_root: &Path) -> Self {
        let relative = file.path.strip_prefix(vault_root).unwrap_or(&file.path);
        Self {
            path: file.path.to_string_lossy().to_string(),
            relative_path: relative.to_string_lossy().to_string(),
            kind: file.kind,
        }
    }
}

/// Print one absolute path per line.
pub fn print_closure_plain(closure: &ClosureSet) {
    for path in closure.paths() {
        println!("{}", path.display());
    }
}

pub fn print_closure_json(closure: &ClosureSet, vault_root: &Path) {
    let outputs: Vec<FileOutput> =
        closure.iter().map(|f| FileOutput::from_file(f, vault_root)).collect();
    match serde_json::to_string_pretty(&outputs) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error serializing output: {e}"),
    }
}
