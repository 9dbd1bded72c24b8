//! Types for link closure resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Key used to decide whether two link targets refer to the same file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DedupeKey {
    /// File name without extension, so `note.md` and `note.png` collide.
    #[default]
    Stem,
    /// Full file name including extension.
    FileName,
}

/// A link target normalized to the file name it must match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Markdown note; bare names get `.md` appended.
    Note(String),
    /// Any other file. Never scanned for links.
    Asset(String),
}

impl LinkTarget {
    pub fn parse(raw: &str) -> Self {
        match Path::new(raw).extension() {
            None => Self::Note(format!("{raw}.md")),
            Some(ext) if ext == "md" => Self::Note(raw.to_string()),
            Some(_) => Self::Asset(raw.to_string()),
        }
    }

    pub fn file_name(&self) -> &str {
        match self {
            Self::Note(name) | Self::Asset(name) => name,
        }
    }

    pub fn is_note(&self) -> bool {
        matches!(self, Self::Note(_))
    }

    pub fn dedupe_key(&self, key: DedupeKey) -> String {
        let name = self.file_name();
        match (key, Path::new(name).extension()) {
            // Only the extension is dropped; any folder part stays in the key
            (DedupeKey::Stem, Some(ext)) => name[..name.len() - ext.len() - 1].to_string(),
            _ => name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Note,
    Asset,
}

/// A vault file selected for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFile {
    /// Absolute path inside the vault.
    pub path: PathBuf,
    pub kind: FileKind,
}

impl ResolvedFile {
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    pub fn is_note(&self) -> bool {
        self.kind == FileKind::Note
    }
}

/// Insertion-ordered set of files reachable from a root note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClosureSet {
    files: Vec<ResolvedFile>,
}

impl ClosureSet {
    pub(crate) fn push(&mut self, file: ResolvedFile) {
        self.files.push(file);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedFile> {
        self.files.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|f| f.path.as_path())
    }

    pub fn note_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_note()).count()
    }

    pub fn asset_count(&self) -> usize {
        self.len() - self.note_count()
    }
}

impl<'a> IntoIterator for &'a ClosureSet {
    type Item = &'a ResolvedFile;
    type IntoIter = std::slice::Iter<'a, ResolvedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_name_is_note() {
        assert_eq!(LinkTarget::parse("B"), LinkTarget::Note("B.md".into()));
        assert_eq!(LinkTarget::parse("My Note"), LinkTarget::Note("My Note.md".into()));
    }

    #[test]
    fn test_parse_md_extension_is_note() {
        assert_eq!(LinkTarget::parse("B.md"), LinkTarget::Note("B.md".into()));
    }

    #[test]
    fn test_parse_other_extension_is_asset() {
        assert_eq!(LinkTarget::parse("pic.png"), LinkTarget::Asset("pic.png".into()));
        assert_eq!(LinkTarget::parse("paper.pdf"), LinkTarget::Asset("paper.pdf".into()));
        assert!(!LinkTarget::parse("v1.2").is_note());
    }

    #[test]
    fn test_dedupe_keys() {
        let note = LinkTarget::parse("note");
        let image = LinkTarget::parse("note.png");

        assert_eq!(note.dedupe_key(DedupeKey::Stem), image.dedupe_key(DedupeKey::Stem));
        assert_eq!(note.dedupe_key(DedupeKey::FileName), "note.md");
        assert_eq!(image.dedupe_key(DedupeKey::FileName), "note.png");
    }

    #[test]
    fn test_stem_key_keeps_folder_part() {
        assert_eq!(LinkTarget::parse("sub/B").dedupe_key(DedupeKey::Stem), "sub/B");
        assert_eq!(LinkTarget::parse("B").dedupe_key(DedupeKey::Stem), "B");
    }

    #[test]
    fn test_closure_counts() {
        let mut set = ClosureSet::default();
        set.push(ResolvedFile { path: PathBuf::from("/v/A.md"), kind: FileKind::Note });
        set.push(ResolvedFile { path: PathBuf::from("/v/pic.png"), kind: FileKind::Asset });

        assert_eq!(set.len(), 2);
        assert_eq!(set.note_count(), 1);
        assert_eq!(set.asset_count(), 1);
        assert_eq!(set.paths().last(), Some(Path::new("/v/pic.png")));
        assert_eq!(set.iter().next().unwrap().file_name(), Some("A.md"));
    }
}
