//! Transitive link closure over a vault.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, trace};

use super::types::{ClosureSet, DedupeKey, FileKind, LinkTarget, ResolvedFile};
use crate::vault::{FileLocator, LinkExtractor, LinkMode, VaultWalkerError};

/// Default limit on how many links deep a chain may go.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Error)]
pub enum ClosureError {
    #[error("Vault walker error: {0}")]
    Walker(#[from] VaultWalkerError),

    #[error("Failed to read note {path}: {source}")]
    ReadNote {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no notes found for '{0}'")]
    NoNotesFound(String),

    #[error("link depth exceeded {max_depth} while resolving '{target}'")]
    DepthExceeded { target: String, max_depth: usize },
}

#[derive(Debug, Clone, Copy)]
pub struct ResolverOptions {
    pub dedupe: DedupeKey,
    pub link_mode: LinkMode,
    pub max_depth: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            dedupe: DedupeKey::default(),
            link_mode: LinkMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A link waiting to be resolved, with its distance from the root.
#[derive(Debug)]
struct Pending {
    target: LinkTarget,
    depth: usize,
}

/// Walks the link graph rooted at one note.
///
/// Traversal is depth-first pre-order driven by an explicit stack. A single
/// visited set, seeded with the root before anything is read, guarantees
/// termination on cyclic graphs and that every key is emitted at most once.
/// A key is only recorded once its lookup succeeds, so a dangling link never
/// hides a later link with the same key.
pub struct ClosureResolver<'a, L: FileLocator + ?Sized> {
    locator: &'a L,
    extractor: LinkExtractor,
    options: ResolverOptions,
}

impl<'a, L: FileLocator + ?Sized> ClosureResolver<'a, L> {
    pub fn new(locator: &'a L, options: ResolverOptions) -> Self {
        Self { locator, extractor: LinkExtractor::new(options.link_mode), options }
    }

    /// Resolve `root_name` and everything it links to.
    ///
    /// Fails with [`ClosureError::NoNotesFound`] when nothing could be
    /// located. Links that do not resolve are dropped silently.
    pub fn resolve(&self, root_name: &str) -> Result<ClosureSet, ClosureError> {
        let root = LinkTarget::parse(root_name);
        debug!("Resolving link closure of {}", root.file_name());

        let mut closure = ClosureSet::default();
        let mut visited = HashSet::new();
        let mut stack = Vec::new();

        visited.insert(root.dedupe_key(self.options.dedupe));
        self.visit(Pending { target: root, depth: 0 }, &mut visited, &mut closure, &mut stack)?;

        while let Some(pending) = stack.pop() {
            let key = pending.target.dedupe_key(self.options.dedupe);
            if visited.contains(&key) {
                trace!("Already visited {}, skipping", pending.target.file_name());
                continue;
            }

            if pending.depth > self.options.max_depth {
                return Err(ClosureError::DepthExceeded {
                    target: pending.target.file_name().to_string(),
                    max_depth: self.options.max_depth,
                });
            }

            self.visit(pending, &mut visited, &mut closure, &mut stack)?;
        }

        if closure.is_empty() {
            return Err(ClosureError::NoNotesFound(root_name.to_string()));
        }

        debug!(
            "Closure of {} has {} notes and {} assets",
            root_name,
            closure.note_count(),
            closure.asset_count()
        );
        Ok(closure)
    }

    fn visit(
        &self,
        pending: Pending,
        visited: &mut HashSet<String>,
        closure: &mut ClosureSet,
        stack: &mut Vec<Pending>,
    ) -> Result<(), ClosureError> {
        let Some(path) = self.locator.locate(pending.target.file_name())? else {
            debug!("Link target not found in vault: {}", pending.target.file_name());
            return Ok(());
        };
        visited.insert(pending.target.dedupe_key(self.options.dedupe));

        if !pending.target.is_note() {
            closure.push(ResolvedFile { path, kind: FileKind::Asset });
            return Ok(());
        }

        let content = read_note(&path)?;
        closure.push(ResolvedFile { path, kind: FileKind::Note });

        // Reversed so the first link on the page is popped first
        let links = self.extractor.extract_links(&content);
        for link in links.into_iter().rev() {
            stack.push(Pending {
                target: LinkTarget::parse(&link.target),
                depth: pending.depth + 1,
            });
        }

        Ok(())
    }
}

fn read_note(path: &Path) -> Result<String, ClosureError> {
    let bytes = std::fs::read(path).map_err(|e| ClosureError::ReadNote {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
