//! Vault file lookup and link extraction.
//!
//! This module provides utilities for finding files by name inside a vault
//! directory tree and for pulling wikilink targets out of note text.

pub mod extractor;
pub mod index;
pub mod walker;

pub use extractor::{ExtractedLink, LinkExtractor, LinkMode};
pub use index::VaultIndex;
pub use walker::{FileLocator, VaultWalker, VaultWalkerError};
