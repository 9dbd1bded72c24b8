//! Export a note and everything it links to from a markdown vault.
//!
//! The [`closure`] module walks `[[...]]` links from a root note using the
//! lookup and extraction helpers in [`vault`]; [`export`] writes the result
//! into a self-contained bundle directory.

pub mod closure;
pub mod config;
pub mod export;
pub mod vault;

pub use closure::{ClosureError, ClosureResolver, ClosureSet, ResolverOptions};
pub use export::{ExportError, ExportReport, export_bundle};
pub use vault::{FileLocator, VaultIndex, VaultWalker};
