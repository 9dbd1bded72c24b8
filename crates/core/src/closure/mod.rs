//! Link closure resolution.
//!
//! Starting from one note, follows `[[...]]` links through the vault and
//! collects every note and asset reachable from it, each exactly once.

pub mod resolver;
pub mod types;

pub use resolver::{ClosureError, ClosureResolver, DEFAULT_MAX_DEPTH, ResolverOptions};
pub use types::{ClosureSet, DedupeKey, FileKind, LinkTarget, ResolvedFile};
