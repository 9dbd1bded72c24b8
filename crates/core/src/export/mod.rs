//! Exporting a link closure as a self-contained bundle.
//!
//! Files are copied flat into a fresh directory, and the copied notes are
//! rewritten so they render in a plain markdown viewer.

pub mod bundle;
pub mod transform;

pub use bundle::{Bundle, ExportError, ExportReport, export_bundle};
pub use transform::{fix_newlines, rewrite_image_links, transform_note};

/// Name prefix of every bundle directory.
pub const BUNDLE_PREFIX: &str = "mdbundle-";
