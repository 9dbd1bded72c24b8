//! Export command implementation.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use mdbundle_core::closure::ClosureResolver;
use mdbundle_core::config::ConfigLoader;
use mdbundle_core::export::export_bundle;
use mdbundle_core::vault::{FileLocator, LinkMode, VaultIndex, VaultWalker};
use tracing::{debug, info};

use super::output::{print_closure_json, print_closure_plain};
use crate::{Cli, logging};

pub fn run(cli: Cli) -> Result<()> {
    let mut rc = ConfigLoader::load(cli.config.as_deref(), cli.vault.as_deref())
        .wrap_err("Error loading config")?;

    if let Some(depth) = cli.max_depth {
        rc.resolver.max_depth = depth;
    }
    if cli.single_link_per_line {
        rc.resolver.link_mode = LinkMode::Last;
    }

    let _log_guard = logging::init(&rc.logging)?;
    debug!("Resolved config: {:?}", rc);

    let walker = VaultWalker::with_exclusions(&rc.vault_root, rc.excluded_folders.clone())?;
    let vault_root = walker.root().to_path_buf();

    let locator: Box<dyn FileLocator> = if rc.use_index {
        Box::new(VaultIndex::build(&walker)?)
    } else {
        Box::new(walker)
    };

    let closure = ClosureResolver::new(locator.as_ref(), rc.resolver).resolve(&cli.name)?;

    if cli.dry_run {
        if cli.json {
            print_closure_json(&closure, &vault_root);
        } else {
            print_closure_plain(&closure);
        }
        return Ok(());
    }

    // Bundles always land in the working directory
    let report = export_bundle(&closure, Path::new("."))?;
    info!(
        "Exported {} notes and {} assets to {}",
        report.notes_written,
        report.assets_written,
        report.bundle_dir.display()
    );

    Ok(())
}
