//! Validate a manifest

use std::path::Path;

use anyhow::Context;
use gitprovider::config::Manifest;
use gitprovider::core::models::Validate;
use gitprovider::output::{CheckReport, OutputMode};

/// Apply defaults, validate, and exit with status 1 on any violation
pub fn check(path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let mut manifest = Manifest::load(path)
        .with_context(|| format!("cannot load manifest {}", path.display()))?;

    manifest.apply_defaults();
    let result = manifest.validate();
    if let Err(errs) = &result {
        log::info!("{} violation(s) in {}", errs.len(), path.display());
    }

    let report = CheckReport::new(manifest.len(), &result);
    report.render(mode);

    if !report.valid {
        std::process::exit(1);
    }
    Ok(())
}
