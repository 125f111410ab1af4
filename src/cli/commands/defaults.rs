//! Print a manifest with defaults filled in

use std::path::Path;

use anyhow::Context;
use gitprovider::config::Manifest;
use gitprovider::output::OutputMode;

/// Print `path` with defaults applied, as TOML or JSON
pub fn defaults(path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let mut manifest = Manifest::load(path)
        .with_context(|| format!("cannot load manifest {}", path.display()))?;
    manifest.apply_defaults();

    match mode {
        OutputMode::Human => print!("{}", manifest.to_toml_string()?),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&manifest)?),
    }
    Ok(())
}
