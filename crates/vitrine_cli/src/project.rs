//! Site scaffolding

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use vitrine_site::{SiteConfig, CONFIG_FILE};

/// Write a default `vitrine.toml` into `dir`, creating the directory.
///
/// Refuses to overwrite an existing config.
pub fn init_site(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let config = SiteConfig::default().to_toml()?;
    fs::write(&path, format!("# Vitrine site content\n\n{config}"))
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(path)
}

/// Load the site config from `path`, or `vitrine.toml` in the working
/// directory when present, or the built-in content otherwise.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("failed to load site config from {}", path.display())),
        None => {
            let local = Path::new(CONFIG_FILE);
            if local.exists() {
                Ok(SiteConfig::load(local)?)
            } else {
                tracing::info!("no {CONFIG_FILE} found, using built-in content");
                Ok(SiteConfig::default())
            }
        }
    }
}
