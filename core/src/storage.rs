use std::path::Path;

use anyhow::Context;
use log::{info, warn};

use crate::models::Package;
use crate::package::parse_packages_json;
use crate::types::Cfg;

/// Leser inn oppsett fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-oppsett.
pub fn load_cfg(path: &str) -> anyhow::Result<Cfg> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {path}"))?;
        let cfg: Cfg = serde_json::from_str(&contents)
            .with_context(|| format!("invalid config JSON in {path}"))?;
        info!("config loaded from {} (fail_fast={})", path, cfg.fail_fast());
        Ok(cfg)
    } else {
        info!("no config at {}, using defaults (fail_fast=true)", path);
        Ok(Cfg::default())
    }
}

/// Leser pakkeliste fra disk (JSON).
/// Hvis filen ikke finnes, returneres standardpakkene.
pub fn load_packages(path: &str) -> anyhow::Result<Vec<Package>> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read packages {path}"))?;
        let packages = parse_packages_json(&contents)
            .with_context(|| format!("invalid packages JSON in {path}"))?;
        info!("{} packages loaded from {}", packages.len(), path);
        Ok(packages)
    } else {
        warn!("no packages at {}, falling back to built-in samples", path);
        Ok(Package::samples())
    }
}

/// Lagrer pakkeliste til disk som JSON (pretty-print).
pub fn save_packages(packages: &[Package], path: &str) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(packages)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {path}"))?;
    info!("{} packages saved to {}", packages.len(), path);
    Ok(())
}
