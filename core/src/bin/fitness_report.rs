use anyhow::Result;
use fitness_core::{load_cfg, load_packages, print_training_report, Package};

fn main() -> Result<()> {
    env_logger::init();

    let cfg_path = std::env::var("FITNESS_CFG").unwrap_or_else(|_| "fitness.json".to_string());
    let cfg = load_cfg(&cfg_path)?;

    let packages = match cfg.packages_path.as_deref() {
        Some(path) => load_packages(path)?,
        None => Package::samples(),
    };

    print_training_report(&packages, &cfg)?;
    log::debug!("metrics:\n{}", fitness_core::metrics::metrics().gather_text());
    Ok(())
}
