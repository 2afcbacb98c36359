use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use valence_core::ValenceConfig;
use valence_harvest::ingest_dir;

pub fn run(config: &ValenceConfig, dir: &Path) -> Result<()> {
    let store = super::open_store(config)?;
    let report = ingest_dir(&store, dir)?;

    println!(
        "{}",
        format!(
            "training +{}, working +{}, skipped {}, purged {}",
            report.training, report.working, report.skipped, report.purged
        )
        .green()
    );
    Ok(())
}
