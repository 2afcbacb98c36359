use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use valence_core::ValenceConfig;
use valence_harvest::{Harvester, SearchClient};

pub async fn run(config: &ValenceConfig, pages: usize, out: &Path) -> Result<()> {
    std::fs::create_dir_all(out)?;
    let client = SearchClient::new(config.harvest.clone())?;
    let harvester = Harvester::new(client, out);

    let fetched = harvester.run(pages).await?;
    println!(
        "{}",
        format!("{fetched} posts written to {}", out.display()).green()
    );
    Ok(())
}
