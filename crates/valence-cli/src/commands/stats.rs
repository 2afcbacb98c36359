use anyhow::Result;

use valence_core::ValenceConfig;

pub fn run(config: &ValenceConfig) -> Result<()> {
    let store = super::open_store(config)?;
    let stats = store.stats()?;

    println!("training  {}", stats.training_total);
    println!("  labeled +  {}", stats.labeled_plus);
    println!("  labeled -  {}", stats.labeled_minus);
    println!("  untrained  {}", stats.untrained);
    println!("working   {}", stats.working_total);
    Ok(())
}
