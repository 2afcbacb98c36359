use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use valence_core::models::polarity::Polarity;
use valence_core::ValenceConfig;

/// Walk untrained documents, asking for a label each time.
/// `+` / `-` record a polarity, `s` skips, `q` stops the session.
pub fn run(config: &ValenceConfig, limit: Option<usize>) -> Result<()> {
    let store = super::open_store(config)?;
    let pending = store.untrained(limit)?;

    if pending.is_empty() {
        println!("{}", "all training documents are labeled".green());
        return Ok(());
    }

    let mut labeled = 0usize;
    for doc in &pending {
        println!("\n{}", doc.text.black().on_white());

        let reply = loop {
            print!("polarity [+/-/s/q]: ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
            match line.trim() {
                "+" => break Some(Polarity::Plus),
                "-" => break Some(Polarity::Minus),
                "s" => break None,
                "q" => {
                    println!("{labeled} labeled this session");
                    return Ok(());
                }
                _ => println!("{}", "reply with + or - (s to skip, q to quit)".yellow()),
            }
        };

        if let Some(polarity) = reply {
            store.set_polarity(&doc.doc_id, polarity)?;
            labeled += 1;
        }
    }

    println!("{labeled} labeled this session");
    Ok(())
}
