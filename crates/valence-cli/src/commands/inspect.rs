use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;

use valence_core::errors::{InferenceError, ValenceError};
use valence_core::models::polarity::Polarity;
use valence_core::ValenceConfig;
use valence_inference::InferenceEngine;

/// Score a slice of the working set and print each verdict.
pub async fn run(config: &ValenceConfig, trigrams: bool, sample: usize) -> Result<()> {
    let store = super::open_store(config)?;
    let docs = store.working_set()?;
    let engine = InferenceEngine::new(Arc::new(store), config)?;

    let mut plus_count = 0usize;
    let mut scored = 0usize;
    for doc in docs.iter().take(sample) {
        let outcome = if trigrams {
            engine.inspect_trigrams(&doc.text).await
        } else {
            engine.inspect(&doc.text).await
        };

        match outcome {
            Ok(result) => {
                scored += 1;
                let shown = if result.label == Polarity::Plus {
                    plus_count += 1;
                    doc.text.white().on_blue()
                } else {
                    doc.text.black().on_white()
                };
                println!("{shown}");
                println!("  {} {:.4} vs {:.4}\n", result.label, result.likeliness, result.vs);
            }
            Err(ValenceError::Inference(InferenceError::InputRejected { reason })) => {
                println!("{}\n", format!("skipped ({reason}): {}", doc.text).dimmed());
            }
            Err(err) => return Err(err.into()),
        }
    }

    println!("scored {scored}, positive {plus_count}");
    Ok(())
}
