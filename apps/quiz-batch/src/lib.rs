//! Batch tool around quiz-core: merge quiz files, drop duplicates, fill in
//! answers from an answered corpus and export MyTestX or crib text.

pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

pub use crate::pipeline::{execute, process, Outcome};

pub fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Loading {} input files...", config.inputs.len());
    let outcome = execute(&config)?;
    tracing::info!("Done, {} tests in output", outcome.records.len());

    Ok(())
}
