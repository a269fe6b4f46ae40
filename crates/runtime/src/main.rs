#![deny(clippy::all, clippy::pedantic)]
//! # Boule Runtime
//!
//! Headless driver for the physics step: builds a small demo scene, steps it,
//! and logs body positions as the balls come to rest.

mod app;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = app::Args::parse();
    let summary = app::run(&args)?;

    tracing::info!(
        "Simulation finished after {} steps; {} of {} balls at rest.",
        summary.steps,
        summary.resting,
        summary.dynamic
    );
    Ok(())
}
