//! Coach CLI Application
//!
//! Command-line front end for the productivity coach: collects the planning
//! form from flags, drives the request lifecycle and renders the result.

mod args;
mod cli;
mod renderer;

use std::{process::ExitCode, time::Duration};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use coach_core::{HttpPlanService, LifecycleController};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        endpoint,
        timeout,
        no_color,
        command,
    } = Args::parse();

    let service = HttpPlanService::builder()
        .with_endpoint(endpoint)
        .with_timeout(timeout.map(Duration::from_secs))
        .build()
        .context("Failed to initialize plan service")?;

    info!("Coach started, endpoint {}", service.endpoint());

    let cli = Cli::new(
        LifecycleController::new(service),
        TerminalRenderer::new(!no_color),
    );

    match command {
        Generate(args) => cli.generate(args).await,
        Preview(args) => cli.preview(args),
    }
}
