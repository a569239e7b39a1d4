use clap::{Parser, Subcommand};

use crate::cli::{GenerateArgs, PreviewArgs};

/// Command-line client for the productivity coach
///
/// Coach turns your goals for the day, the hours you have, when you start and
/// how energetic you feel into a prioritized schedule with productivity tips,
/// generated by a remote plan-generation service.
#[derive(Parser)]
#[command(version, about, name = "coach")]
pub struct Args {
    /// URL of the plan-generation service. Defaults to the hosted service
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Give up on a request after this many seconds. Waits indefinitely when
    /// omitted
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Coach CLI
///
/// - `generate`: Request a plan and render it
/// - `preview`: Show the request that would be sent, without sending it
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a plan for the day
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Show the request a form would produce
    #[command(alias = "p")]
    Preview(PreviewArgs),
}
