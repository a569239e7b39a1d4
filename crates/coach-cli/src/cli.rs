//! Command handlers and argument wrappers.
//!
//! Form arguments are parsed by clap into [`FormArgs`] and converted into the
//! core [`FormInput`] before anything else happens:
//!
//! ```text
//! User Input → CLI Args (clap) → FormInput → Request Builder / Controller
//! ```
//!
//! Values are kept as raw text so that the lenient builder sees exactly what
//! the user typed; `--strict` opts into validation.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use coach_core::{
    build, validate, FormInput, LifecycleController, LifecycleState, PlanService, RequestPreview,
};
use log::{debug, info};

use crate::renderer::TerminalRenderer;

/// Planning parameters shared by every command that takes a form.
#[derive(Args, Debug, Clone)]
pub struct FormArgs {
    /// Goals for the day, comma separated
    #[arg(long, help = "Goals for the day, comma separated (e.g. \"Study, Workout\")")]
    pub goals: String,
    /// Hours available, expected between 1 and 24
    #[arg(long, default_value = "8")]
    pub hours: String,
    /// Time the day starts, HH:MM
    #[arg(long, default_value = "09:00", value_name = "HH:MM")]
    pub start_time: String,
    /// Energy level: high, medium or low
    #[arg(long, default_value = "medium")]
    pub energy: String,
}

impl From<FormArgs> for FormInput {
    fn from(val: FormArgs) -> Self {
        FormInput {
            goals: val.goals,
            available_hours: val.hours,
            start_time: val.start_time,
            energy_level: val.energy,
        }
    }
}

/// Request a plan and render it
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub form: FormArgs,
    /// Reject malformed input instead of sending it as-is
    #[arg(long)]
    pub strict: bool,
}

/// Show the request a form would produce
#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub form: FormArgs,
    /// Print the JSON request body instead of a summary
    #[arg(long)]
    pub json: bool,
    /// Reject malformed input instead of previewing it as-is
    #[arg(long)]
    pub strict: bool,
}

/// Drives the lifecycle controller and renders what it observes.
pub struct Cli<S> {
    controller: LifecycleController<S>,
    renderer: TerminalRenderer,
}

impl<S: PlanService> Cli<S> {
    pub fn new(controller: LifecycleController<S>, renderer: TerminalRenderer) -> Self {
        Self {
            controller,
            renderer,
        }
    }

    /// Submits the form, waits for the call to settle and renders the final
    /// state. A failed request yields a failure exit code.
    pub async fn generate(&self, args: GenerateArgs) -> Result<ExitCode> {
        let input = FormInput::from(args.form);

        let submission = if args.strict {
            self.controller.submit_validated(&input)?
        } else {
            self.controller.submit(&input)
        };
        info!("Submitted request {}", submission.id());

        self.renderer.render(&self.controller.state().to_string())?;
        let outcome = submission.wait().await;
        debug!("Request settled: {outcome:?}");

        let state = self.controller.state();
        self.renderer.render(&state.to_string())?;

        Ok(match state {
            LifecycleState::Success(_) => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        })
    }

    /// Renders the request a form would produce without sending it.
    pub fn preview(&self, args: PreviewArgs) -> Result<ExitCode> {
        let input = FormInput::from(args.form);
        let request = if args.strict {
            validate(&input)?
        } else {
            build(&input)
        };

        if args.json {
            let body = serde_json::to_string_pretty(&request)
                .context("Failed to serialize request")?;
            println!("{body}");
        } else {
            self.renderer
                .render(&RequestPreview(&request).to_string())?;
        }

        Ok(ExitCode::SUCCESS)
    }
}
