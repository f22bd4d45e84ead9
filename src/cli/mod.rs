use std::env;

use anyhow::{Context, Result};

mod args;
mod context;
mod exit_status;
mod prompt;
mod report;
mod run;

pub use args::{Action, Arguments};
pub use exit_status::ExitStatus;
pub use prompt::{LinePrompt, Prompt, StdinPrompt, stdin_prompt};
pub use run::run;

/// Run the requested actions against the working directory, prompting on
/// standard input and reporting on standard output.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let working_dir = env::current_dir().context("Failed to resolve working directory")?;
    let mut prompt = stdin_prompt();
    let mut stdout = std::io::stdout();

    run(&args, &working_dir, &mut prompt, &mut stdout)?;

    Ok(ExitStatus::Success)
}
