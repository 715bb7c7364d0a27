use colored::Colorize;
use std::process::ExitCode;
use thiserror::Error;

use crate::{
    cli::Cli,
    cli_command::{parse_cli_command, ParseError},
    state::State,
};

/// Exit status for invalid command lines.
const USAGE_EXIT_CODE: u8 = 2;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Usage(#[from] ParseError),
    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

impl AppError {
    /// Print the error and return the matching process exit status.
    pub fn report(&self) -> ExitCode {
        match self {
            AppError::Usage(e) => {
                eprintln!("{e}");
                ExitCode::from(USAGE_EXIT_CODE)
            }
            AppError::Failed(e) => {
                eprintln!("{} {e:#}", "error:".red().bold());
                ExitCode::FAILURE
            }
        }
    }
}

/// Runs the command given on the command line.
pub async fn run(cli: Cli) -> Result<(), AppError> {
    let command = parse_cli_command(&cli.command_line())?;
    let mut state = State::new(cli);

    command.execute(&mut state).await?;
    Ok(())
}
