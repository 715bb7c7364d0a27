pub mod help;
pub mod server_set;
pub mod server_settings;
pub mod servers;

pub use help::Help;
pub use server_set::ServerSet;
pub use server_settings::ServerSettings;
pub use servers::Servers;

use crate::state::State;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;
use tracing::{debug, info};

pub type DynCommand = Box<dyn CliCommand>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command \"{0}\". Type \"help\" to view list of commands.")]
    NoMatch(String),
    #[error("Usage: stackctl {0}")]
    Usage(&'static str),
}

#[async_trait]
pub trait CliCommand: Debug {
    /// Execute the command.
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), anyhow::Error>;

    /// Given the proper string arguments to a command, return an instance of
    /// this command.
    fn parse_command_args(args: &[&str]) -> Option<Self>
    where
        Self: Sized;

    /// Expected format for this command such as "servers". Used for
    /// generating help and usage strings dynamically.
    fn format() -> &'static str
    where
        Self: Sized;

    fn aliases() -> Vec<&'static str>
    where
        Self: Sized;

    fn description() -> &'static str
    where
        Self: Sized;

    /// Convert this command into a `Box<dyn Command>` suitable for
    /// dynamically dispatching the execute function.
    fn to_dyn(self) -> DynCommand
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    fn from_args(args: &[&str]) -> Result<Self, ParseError>
    where
        Self: Sized,
    {
        let (command, rest) = args
            .split_first()
            .ok_or_else(|| ParseError::NoMatch(String::new()))?;
        debug!("Looking for match for \"{}\"", command);

        // Check if this command matches any of our aliases. Otherwise return.
        // We do this check here to avoid doing it inside every
        // `CliCommand::parse_command_args` function.
        if !Self::aliases().contains(command) {
            return Err(ParseError::NoMatch(command.to_string()));
        }
        info!("Found valid command: {}", command);

        Self::parse_command_args(rest).ok_or(ParseError::Usage(Self::format()))
    }
}

// Iterate through our registered commands and see if any of them can parse
// these arguments. No arguments at all means "help".
pub fn parse_cli_command(args: &[String]) -> Result<DynCommand, ParseError> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    if args.is_empty() {
        return Ok(Help::from_args(&["help"])?.to_dyn());
    }

    info!("Attempting to parse command line: {:?}", args);

    for cmd_parse in get_cmd_functions::<Parse>() {
        match cmd_parse(&args) {
            Ok(c) => return Ok(c),
            Err(ParseError::NoMatch(_)) => continue,
            Err(e) => return Err(e),
        }
    }

    Err(ParseError::NoMatch(args[0].to_string()))
}

/// Helper type to implement [GetCmdFunction]. This returns the parsing
/// function for all commands and allows the [parse_cli_command] to iterate
/// through these functions.
struct Parse;

impl GetCmdFunction for Parse {
    type FunctionSignature = fn(&[&str]) -> Result<DynCommand, ParseError>;

    fn get_function<T: CliCommand + 'static>() -> Self::FunctionSignature {
        |args| T::from_args(args).map(|c| c.to_dyn())
    }
}

/// Several features need the analogous function of every command, e.g. the
/// parsing function for each implementor of [CliCommand].
///
/// This function returns that function for every registered command. Which
/// function is fetched is chosen by the type parameter, through its
/// [GetCmdFunction] implementation.
///
/// New commands must be registered here; the rest of the code will know how
/// to use them.
pub fn get_cmd_functions<F: GetCmdFunction>() -> Vec<F::FunctionSignature> {
    vec![
        F::get_function::<Help>(),
        F::get_function::<ServerSet>(),
        F::get_function::<ServerSettings>(),
        F::get_function::<Servers>(),
    ]
}

/// Maps an implementor, Self, to a function generic over `T: CliCommand`.
///
/// See [get_cmd_functions] for how this is used.
pub trait GetCmdFunction {
    /// The signature of the function this implementor will be returning.
    type FunctionSignature;
    /// Given a specific implementor of CliCommand, T, return the correct
    /// function implementation for that type.
    fn get_function<T: CliCommand + 'static>() -> Self::FunctionSignature;
}
