//! Command-line arguments

use anyhow::Context;
use clap::{AppSettings, Parser};
use stackctl::constants::{env, DEFAULT_API_URI};
use stackctl_client::{config::ConfigFile, Config};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "stackctl", version, about = "Manage the servers of a stack")]
#[clap(setting = AppSettings::TrailingVarArg)]
pub struct Cli {
    /// Location of client config file.
    /// If this arg is not provided, the `token` arg must be provided.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// API base URI.
    #[clap(long = "uri", conflicts_with = "config")]
    pub api_uri: Option<String>,
    /// API access token. Overrides the token of the config file.
    #[clap(long, env = env::ACCESS_TOKEN, hide_env_values = true)]
    pub token: Option<String>,
    /// Location of a PEM file with the CA chain to trust for the API.
    #[clap(long, conflicts_with = "config")]
    pub ca_chain: Option<PathBuf>,

    /// Name of the stack to work on.
    #[clap(short = 's', long, env = env::STACK)]
    pub stack: Option<String>,
    /// Environment of the stack, needed when several stacks share a name.
    #[clap(short = 'e', long, env = env::ENVIRONMENT)]
    pub environment: Option<String>,

    /// How often to check on a running operation, e.g. "5s".
    #[clap(long)]
    pub check_frequency: Option<humantime::Duration>,
    /// How long to wait for a running operation, e.g. "20m".
    #[clap(long)]
    pub timeout: Option<humantime::Duration>,

    /// Command to run. Type "help" to view list of commands.
    pub command: Option<String>,
    /// Arguments of the command. Options are no longer recognized once the
    /// first argument is seen, so values like "-1" are passed through.
    #[clap(multiple_values = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// The command followed by its arguments.
    pub fn command_line(&self) -> Vec<String> {
        self.command
            .iter()
            .chain(self.args.iter())
            .cloned()
            .collect()
    }

    pub fn client_config(&self) -> anyhow::Result<Config> {
        let mut config_file = match &self.config {
            Some(path) => ConfigFile::from_file(path)
                .with_context(|| format!("Unable to load config file {}", path.display()))?,
            None => ConfigFile::new(DEFAULT_API_URI, ""),
        };

        if let Some(api_uri) = &self.api_uri {
            config_file.api_uri = api_uri.clone();
        }
        if let Some(token) = &self.token {
            config_file.access_token = token.clone();
        }
        if let Some(ca_chain) = &self.ca_chain {
            config_file.ca_chain = Some(ca_chain.clone());
        }
        if let Some(check_frequency) = self.check_frequency {
            config_file.wait.check_frequency = check_frequency.into();
        }
        if let Some(timeout) = self.timeout {
            config_file.wait.timeout = timeout.into();
        }

        Ok(Config::from_config_file(config_file)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn flags_may_follow_the_command() {
        let cli = Cli::try_parse_from([
            "stackctl",
            "server-set",
            "-s",
            "mystack",
            "lion",
            "server.name",
            "tiger",
        ])
        .unwrap();

        assert_eq!(cli.stack.as_deref(), Some("mystack"));
        assert_eq!(
            cli.command_line(),
            vec!["server-set", "lion", "server.name", "tiger"]
        );
    }

    #[test]
    fn values_may_start_with_a_hyphen() {
        let cli = Cli::try_parse_from([
            "stackctl",
            "-s",
            "mystack",
            "server-set",
            "lion",
            "swap.offset",
            "-1",
        ])
        .unwrap();
        assert_eq!(
            cli.command_line(),
            vec!["server-set", "lion", "swap.offset", "-1"]
        );

        let cli = Cli::try_parse_from(["stackctl", "server-set", "lion", "some.key", "--foo"])
            .unwrap();
        assert_eq!(cli.args, vec!["lion", "some.key", "--foo"]);
    }

    #[test]
    fn uri_and_ca_chain_conflict_with_config() {
        let result = Cli::try_parse_from([
            "stackctl",
            "--config",
            "stackctl.toml",
            "--uri",
            "http://127.0.0.1:9000",
            "servers",
        ]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "stackctl",
            "--config",
            "stackctl.toml",
            "--ca-chain",
            "ca.chain",
            "servers",
        ]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from([
            "stackctl",
            "--config",
            "stackctl.toml",
            "--token",
            "abc",
            "servers",
        ])
        .unwrap();
        assert_eq!(cli.token.as_deref(), Some("abc"));
    }

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let cli = Cli::try_parse_from([
            "stackctl",
            "--uri",
            "http://127.0.0.1:9000/api/3",
            "--token",
            "abc",
            "--timeout",
            "90s",
            "servers",
        ])
        .unwrap();

        let config = cli.client_config().unwrap();
        assert_eq!(config.api_uri.to_string(), "http://127.0.0.1:9000/api/3");
        assert_eq!(config.access_token.expose(), "abc");
        assert_eq!(config.wait.timeout, Duration::from_secs(90));
        assert_eq!(config.wait.check_frequency, Duration::from_secs(5));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let cli = Cli::try_parse_from([
            "stackctl",
            "--config",
            "/nonexistent/stackctl.toml",
            "servers",
        ])
        .unwrap();

        let error = cli.client_config().unwrap_err();
        assert!(error.to_string().contains("/nonexistent/stackctl.toml"));
    }
}
