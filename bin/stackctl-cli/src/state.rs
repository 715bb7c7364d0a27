use anyhow::anyhow;
use stackctl::{constants::env, types::Stack};
use stackctl_client::{StackCtlClient, WaitOptions};

use crate::cli::Cli;

/// What commands share during one invocation. The client and the stack are
/// only resolved once a command asks for them, so commands like `help` work
/// without any configuration.
#[derive(Debug)]
pub struct State {
    cli: Cli,
    client: Option<StackCtlClient>,
    stack: Option<Stack>,
}

impl State {
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            client: None,
            stack: None,
        }
    }

    pub fn client(&mut self) -> anyhow::Result<StackCtlClient> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let config = self.cli.client_config()?;
        let client = StackCtlClient::connect(&config);
        self.client = Some(client.clone());
        Ok(client)
    }

    pub fn wait_options(&mut self) -> anyhow::Result<WaitOptions> {
        Ok(self.client()?.config().wait)
    }

    /// The stack named on the command line.
    pub async fn stack(&mut self) -> anyhow::Result<Stack> {
        if let Some(stack) = &self.stack {
            return Ok(stack.clone());
        }

        let name = self.cli.stack.clone().ok_or_else(|| {
            anyhow!(
                "No stack specified. Use --stack or set {}.",
                env::STACK
            )
        })?;
        let client = self.client()?;
        let stack = client
            .find_stack(&name, self.cli.environment.as_deref())
            .await?;

        self.stack = Some(stack.clone());
        Ok(stack)
    }
}
