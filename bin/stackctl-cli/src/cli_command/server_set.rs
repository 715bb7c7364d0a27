use crate::{cli_command::CliCommand, state::State};
use anyhow::{anyhow, bail, Error};
use async_trait::async_trait;
use stackctl::lookup::find_server;

#[derive(Debug)]
pub struct ServerSet {
    server: String,
    key: String,
    value: String,
}

#[async_trait]
impl CliCommand for ServerSet {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        let stack = state.stack().await?;
        let client = state.client()?;

        let servers = client.servers(&stack.uid).await?;
        let server = find_server(&servers, &self.server)?
            .ok_or_else(|| anyhow!("Server '{}' not found", self.server))?;
        println!("Server: {}", server.name);

        let settings = client.server_settings(&stack.uid, &server.uid).await?;
        if !settings.iter().any(|setting| setting.key == self.key) {
            bail!(
                "{} is not a valid setting or does not apply to this server",
                self.key
            );
        }

        println!("Please wait while your setting is applied...");
        let action = client
            .set_server_setting(&stack.uid, &server.uid, &self.key, &self.value)
            .await?;
        let response = client
            .wait_stack_async_action(action.id, &stack.uid, state.wait_options()?, true)
            .await?;

        println!("{response}");
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [server, key, value] => Some(ServerSet {
                server: server.to_string(),
                key: key.to_string(),
                value: value.to_string(),
            }),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "server-set <server name>|<server ip>|<server role> <setting> <value>"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["server-set"]
    }

    fn description() -> &'static str {
        "Sets and applies the value of a setting on a server, then waits for the
             platform to finish applying it. The server can be named by its name, IP
             address, DNS record or a role only it has.
             Example: stackctl server-set -s mystack lion server.name tiger"
    }
}
