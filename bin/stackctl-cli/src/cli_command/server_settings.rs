use crate::{cli_command::CliCommand, state::State};
use anyhow::{anyhow, Error};
use async_trait::async_trait;
use stackctl::lookup::find_server;

#[derive(Debug)]
pub struct ServerSettings {
    server: String,
}

#[async_trait]
impl CliCommand for ServerSettings {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        let stack = state.stack().await?;
        let client = state.client()?;

        let servers = client.servers(&stack.uid).await?;
        let server = find_server(&servers, &self.server)?
            .ok_or_else(|| anyhow!("Server '{}' not found", self.server))?;
        println!("Server: {}", server.name);

        let settings = client.server_settings(&stack.uid, &server.uid).await?;
        for setting in &settings {
            let readonly = if setting.readonly { " (read-only)" } else { "" };
            println!("{:<32} {}{}", setting.key, setting.display_value(), readonly);
        }
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [server] => Some(ServerSettings {
                server: server.to_string(),
            }),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "server-settings <server name>|<server ip>|<server role>"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["server-settings", "settings"]
    }

    fn description() -> &'static str {
        "Lists the settings of a server and their current values."
    }
}
