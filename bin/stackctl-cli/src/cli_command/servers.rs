use crate::{cli_command::CliCommand, state::State};
use anyhow::Error;
use async_trait::async_trait;
use stackctl::types::Server;

#[derive(Debug)]
pub struct Servers;

impl Servers {
    fn row(server: &Server) -> String {
        format!(
            "{:<20} {:<16} {:<12} {}",
            server.name,
            server.address,
            server.server_type.as_deref().unwrap_or("-"),
            server.roles.join(",")
        )
    }
}

#[async_trait]
impl CliCommand for Servers {
    async fn execute(self: Box<Self>, state: &mut State) -> Result<(), Error> {
        let stack = state.stack().await?;
        let servers = state.client()?.servers(&stack.uid).await?;

        println!("{:<20} {:<16} {:<12} ROLES", "NAME", "ADDRESS", "TYPE");
        for server in &servers {
            println!("{}", Self::row(server));
        }
        Ok(())
    }

    fn parse_command_args(slice: &[&str]) -> Option<Self> {
        match slice {
            [] => Some(Servers),
            _ => None,
        }
    }

    fn format() -> &'static str {
        "servers"
    }

    fn aliases() -> Vec<&'static str> {
        vec!["servers", "ls"]
    }

    fn description() -> &'static str {
        "Lists the servers of the stack."
    }
}
