//! Full implementation of the public API of the client library.
//!
//! Every operation maps onto one endpoint of the platform's REST API, except
//! [`StackCtlClient::find_stack`] and
//! [`StackCtlClient::wait_stack_async_action`], which combine calls.

mod wait;

use crate::{error::Result, StackCtlClient, StackCtlClientError};
use serde::Serialize;
use stackctl::{
    lookup,
    types::{AsyncAction, Server, ServerSetting, Stack},
};
use tracing::{info, instrument};

/// Body of a setting change request.
#[derive(Debug, Serialize)]
struct SetServerSettingRequest<'a> {
    setting_name: &'a str,
    setting_value: &'a str,
}

impl StackCtlClient {
    /// List every stack visible to the account.
    #[instrument(skip(self))]
    pub async fn stacks(&self) -> Result<Vec<Stack>> {
        self.get_all("stacks.json").await
    }

    /// Resolve a stack by name, optionally within one environment.
    #[instrument(skip(self))]
    pub async fn find_stack(&self, name: &str, environment: Option<&str>) -> Result<Stack> {
        let stacks = self.stacks().await?;
        let stack = lookup::find_stack(&stacks, name, environment)?
            .ok_or_else(|| StackCtlClientError::StackNotFound(name.to_string()))?;
        info!("Resolved stack {} to {}", name, stack.uid);
        Ok(stack.clone())
    }

    /// List the servers of a stack.
    #[instrument(skip(self))]
    pub async fn servers(&self, stack_uid: &str) -> Result<Vec<Server>> {
        self.get_all(&format!("stacks/{stack_uid}/servers.json"))
            .await
    }

    /// List the settings that can be changed on a server.
    #[instrument(skip(self))]
    pub async fn server_settings(
        &self,
        stack_uid: &str,
        server_uid: &str,
    ) -> Result<Vec<ServerSetting>> {
        self.get(&format!(
            "stacks/{stack_uid}/servers/{server_uid}/settings.json"
        ))
        .await
    }

    /// Ask the platform to change a setting on a server.
    ///
    /// Output: the [`AsyncAction`] applying the change. The change is not
    /// complete until that action finishes; see
    /// [`StackCtlClient::wait_stack_async_action`].
    #[instrument(skip(self, value))]
    pub async fn set_server_setting(
        &self,
        stack_uid: &str,
        server_uid: &str,
        key: &str,
        value: &str,
    ) -> Result<AsyncAction> {
        let request = SetServerSettingRequest {
            setting_name: key,
            setting_value: value,
        };
        let action: AsyncAction = self
            .post(
                &format!("stacks/{stack_uid}/servers/{server_uid}/settings.json"),
                &request,
            )
            .await?;
        info!("Started async action {}", action.id);
        Ok(action)
    }

    /// Current state of an async action of a stack.
    #[instrument(skip(self))]
    pub async fn stack_async_action(&self, action_id: i64, stack_uid: &str) -> Result<AsyncAction> {
        self.get(&format!("stacks/{stack_uid}/actions/{action_id}.json"))
            .await
    }
}
