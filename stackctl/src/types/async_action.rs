//! Long-running operations the platform runs on behalf of a request.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use time::OffsetDateTime;

use crate::StackCtlError;

/// An asynchronous server-side operation, identified by `id` and polled
/// until `finished_at` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AsyncAction {
    pub id: i64,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub started_via: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub started_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub finished_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub finished_success: Option<bool>,
    #[serde(default)]
    pub finished_message: Option<String>,
}

impl AsyncAction {
    pub fn is_complete(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Turns a finished action into the response shown to the user.
    ///
    /// Fails if the action has not finished. A finished action that does not
    /// report success or failure is an error when `result_required` is set
    /// and counts as a success otherwise.
    pub fn into_generic_response(
        self,
        result_required: bool,
    ) -> Result<GenericResponse, StackCtlError> {
        if !self.is_complete() {
            return Err(StackCtlError::ActionIncomplete(self.id));
        }

        let message = self.finished_message.unwrap_or_default();
        let status = match self.finished_success {
            Some(status) => status,
            None if result_required => {
                return Err(StackCtlError::MissingActionResult {
                    id: self.id,
                    outcome: message,
                })
            }
            None => true,
        };

        Ok(GenericResponse { status, message })
    }
}

/// The terminal answer of an operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenericResponse {
    pub status: bool,
    #[serde(default)]
    pub message: String,
}

impl Display for GenericResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.status { "Success" } else { "Failed" })?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}
