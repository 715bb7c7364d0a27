//! Servers and their settings.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;
use time::OffsetDateTime;

/// A managed compute instance that belongs to a stack.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Server {
    pub uid: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub dns_record: Option<String>,
    #[serde(default)]
    pub vendor_uid: Option<String>,
    #[serde(default)]
    pub server_type: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub stack_uid: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Server {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.eq_ignore_ascii_case(role))
    }
}

/// A setting the platform allows to be changed on a particular server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerSetting {
    pub key: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub readonly: bool,
}

impl ServerSetting {
    /// Value as it should be shown to a user: strings without quotes, other
    /// JSON values in their compact form and nothing for `null`.
    pub fn display_value(&self) -> String {
        match &self.value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl Display for ServerSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.display_value())
    }
}
