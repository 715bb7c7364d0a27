//! Stacks as returned by the platform API.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use time::OffsetDateTime;

/// A named deployment grouping of servers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stack {
    pub uid: String,
    pub name: String,
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub cloud: Option<String>,
    #[serde(default)]
    pub fqdn: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Display for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.environment.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{} ({})", self.name, self.environment)
        }
    }
}
