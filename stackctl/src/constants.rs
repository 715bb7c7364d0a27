//! Constants that are shared between other crates in this workspace.
//! Crate-specific constants should go in their respective crates.

use std::time::Duration;

pub const DEFAULT_API_URI: &str = "https://app.cloud66.com/api/3";

/// How often a pending async action is polled.
pub const DEFAULT_CHECK_FREQUENCY: Duration = Duration::from_secs(5);
/// How long to poll an async action before giving up.
pub const DEFAULT_ACTION_TIMEOUT: Duration = Duration::from_secs(20 * 60);

pub mod headers {
    pub const REQUEST_ID: &str = "x-request-id";
}

pub mod env {
    pub const ACCESS_TOKEN: &str = "STACKCTL_TOKEN";
    pub const STACK: &str = "STACKCTL_STACK";
    pub const ENVIRONMENT: &str = "STACKCTL_ENVIRONMENT";
}
