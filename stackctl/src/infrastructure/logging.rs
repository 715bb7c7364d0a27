//! Utilities for our logging (tracing) infrastructure.

use std::fmt::Debug;
use tracing::{warn, Span};

/// For the current active span, record `field_value` for the field
/// `field_name`. This fields must already be defined in the current span.
///
/// All events that happen inside this span will have these fields attached as
/// additional data. For example, every API call opens a span with an empty
/// `request_id` field that is filled in once the request id is generated:
/// ```text
///   DEBUG stackctl_client::client: Sending request. method=GET path="stacks/abc/servers.json"
///     in stackctl_client::api::servers with request_id: "9cb5e6fe-aa86-43e9-b7c9-413c005cbb50"
/// ```
///
/// In debug builds this function warns if the field has NOT been defined.
pub fn record_field(field_name: &str, field_value: &dyn Debug) {
    if cfg!(debug_assertions) && !Span::current().has_field(field_name) {
        warn!("Field {} not defined in current span!", field_name);
    }

    // Ignore the resulting span.
    let _ = Span::current().record(field_name, &format!("{field_value:?}"));
}
