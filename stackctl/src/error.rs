use thiserror::Error;

#[derive(Debug, Error)]
pub enum StackCtlError {
    // Lookup errors
    #[error("More than one server matches '{needle}': {}", .names.join(", "))]
    AmbiguousServer { needle: String, names: Vec<String> },
    #[error("More than one stack is named '{name}'. Specify an environment ({})", .environments.join(", "))]
    AmbiguousStack {
        name: String,
        environments: Vec<String>,
    },

    // Async action errors
    #[error("Async action {0} has not completed yet")]
    ActionIncomplete(i64),
    #[error("Async action {id} completed without a usable result: {outcome}")]
    MissingActionResult { id: i64, outcome: String },

    // TLS errors
    #[error("No certificates found in {0}")]
    NoCertificates(String),

    // Wrapped errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error(transparent)]
    WebPki(#[from] tokio_rustls::webpki::Error),
}
