//! This crate is an implementation of a client to the platform's REST API.
#![warn(unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use client::StackCtlClient;
pub use config::{Config, WaitOptions};
pub use error::StackCtlClientError;
