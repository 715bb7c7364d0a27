//! Domain types, lookup rules, and shared context used by the crates of the
//! `stackctl` workspace.
//!
//! This crate does no I/O against the platform itself. It is a dependency of
//! `stackctl-client`, which talks to the API, and of the `stackctl` binary.
#![warn(unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(rustdoc::broken_intra_doc_links)]

pub mod constants;
pub mod error;
pub mod infrastructure;
pub mod lookup;
pub mod types;

pub use error::StackCtlError;
