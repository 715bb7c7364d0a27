pub mod async_action;
pub mod envelope;
pub mod server;
pub mod stack;

pub use async_action::{AsyncAction, GenericResponse};
pub use envelope::{Envelope, Pagination};
pub use server::{Server, ServerSetting};
pub use stack::Stack;
