//! Background worker that loads the datasets off the render thread.
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: the Zellij worker implementation

pub mod handler;
pub mod messages;

pub use handler::CountyflowWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
