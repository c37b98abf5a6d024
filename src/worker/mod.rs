//! Background worker tasks for recipe generation.
//!
//! This module implements the tasks that call the generation backend so the
//! event loop never blocks on the network. Each request runs on its own tokio
//! task and reports back through a channel, with distributed tracing context
//! carried across the task boundary.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::RecipeWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
