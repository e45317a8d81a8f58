//! Pipeline execution

pub mod runner;

pub use crate::execution::runner::{
    EventHandler, ExecutionEvent, PipelineOutcome, PipelineRunner,
};
