//! Pipelines.
//!
//! The correction pipeline is implemented here, along with its building blocks,
//! and the module provides a light [pipeline::Pipeline] trait.
pub mod batch;
pub mod confirm;
pub mod correction;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod progress;

pub use batch::{BatchProcessor, CorrectionResult};
pub use confirm::{Confirm, StdinConfirm};
pub use correction::{CorrectionPipeline, RunOutcome, RunState};
pub use pipeline::Pipeline;
pub use progress::{ProgressState, RunReport};
