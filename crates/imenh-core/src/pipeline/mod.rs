pub mod config;
mod blur;
mod cartoon;
mod orchestrator;
mod tone;
mod types;

pub use cartoon::edge_mask;
pub use orchestrator::{enhance, enhance_reported};
pub use types::{NoOpReporter, PipelineStage, ProgressReporter};
