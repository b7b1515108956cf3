//! Pipelines: linear plans that drive a holder through many movements.

mod plan;
mod registry;
mod walker;

pub use plan::Pipeline;
pub use registry::PipelineRegistry;
pub use walker::PipelineFsm;
