//! Per-source pipeline and batch orchestration for netcentric.
//!
//! One source runs load → undirect → whole-graph metrics → per-component
//! metrics → report. A batch runs that pipeline once per source with
//! isolated failure handling: one bad file never aborts the rest.

pub mod batch;
pub mod error;

pub use batch::{
    default_output_path, process_batch, process_graph, process_source, BatchReport,
    SourceFailure, SourceOutcome,
};
pub use error::PipelineError;
