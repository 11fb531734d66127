//! FAIRe to ENA pipelines.
//!
//! - **samples**: sample sheet → validated `SampleRecord`s
//! - **accession**: receipt → `AccessionTable`
//! - **runs**: experiment/run sheet → `ResolvedRun`s, with skip reporting

pub mod accession;
pub mod context;
pub mod runs;
pub mod samples;

pub use accession::{AccessionTable, SUGGESTION_THRESHOLD};
pub use context::PipelineContext;
pub use runs::{RunBatch, build_run_records, process_runs, resolve_runs};
pub use samples::{SampleBatch, process_samples};
