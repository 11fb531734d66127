//! ENA submission document assembly.
//!
//! Each builder returns the complete document as a `String`; writing it to
//! disk is left to the caller so nothing is written until every document of
//! an invocation has been assembled.
//!
//! - **SAMPLE_SET**: one `SAMPLE` per validated sample
//! - **EXPERIMENT_SET**: one `EXPERIMENT` per resolved run row
//! - **RUN_SET**: one `RUN` per resolved run row

mod common;
mod experiments;
mod runs;
mod samples;

pub use experiments::{
    DEFAULT_INSTRUMENT_MODEL, ExperimentOptions, LibraryDesign, experiment_set_xml,
};
pub use runs::{CHECKSUM_METHOD, FILE_TYPE, run_set_xml};
pub use samples::sample_set_xml;
