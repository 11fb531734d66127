//! Record validation for FAIRe rows.
//!
//! - **sample**: category state machine and mandatory-field defaulting
//! - **run**: experiment/run row assembly, file and checksum checks

mod category;
mod checksum;
mod run;
mod sample;

pub use category::DefaultingStrategy;
pub use checksum::is_md5;
pub use run::build_run_record;
pub use sample::{CHECKLIST_TAG, validate_sample};
