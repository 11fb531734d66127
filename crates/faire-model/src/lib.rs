pub mod error;
pub mod issue;
pub mod receipt;
pub mod record;
pub mod summary;
pub mod table;

pub use error::{FaireError, Result};
pub use issue::{Checked, FieldWarning, WarningKind};
pub use receipt::{Receipt, ReceiptEntry};
pub use record::{
    Attribute, ExperimentRunRecord, FileDescriptor, RecordKind, ResolvedRun, SampleCategory,
    SampleRecord,
};
pub use summary::{AliasSuggestion, SubmissionSummary};
pub use table::{
    CellValue, EXPERIMENT_RUN_SHEET, PROJECT_SHEET, ProjectMetadata, Row, SAMPLE_SHEET, Sheet,
    format_number,
};
