//! Loading a FAIRe submission from a workbook or a CSV folder.

use std::path::{Path, PathBuf};

use faire_model::{
    EXPERIMENT_RUN_SHEET, FaireError, PROJECT_SHEET, ProjectMetadata, SAMPLE_SHEET, Sheet,
};
use tracing::{debug, info};

use crate::csv_folder::{find_sheet_file, list_csv_files, read_csv_sheet};
use crate::error::{IngestError, Result};
use crate::project::{TERM_COLUMN, project_metadata};
use crate::workbook::{Workbook, is_workbook};

/// Header anchor columns for the data sheets.
#[derive(Debug, Clone)]
pub struct SheetAnchors {
    pub sample: String,
    pub experiment_run: String,
}

impl Default for SheetAnchors {
    fn default() -> Self {
        Self {
            sample: "samp_name".to_string(),
            experiment_run: "samp_name".to_string(),
        }
    }
}

/// The sheets of one FAIRe submission.
#[derive(Debug, Clone)]
pub struct FaireInput {
    pub source: PathBuf,
    pub samples: Option<Sheet>,
    pub experiment_runs: Option<Sheet>,
    pub project: ProjectMetadata,
}

impl FaireInput {
    pub fn sample_sheet(&self) -> std::result::Result<&Sheet, FaireError> {
        self.samples
            .as_ref()
            .ok_or_else(|| FaireError::missing_sheet(SAMPLE_SHEET))
    }

    pub fn experiment_run_sheet(&self) -> std::result::Result<&Sheet, FaireError> {
        self.experiment_runs
            .as_ref()
            .ok_or_else(|| FaireError::missing_sheet(EXPERIMENT_RUN_SHEET))
    }
}

/// Loads every FAIRe sheet present at `path`.
///
/// Missing sheets are left as `None`; callers decide which ones are required.
pub fn load_input(path: &Path, anchors: &SheetAnchors) -> Result<FaireInput> {
    let wanted = [
        (SAMPLE_SHEET, anchors.sample.as_str()),
        (EXPERIMENT_RUN_SHEET, anchors.experiment_run.as_str()),
        (PROJECT_SHEET, TERM_COLUMN),
    ];

    let (samples, experiment_runs, project) = if path.is_dir() {
        let files = list_csv_files(path)?;
        debug!(dir = %path.display(), files = files.len(), "reading CSV folder");
        let read = |sheet: &str, anchor: &str| -> Result<Option<Sheet>> {
            find_sheet_file(&files, sheet)
                .map(|file| read_csv_sheet(file, sheet, anchor))
                .transpose()
        };
        (
            read(SAMPLE_SHEET, &anchors.sample)?,
            read(EXPERIMENT_RUN_SHEET, &anchors.experiment_run)?,
            read(PROJECT_SHEET, TERM_COLUMN)?,
        )
    } else if is_workbook(path) {
        debug!(path = %path.display(), "reading workbook");
        let mut workbook = Workbook::load(path, &wanted)?;
        (
            workbook.take(SAMPLE_SHEET),
            workbook.take(EXPERIMENT_RUN_SHEET),
            workbook.take(PROJECT_SHEET),
        )
    } else if !path.exists() {
        return Err(IngestError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
        ));
    } else {
        return Err(IngestError::UnsupportedInput {
            path: path.to_path_buf(),
        });
    };

    let project = project.as_ref().map(project_metadata).unwrap_or_default();
    info!(
        input = %path.display(),
        samples = samples.as_ref().map_or(0, |sheet| sheet.rows.len()),
        experiment_runs = experiment_runs.as_ref().map_or(0, |sheet| sheet.rows.len()),
        project_terms = project.values.len(),
        "loaded FAIRe input"
    );
    Ok(FaireInput {
        source: path.to_path_buf(),
        samples,
        experiment_runs,
        project,
    })
}
