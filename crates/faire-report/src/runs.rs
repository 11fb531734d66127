use faire_model::{ResolvedRun, Result};

use crate::common::{
    document_writer, end, finish_document, start, start_record, write_declaration,
    write_empty_element,
};

pub const FILE_TYPE: &str = "fastq";
pub const CHECKSUM_METHOD: &str = "MD5";

/// Builds the `RUN_SET` document. Each `RUN` refers to its experiment by the
/// alias used in the `EXPERIMENT_SET`.
pub fn run_set_xml(runs: &[ResolvedRun], center_name: &str) -> Result<String> {
    let mut xml = document_writer();
    write_declaration(&mut xml)?;
    start(&mut xml, "RUN_SET")?;
    for run in runs {
        start_record(&mut xml, "RUN", &run.run_alias, center_name)?;
        write_empty_element(
            &mut xml,
            "EXPERIMENT_REF",
            &[("refname", run.experiment_alias.as_str())],
        )?;
        start(&mut xml, "DATA_BLOCK")?;
        start(&mut xml, "FILES")?;
        for file in run.record.files() {
            write_empty_element(
                &mut xml,
                "FILE",
                &[
                    ("filename", file.filename.as_str()),
                    ("filetype", FILE_TYPE),
                    ("checksum_method", CHECKSUM_METHOD),
                    ("checksum", file.checksum.as_str()),
                ],
            )?;
        }
        end(&mut xml, "FILES")?;
        end(&mut xml, "DATA_BLOCK")?;
        end(&mut xml, "RUN")?;
    }
    end(&mut xml, "RUN_SET")?;
    finish_document(xml)
}
