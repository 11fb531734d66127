use std::fs;
use std::path::Path;

use faire_ingest::{IngestError, SheetAnchors, load_input, read_receipt};
use faire_model::FaireError;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture");
}

#[test]
fn loads_csv_folder() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "sampleMetadata.csv",
        "# requirement_level_code,M,M,M\n\
         samp_name,samp_category,eventDate,samp_size\n\
         S1,sample,2019-10-16,1.0\n\
         ,,,\n\
         NC1,negative control,,\n",
    );
    write(
        dir.path(),
        "projectMetadata.csv",
        "requirement_level_code,section,term_name,project_level\n\
         M,Project,project_name,Rowley Shoals eDNA\n",
    );
    write(dir.path(), "notes.txt", "ignored");

    let input = load_input(dir.path(), &SheetAnchors::default()).expect("load input");
    let samples = input.sample_sheet().expect("sample sheet");
    assert_eq!(samples.rows.len(), 2);
    assert_eq!(samples.rows[0].line, 3);
    assert_eq!(samples.rows[0].text("samp_size").as_deref(), Some("1"));
    assert_eq!(samples.rows[1].text("samp_name").as_deref(), Some("NC1"));
    assert_eq!(input.project.get("project_name"), Some("Rowley Shoals eDNA"));
    assert!(input.experiment_runs.is_none());
}

#[test]
fn missing_sheet_is_structural() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "sampleMetadata.csv", "samp_name\nS1\n");
    let input = load_input(dir.path(), &SheetAnchors::default()).expect("load input");
    let err = input.experiment_run_sheet().unwrap_err();
    assert!(
        matches!(err, FaireError::MissingSheet { ref sheet } if sheet == "experimentRunMetadata")
    );
}

#[test]
fn unsupported_input_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("samples.txt");
    fs::write(&path, "samp_name").expect("write fixture");
    let err = load_input(&path, &SheetAnchors::default()).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedInput { .. }));
}

#[test]
fn missing_input_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_input(&dir.path().join("absent.xlsx"), &SheetAnchors::default()).unwrap_err();
    assert!(err.to_string().contains("absent.xlsx"), "{err}");
}

#[test]
fn reads_receipt_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("receipt.xml");
    fs::write(
        &path,
        r#"<RECEIPT success="true"><SAMPLE alias="A" accession="ERS1"/></RECEIPT>"#,
    )
    .expect("write receipt");
    let receipt = read_receipt(&path).expect("read receipt");
    assert_eq!(receipt.samples.len(), 1);
    assert_eq!(receipt.samples[0].accession, "ERS1");
}
