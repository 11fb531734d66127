use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tempfile::NamedTempFile;
use tracing::{info, info_span, warn};

use faire_core::{AccessionTable, PipelineContext, process_runs, process_samples};
use faire_ingest::{SheetAnchors, load_input, read_receipt};
use faire_model::{ReceiptEntry, RecordKind, ResolvedRun, SubmissionSummary};
use faire_report::{ExperimentOptions, experiment_set_xml, run_set_xml, sample_set_xml};
use faire_standards::{FieldDictionary, load_dictionary};

use crate::cli::{FieldsArgs, RunsArgs, SamplesArgs};
use crate::summary::apply_listing_style;
use crate::types::CommandResult;

/// A fully assembled document waiting to be written.
struct PendingOutput {
    path: PathBuf,
    contents: String,
}

pub fn run_samples(args: &SamplesArgs) -> Result<CommandResult> {
    let span = info_span!("samples", input = %args.input.display());
    let _guard = span.enter();

    let dictionary = load_dictionary(args.dictionary.clone()).context("load field dictionary")?;
    let input = load_input(&args.input, &anchors(&dictionary))
        .with_context(|| format!("read {}", args.input.display()))?;
    let sheet = input.sample_sheet()?;

    let context = PipelineContext::new(dictionary)
        .with_project(input.project.clone())
        .with_project_name(args.project_name.clone())
        .with_taxon_id(args.taxon_id.clone());
    let batch = process_samples(sheet, &context)?;
    log_warnings(&batch.summary);

    let document = sample_set_xml(&batch.records, &args.center_name)?;
    let outputs = vec![PendingOutput {
        path: args.output.clone(),
        contents: document,
    }];
    let written = write_outputs(outputs, args.dry_run)?;

    let result = CommandResult {
        command: "samples",
        input: args.input.clone(),
        dry_run: args.dry_run,
        outputs: written,
        summaries: vec![batch.summary],
        accessions: Vec::new(),
    };
    write_report(args.report.as_deref(), &result)?;
    Ok(result)
}

pub fn run_runs(args: &RunsArgs) -> Result<CommandResult> {
    let span = info_span!("runs", input = %args.input.display());
    let _guard = span.enter();

    let dictionary = load_dictionary(args.dictionary.clone()).context("load field dictionary")?;
    let receipt = read_receipt(&args.receipt)
        .with_context(|| format!("read receipt {}", args.receipt.display()))?;
    let table = AccessionTable::from_receipt(&receipt)?;
    info!(aliases = table.len(), "loaded receipt accessions");

    let input = load_input(&args.input, &anchors(&dictionary))
        .with_context(|| format!("read {}", args.input.display()))?;
    let sheet = input.experiment_run_sheet()?;
    let batch = process_runs(sheet, &dictionary, &table, args.assay.as_deref())?;
    log_warnings(&batch.summary);
    if batch.summary.has_skips() {
        warn!(
            skipped = batch.summary.skipped,
            "run rows skipped: sample not in receipt"
        );
    }

    let options = ExperimentOptions::new(&args.center_name, &args.study_accession)
        .with_instrument_model(Some(args.instrument_model.clone()));
    let experiments = experiment_set_xml(&batch.resolved, &options)?;
    let runs = run_set_xml(&batch.resolved, &args.center_name)?;
    let outputs = vec![
        PendingOutput {
            path: args.experiment_output.clone(),
            contents: experiments,
        },
        PendingOutput {
            path: args.run_output.clone(),
            contents: runs,
        },
    ];
    let written = write_outputs(outputs, args.dry_run)?;

    let result = CommandResult {
        command: "runs",
        input: args.input.clone(),
        dry_run: args.dry_run,
        outputs: written,
        accessions: resolved_accessions(&batch.resolved, &table),
        summaries: vec![batch.summary],
    };
    write_report(args.report.as_deref(), &result)?;
    Ok(result)
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let dictionary = load_dictionary(args.dictionary.clone()).context("load field dictionary")?;
    let kinds: Vec<RecordKind> = match args.record {
        Some(record) => vec![record.into()],
        None => RecordKind::ALL.to_vec(),
    };
    println!("Checklist: {}", dictionary.checklist.id);
    for kind in kinds {
        println!("{}", fields_table(&dictionary, kind));
    }
    Ok(())
}

pub(crate) fn fields_table(dictionary: &FieldDictionary, kind: RecordKind) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Record", "Source", "Target", "Rule", "Mandatory", "Default", "Units",
    ]);
    apply_listing_style(&mut table);
    for spec in dictionary.fields(kind) {
        let units = match (&spec.units, &spec.unit_column) {
            (Some(units), _) => units.clone(),
            (None, Some(column)) => format!("<{column}>"),
            (None, None) => "-".to_string(),
        };
        table.add_row(vec![
            kind.as_str().to_string(),
            spec.source.clone(),
            spec.target.clone(),
            spec.rule.as_str().to_string(),
            if spec.mandatory { "yes" } else { "no" }.to_string(),
            spec.default.clone().unwrap_or_else(|| "-".to_string()),
            units,
        ]);
    }
    table
}

/// Receipt entries of the samples the emitted runs point at, one per alias.
fn resolved_accessions(resolved: &[ResolvedRun], table: &AccessionTable) -> Vec<ReceiptEntry> {
    let mut entries: Vec<ReceiptEntry> = Vec::new();
    for run in resolved {
        let alias = run.record.sample_name.as_str();
        if entries.iter().any(|entry| entry.alias == alias) {
            continue;
        }
        if let Some(entry) = table.entry(alias) {
            entries.push(entry.clone());
        }
    }
    entries
}

fn anchors(dictionary: &FieldDictionary) -> SheetAnchors {
    SheetAnchors {
        sample: dictionary.identifiers.sample_alias.clone(),
        experiment_run: dictionary.identifiers.run_sample_name.clone(),
    }
}

fn log_warnings(summary: &SubmissionSummary) {
    for warning in &summary.warnings {
        warn!(record = %warning.record, field = %warning.field, "{}", warning.kind);
    }
}

/// Writes every document, or none on a dry run. Each document is first
/// staged next to its target; targets are only replaced once all staging
/// succeeded.
fn write_outputs(outputs: Vec<PendingOutput>, dry_run: bool) -> Result<Vec<PathBuf>> {
    if dry_run {
        for output in &outputs {
            info!(path = %output.path.display(), "dry run, output not written");
        }
        return Ok(outputs.into_iter().map(|output| output.path).collect());
    }
    let staged = outputs
        .into_iter()
        .map(|output| Ok((stage_file(&output.path, &output.contents)?, output.path)))
        .collect::<Result<Vec<_>>>()?;
    let mut paths = Vec::with_capacity(staged.len());
    for (file, path) in staged {
        persist_file(file, &path)?;
        info!(path = %path.display(), "wrote output");
        paths.push(path);
    }
    Ok(paths)
}

fn write_report(path: Option<&Path>, result: &CommandResult) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let json = serde_json::to_string_pretty(result).context("serialize report")?;
    let file = stage_file(path, &json)?;
    persist_file(file, path)?;
    info!(path = %path.display(), "wrote report");
    Ok(())
}

/// Writes `contents` to a temporary file in the target's directory.
fn stage_file(path: &Path, contents: &str) -> Result<NamedTempFile> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("create directory {}", parent.display()))?;
    let mut file = NamedTempFile::new_in(parent)
        .with_context(|| format!("stage {}", path.display()))?;
    file.write_all(contents.as_bytes())
        .and_then(|()| file.flush())
        .with_context(|| format!("stage {}", path.display()))?;
    Ok(file)
}

fn persist_file(file: NamedTempFile, path: &Path) -> Result<()> {
    file.persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
