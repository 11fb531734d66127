//! CLI argument definitions for faire2ena.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use faire_model::RecordKind;
use faire_report::DEFAULT_INSTRUMENT_MODEL;

#[derive(Parser)]
#[command(
    name = "faire2ena",
    version,
    about = "Build ENA submission XML from FAIRe eDNA metadata",
    long_about = "Convert FAIRe eDNA metadata workbooks into ENA submission documents.\n\n\
                  Samples are mapped onto the ERC000024 water checklist. Experiments and \
                  runs are linked to the sample accessions returned in an ENA receipt."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the SAMPLE_SET document from the sample sheet.
    Samples(SamplesArgs),

    /// Build EXPERIMENT_SET and RUN_SET documents from the experiment/run sheet.
    Runs(RunsArgs),

    /// Print the active field dictionary.
    Fields(FieldsArgs),
}

#[derive(Parser)]
pub struct SamplesArgs {
    /// FAIRe workbook (.xlsx, .xls, .ods) or folder of per-sheet CSV files.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Submitting center name written on every SAMPLE.
    #[arg(long = "center-name")]
    pub center_name: String,

    /// Project name (default: `project_name` from the project sheet).
    #[arg(long = "project-name")]
    pub project_name: Option<String>,

    /// NCBI taxon id for every sample (default: from the field dictionary).
    #[arg(long = "taxon-id")]
    pub taxon_id: Option<String>,

    /// Output path for the SAMPLE_SET document.
    #[arg(long = "output", value_name = "PATH", default_value = "ena_samples.xml")]
    pub output: PathBuf,

    /// Alternative field dictionary (TOML).
    #[arg(long = "dictionary", value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write a JSON summary of the invocation.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RunsArgs {
    /// FAIRe workbook (.xlsx, .xls, .ods) or folder of per-sheet CSV files.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// ENA receipt from the sample submission.
    #[arg(long = "receipt", value_name = "PATH")]
    pub receipt: PathBuf,

    /// Study accession referenced by every EXPERIMENT.
    #[arg(long = "study-accession")]
    pub study_accession: String,

    /// Submitting center name written on every EXPERIMENT and RUN.
    #[arg(long = "center-name")]
    pub center_name: String,

    /// Output path for the EXPERIMENT_SET document.
    #[arg(
        long = "experiment-output",
        value_name = "PATH",
        default_value = "ena_experiments.xml"
    )]
    pub experiment_output: PathBuf,

    /// Output path for the RUN_SET document.
    #[arg(long = "run-output", value_name = "PATH", default_value = "ena_runs.xml")]
    pub run_output: PathBuf,

    /// Sequencing instrument model.
    #[arg(long = "instrument-model", default_value = DEFAULT_INSTRUMENT_MODEL)]
    pub instrument_model: String,

    /// Suffix appended to experiment and run aliases as `_<ASSAY>`.
    #[arg(long = "assay")]
    pub assay: Option<String>,

    /// Alternative field dictionary (TOML).
    #[arg(long = "dictionary", value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write a JSON summary of the invocation.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Only list fields of one record type.
    #[arg(long = "record", value_enum)]
    pub record: Option<RecordArg>,

    /// Alternative field dictionary (TOML).
    #[arg(long = "dictionary", value_name = "PATH")]
    pub dictionary: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RecordArg {
    Sample,
    Experiment,
    Run,
}

impl From<RecordArg> for RecordKind {
    fn from(value: RecordArg) -> Self {
        match value {
            RecordArg::Sample => RecordKind::Sample,
            RecordArg::Experiment => RecordKind::Experiment,
            RecordArg::Run => RecordKind::Run,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
