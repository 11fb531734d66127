use faire_model::{ResolvedRun, Result};

use crate::common::{
    document_writer, end, finish_document, start, start_record, write_attribute_list,
    write_declaration, write_empty_element, write_text_element,
};

pub const DEFAULT_INSTRUMENT_MODEL: &str = "Illumina NovaSeq 6000";

/// The fixed library-design block shared by every experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryDesign {
    pub description: String,
    pub strategy: String,
    pub source: String,
    pub selection: String,
    /// Child element of `LIBRARY_LAYOUT`.
    pub layout: String,
}

impl Default for LibraryDesign {
    fn default() -> Self {
        Self {
            description: "eDNA metabarcoding".to_string(),
            strategy: "AMPLICON".to_string(),
            source: "METAGENOMIC".to_string(),
            selection: "PCR".to_string(),
            layout: "PAIRED".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentOptions {
    pub center_name: String,
    pub study_accession: String,
    pub instrument_model: String,
    pub design: LibraryDesign,
}

impl ExperimentOptions {
    pub fn new(center_name: impl Into<String>, study_accession: impl Into<String>) -> Self {
        Self {
            center_name: center_name.into(),
            study_accession: study_accession.into(),
            instrument_model: DEFAULT_INSTRUMENT_MODEL.to_string(),
            design: LibraryDesign::default(),
        }
    }

    #[must_use]
    pub fn with_instrument_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model.filter(|model| !model.trim().is_empty()) {
            self.instrument_model = model;
        }
        self
    }
}

/// Builds the `EXPERIMENT_SET` document, one `EXPERIMENT` per resolved run.
pub fn experiment_set_xml(runs: &[ResolvedRun], options: &ExperimentOptions) -> Result<String> {
    let design = &options.design;
    let mut xml = document_writer();
    write_declaration(&mut xml)?;
    start(&mut xml, "EXPERIMENT_SET")?;
    for run in runs {
        let record = &run.record;
        start_record(&mut xml, "EXPERIMENT", &run.experiment_alias, &options.center_name)?;
        write_text_element(&mut xml, "TITLE", &run.experiment_alias)?;
        write_empty_element(
            &mut xml,
            "STUDY_REF",
            &[("accession", options.study_accession.as_str())],
        )?;

        start(&mut xml, "DESIGN")?;
        write_text_element(&mut xml, "DESIGN_DESCRIPTION", &design.description)?;
        write_empty_element(
            &mut xml,
            "SAMPLE_DESCRIPTOR",
            &[("accession", run.sample_accession.as_str())],
        )?;
        start(&mut xml, "LIBRARY_DESCRIPTOR")?;
        let library_name = record.library_id.as_deref().unwrap_or(&run.experiment_alias);
        write_text_element(&mut xml, "LIBRARY_NAME", library_name)?;
        write_text_element(&mut xml, "LIBRARY_STRATEGY", &design.strategy)?;
        write_text_element(&mut xml, "LIBRARY_SOURCE", &design.source)?;
        write_text_element(&mut xml, "LIBRARY_SELECTION", &design.selection)?;
        start(&mut xml, "LIBRARY_LAYOUT")?;
        write_empty_element(&mut xml, &design.layout, &[])?;
        end(&mut xml, "LIBRARY_LAYOUT")?;
        if let Some(protocol) = record.construction_protocol() {
            write_text_element(&mut xml, "LIBRARY_CONSTRUCTION_PROTOCOL", &protocol)?;
        }
        end(&mut xml, "LIBRARY_DESCRIPTOR")?;
        end(&mut xml, "DESIGN")?;

        start(&mut xml, "PLATFORM")?;
        start(&mut xml, "ILLUMINA")?;
        write_text_element(&mut xml, "INSTRUMENT_MODEL", &options.instrument_model)?;
        end(&mut xml, "ILLUMINA")?;
        end(&mut xml, "PLATFORM")?;

        write_attribute_list(
            &mut xml,
            "EXPERIMENT_ATTRIBUTES",
            "EXPERIMENT_ATTRIBUTE",
            &record.attributes,
        )?;
        end(&mut xml, "EXPERIMENT")?;
    }
    end(&mut xml, "EXPERIMENT_SET")?;
    finish_document(xml)
}
