//! Invocation-wide settings shared by the pipelines.

use faire_model::ProjectMetadata;
use faire_standards::{FieldDictionary, Scope};

/// Read-only context for one invocation. Built before any row is processed.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub dictionary: FieldDictionary,
    /// NCBI taxon id for every sample.
    pub taxon_id: String,
    pub project: ProjectMetadata,
}

impl PipelineContext {
    /// Context with the dictionary's default taxon id and no project values.
    pub fn new(dictionary: FieldDictionary) -> Self {
        let taxon_id = dictionary.checklist.default_taxon_id.clone();
        Self {
            dictionary,
            taxon_id,
            project: ProjectMetadata::default(),
        }
    }

    pub fn with_taxon_id(mut self, taxon_id: Option<String>) -> Self {
        if let Some(taxon_id) = taxon_id.filter(|id| !id.trim().is_empty()) {
            self.taxon_id = taxon_id.trim().to_string();
        }
        self
    }

    pub fn with_project(mut self, project: ProjectMetadata) -> Self {
        self.project = project;
        self
    }

    /// Overrides the project-scoped `project_name` value.
    pub fn with_project_name(mut self, project_name: Option<String>) -> Self {
        let Some(name) = project_name.filter(|name| !name.trim().is_empty()) else {
            return self;
        };
        let sources: Vec<String> = self
            .dictionary
            .sample
            .iter()
            .filter(|spec| spec.scope == Scope::Project && spec.target == "project_name")
            .map(|spec| spec.source.clone())
            .collect();
        for source in sources {
            self.project.insert(source, name.trim());
        }
        self
    }
}
