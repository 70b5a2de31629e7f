use std::path::{Path, PathBuf};

use crudgen_core::Category;

/// A rendered template and its resolved output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub template: String,
    pub category: Category,
    pub path: PathBuf,
    pub content: String,
}

/// What happened to a single template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Rendered and written to the path
    Written(PathBuf),
    /// Rendered, but an existing file at the path was kept
    Kept(PathBuf),
    /// Not rendered because its category is skipped
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateOutcome {
    pub template: String,
    pub category: Category,
    pub outcome: Outcome,
}

/// Result of generating one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub table: String,
    pub entity: String,
    pub outcomes: Vec<TemplateOutcome>,
}

impl GenerationReport {
    pub fn new(table: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            entity: entity.into(),
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, template: &str, category: Category, outcome: Outcome) {
        self.outcomes.push(TemplateOutcome {
            template: template.to_string(),
            category,
            outcome,
        });
    }

    /// Paths of files written in this run
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|o| match &o.outcome {
            Outcome::Written(path) => Some(path.as_path()),
            _ => None,
        })
    }

    /// Paths of existing files left untouched
    pub fn kept(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|o| match &o.outcome {
            Outcome::Kept(path) => Some(path.as_path()),
            _ => None,
        })
    }

    /// Templates skipped by category
    pub fn skipped(&self) -> impl Iterator<Item = &TemplateOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.outcome == Outcome::Skipped)
    }
}
