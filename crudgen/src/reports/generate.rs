//! Generate command report data structures.

use std::path::{Path, PathBuf};

use crudgen_codegen::{GeneratedFile, GenerationReport, Outcome};

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Project root, used to shorten displayed paths.
    pub project_root: PathBuf,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk, one report per table.
    Written(Vec<GenerationReport>),
    /// Dry-run preview.
    Preview(Vec<TablePreview>),
}

/// Files that would be generated for one table.
#[derive(Debug)]
pub struct TablePreview {
    pub table: String,
    pub files: Vec<GeneratedFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(reports) => self.render_written(out, reports),
            GenerationResult::Preview(previews) => self.render_preview(out, previews),
        }
    }
}

impl GenerateReport {
    fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.project_root)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    fn render_written(&self, out: &mut dyn Output, reports: &[GenerationReport]) {
        let mut written = 0;

        for report in reports {
            out.section(&format!("{} ({})", report.table, report.entity));
            for outcome in &report.outcomes {
                match &outcome.outcome {
                    Outcome::Written(path) => {
                        written += 1;
                        out.added_item(&self.display(path));
                    }
                    Outcome::Kept(path) => {
                        out.list_item(&format!("{} (kept existing)", self.display(path)));
                    }
                    Outcome::Skipped => out.list_item(&format!(
                        "{} (skipped {})",
                        outcome.template, outcome.category
                    )),
                }
            }
            out.newline();
        }

        out.key_value(
            "Generated",
            &format!(
                "{} file{} in {}",
                written,
                if written == 1 { "" } else { "s" },
                self.project_root.display()
            ),
        );
    }

    fn render_preview(&self, out: &mut dyn Output, previews: &[TablePreview]) {
        let mut count = 0;

        for preview in previews {
            for file in &preview.files {
                count += 1;
                out.divider(&format!("{} ({})", self.display(&file.path), preview.table));
                out.preformatted(&file.content);
            }
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", count));
    }
}
