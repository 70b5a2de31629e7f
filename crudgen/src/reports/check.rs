//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the manifest, if one was loaded.
    pub manifest: Option<PathBuf>,
    /// Number of loaded templates.
    pub template_count: usize,
    /// Tables that were parsed and rendered.
    pub tables: Vec<TableSummary>,
}

/// A table that passed validation.
#[derive(Debug)]
pub struct TableSummary {
    pub table: String,
    pub entity: String,
    pub columns: usize,
    /// Number of files its templates would produce
    pub files: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if self.tables.is_empty() {
            out.warning("no tables configured; only the templates were checked");
            out.newline();
        }

        match &self.manifest {
            Some(path) => out.preformatted(&format!("✓ {} is valid", path.display())),
            None => out.preformatted("✓ configuration is valid"),
        }
        out.newline();

        out.key_value("Templates", &self.template_count.to_string());
        if !self.tables.is_empty() {
            out.section("Tables");
            for table in &self.tables {
                out.list_item(&format!(
                    "{} ({}): {} column{}, {} file{}",
                    table.table,
                    table.entity,
                    table.columns,
                    if table.columns == 1 { "" } else { "s" },
                    table.files,
                    if table.files == 1 { "" } else { "s" },
                ));
            }
        }
    }
}
