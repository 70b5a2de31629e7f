//! Check operation - validate templates and tables without writing.

use std::path::Path;

use crudgen_codegen::{Generator, TableTarget};
use eyre::{Context, Result};

use crate::reports::{CheckReport, TableSummary};

/// Execute the check operation.
///
/// Every table is parsed and rendered in memory, so template errors that only
/// show up with real data are reported too.
pub fn check(
    generator: &Generator,
    targets: &[TableTarget],
    manifest: Option<&Path>,
) -> Result<CheckReport> {
    let mut tables = Vec::new();

    for target in targets {
        let table = generator
            .load_table(&target.table)
            .wrap_err_with(|| format!("Invalid table '{}'", target.table))?;
        let files = generator
            .preview(&target.table, &target.entity)
            .wrap_err_with(|| format!("Failed to render table '{}'", target.table))?;

        tables.push(TableSummary {
            table: target.table.clone(),
            entity: target.entity.clone(),
            columns: table.len(),
            files: files.len(),
        });
    }

    Ok(CheckReport {
        manifest: manifest.map(Path::to_path_buf),
        template_count: generator.templates().len(),
        tables,
    })
}
