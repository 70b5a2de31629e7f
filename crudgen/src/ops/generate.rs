//! Generate operation - render templates for each table.

use crudgen_codegen::{Generator, TableTarget};
use eyre::{Context, Result};

use crate::reports::{GenerateReport, GenerationResult, TablePreview};

/// Execute the generate operation.
///
/// Tables are processed in order. Files written before a failure stay on disk.
pub fn generate(
    generator: &Generator,
    targets: &[TableTarget],
    dry_run: bool,
) -> Result<GenerateReport> {
    let result = if dry_run {
        let previews = targets
            .iter()
            .map(|target| -> Result<TablePreview> {
                let files = generator
                    .preview(&target.table, &target.entity)
                    .wrap_err_with(|| format!("Failed to render table '{}'", target.table))?;
                Ok(TablePreview {
                    table: target.table.clone(),
                    files,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        GenerationResult::Preview(previews)
    } else {
        let reports = generator
            .generate_all(targets)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(reports)
    };

    Ok(GenerateReport {
        project_root: generator.config().project_root.clone(),
        result,
    })
}
