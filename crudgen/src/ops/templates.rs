//! Templates operation - describe the loaded template set.

use crudgen_codegen::{GeneratorConfig, TemplateSet};

use crate::reports::{TemplateInfo, TemplatesReport};

/// Describe every template and where its output goes when it has no path directive.
pub fn templates(templates: &TemplateSet, config: &GeneratorConfig) -> TemplatesReport {
    let templates = templates
        .iter()
        .map(|unit| TemplateInfo {
            name: unit.name().to_string(),
            category: unit.category(),
            path_expr: unit.path_expr().map(str::to_string),
            file_name_expr: unit.file_name_expr().map(str::to_string),
            fallback_dir: config.fallback_dir(unit.category()),
            skipped: config.skip.is_skipped(unit.category()),
        })
        .collect();

    TemplatesReport {
        template_dir: config.template_dir.clone(),
        templates,
    }
}
