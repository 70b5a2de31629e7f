//! Templates command report data structures.

use std::path::PathBuf;

use crudgen_core::Category;

use super::output::{Output, Report};

/// Report data describing a template directory.
#[derive(Debug)]
pub struct TemplatesReport {
    pub template_dir: PathBuf,
    pub templates: Vec<TemplateInfo>,
}

/// A single loaded template.
#[derive(Debug)]
pub struct TemplateInfo {
    pub name: String,
    pub category: Category,
    pub path_expr: Option<String>,
    pub file_name_expr: Option<String>,
    /// Directory used when the template has no path directive
    pub fallback_dir: PathBuf,
    /// Whether the category is skipped by configuration
    pub skipped: bool,
}

impl Report for TemplatesReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Template directory", &self.template_dir.display().to_string());
        out.newline();
        out.section(&format!("Templates ({})", self.templates.len()));

        for template in &self.templates {
            let skipped = if template.skipped { ", skipped" } else { "" };
            out.list_item(&format!("{} [{}{}]", template.name, template.category, skipped));

            match &template.path_expr {
                Some(expr) => out.key_value_indented("path", expr),
                None => out.key_value_indented(
                    "path",
                    &format!("(fallback) {}", template.fallback_dir.display()),
                ),
            }
            match &template.file_name_expr {
                Some(expr) => out.key_value_indented("fileName", expr),
                None => out.key_value_indented("fileName", "(fallback)"),
            }
        }
    }
}
