use crudgen_core::Category;

use super::directive::{DirectiveKind, parse_template};
use crate::{Error, Result};

/// A loaded template: body plus its optional directive expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateUnit {
    name: String,
    category: Category,
    body: String,
    path_expr: Option<String>,
    file_name_expr: Option<String>,
}

impl TemplateUnit {
    /// Parse template source. The category is derived once from the name.
    pub fn parse(name: impl Into<String>, source: &str) -> Result<Self> {
        let name = name.into();
        let parsed = parse_template(source);

        if parsed.body.is_empty() {
            return Err(Error::template_parse(
                &name,
                "template has no body after its directive header",
            ));
        }

        Ok(Self {
            category: Category::from_template_name(&name),
            name,
            body: parsed.body,
            path_expr: parsed.path_expr,
            file_name_expr: parsed.file_name_expr,
        })
    }

    /// File name of the template (e.g., "repository.tmpl")
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn path_expr(&self) -> Option<&str> {
        self.path_expr.as_deref()
    }

    pub fn file_name_expr(&self) -> Option<&str> {
        self.file_name_expr.as_deref()
    }

    pub fn directive(&self, kind: DirectiveKind) -> Option<&str> {
        match kind {
            DirectiveKind::Path => self.path_expr(),
            DirectiveKind::FileName => self.file_name_expr(),
        }
    }

    pub fn has_directives(&self) -> bool {
        self.path_expr.is_some() || self.file_name_expr.is_some()
    }
}
