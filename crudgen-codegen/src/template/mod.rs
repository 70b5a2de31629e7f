//! Template loading and rendering.
//!
//! Templates are read once into a [`TemplateSet`], which pairs the parsed
//! [`TemplateUnit`]s with a Handlebars registry holding every body and
//! directive expression. The set is immutable after loading.

mod directive;
mod loader;
mod unit;

use std::{fs, path::Path};

pub use directive::{DirectiveKind, ParsedTemplate, parse_template};
use handlebars::Handlebars;
use indexmap::IndexMap;
pub use loader::{TEMPLATE_EXTENSIONS, discover, is_template_file};
pub use unit::TemplateUnit;

use crate::{Error, GenerationContext, Result};

/// Loaded templates keyed by file name, in file name order.
#[derive(Debug)]
pub struct TemplateSet {
    units: IndexMap<String, TemplateUnit>,
    registry: Handlebars<'static>,
}

impl TemplateSet {
    /// Load every template file of a directory.
    pub fn load(dir: &Path, strict: bool) -> Result<Self> {
        let mut set = Self::empty(strict);

        for path in discover(dir)? {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let source = fs::read_to_string(&path).map_err(|source| Error::Io {
                template: name.clone(),
                path: path.clone(),
                source,
            })?;
            set.insert(TemplateUnit::parse(name, &source)?)?;
        }

        Ok(set)
    }

    /// Build a set from in-memory `(name, source)` pairs.
    ///
    /// Pairs are ordered by name, matching directory loading.
    pub fn from_sources<I, N, S>(sources: I, strict: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: AsRef<str>,
    {
        let mut units = sources
            .into_iter()
            .map(|(name, source)| TemplateUnit::parse(name, source.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        units.sort_by(|a, b| a.name().cmp(b.name()));

        let mut set = Self::empty(strict);
        for unit in units {
            set.insert(unit)?;
        }
        Ok(set)
    }

    fn empty(strict: bool) -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(strict);
        Self {
            units: IndexMap::new(),
            registry,
        }
    }

    fn insert(&mut self, unit: TemplateUnit) -> Result<()> {
        let name = unit.name().to_string();

        self.register(&name, &name, unit.body())?;
        for kind in [DirectiveKind::Path, DirectiveKind::FileName] {
            if let Some(expr) = unit.directive(kind) {
                self.register(&name, &registry_name(&name, kind), expr)?;
            }
        }

        tracing::debug!(
            template = %name,
            category = %unit.category(),
            path = ?unit.path_expr(),
            file_name = ?unit.file_name_expr(),
            "Loaded template"
        );
        if unit.category() == crudgen_core::Category::Other && !unit.has_directives() {
            tracing::warn!(
                template = %name,
                "Template has no category prefix and no directives; output goes to the project root"
            );
        }

        self.units.insert(name, unit);
        Ok(())
    }

    fn register(&mut self, template: &str, key: &str, source: &str) -> Result<()> {
        self.registry
            .register_template_string(key, source)
            .map_err(|e| Error::template_parse(template, e.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&TemplateUnit> {
        self.units.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateUnit> {
        self.units.values()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Render a template body.
    pub fn render_body(&self, unit: &TemplateUnit, ctx: &GenerationContext) -> Result<String> {
        self.registry
            .render(unit.name(), ctx)
            .map_err(|e| Error::Render {
                template: unit.name().to_string(),
                table: ctx.table_name.clone(),
                source: Box::new(e),
            })
    }

    /// Render a directive expression, if the template declares one.
    pub fn render_directive(
        &self,
        unit: &TemplateUnit,
        kind: DirectiveKind,
        ctx: &GenerationContext,
    ) -> Result<Option<String>> {
        if unit.directive(kind).is_none() {
            return Ok(None);
        }

        self.registry
            .render(&registry_name(unit.name(), kind), ctx)
            .map(Some)
            .map_err(|e| {
                Error::path_resolution(
                    unit.name(),
                    format!("failed to render {} directive: {}", kind.as_str(), e),
                )
            })
    }
}

fn registry_name(template: &str, kind: DirectiveKind) -> String {
    format!("{}{}", template, kind.keyword())
}

#[cfg(test)]
mod tests {
    use crudgen_core::{Category, GoTypeMapper};
    use crudgen_schema::{Column, Table};
    use tempfile::TempDir;

    use super::*;
    use crate::{ErrorKind, naming::GO_NAMING};

    fn context() -> GenerationContext {
        let mut table = Table::new("order_items");
        table.columns.push(Column::new("id", "bigint", false));
        table.columns.push(Column::new("note", "text", true));
        GenerationContext::new(&table, "OrderItem", &GO_NAMING, &GoTypeMapper)
    }

    #[test]
    fn test_load_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("usecase.tmpl"), "package usecase").unwrap();
        fs::write(
            temp.path().join("entity.tmpl"),
            "#path = domain\n#fileName: {{lower_entity_name}}.go\npackage domain",
        )
        .unwrap();

        let set = TemplateSet::load(temp.path(), false).unwrap();
        let names: Vec<&str> = set.iter().map(|u| u.name()).collect();

        assert_eq!(names, vec!["entity.tmpl", "usecase.tmpl"]);
        assert_eq!(set.get("entity.tmpl").unwrap().category(), Category::Entity);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_render_body_without_escaping() {
        let set = TemplateSet::from_sources(
            [(
                "entity.tmpl",
                "type {{entity_name}}: {{#each fields}}{{name}} {{type}}; {{/each}}// <&>",
            )],
            false,
        )
        .unwrap();
        let unit = set.get("entity.tmpl").unwrap();

        assert_eq!(
            set.render_body(unit, &context()).unwrap(),
            "type OrderItem: ID int64; Note string; // <&>\n"
        );
    }

    #[test]
    fn test_render_directives() {
        let set = TemplateSet::from_sources(
            [(
                "handler.tmpl",
                "#path = api/{{lower_entity_name}}\nbody",
            )],
            false,
        )
        .unwrap();
        let unit = set.get("handler.tmpl").unwrap();
        let ctx = context();

        assert_eq!(
            set.render_directive(unit, DirectiveKind::Path, &ctx).unwrap(),
            Some("api/orderitem".to_string())
        );
        assert_eq!(
            set.render_directive(unit, DirectiveKind::FileName, &ctx).unwrap(),
            None
        );
    }

    #[test]
    fn test_malformed_body_is_template_parse_error() {
        let err = TemplateSet::from_sources([("entity.tmpl", "{{#each fields}}oops")], false)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::TemplateParse);
    }

    #[test]
    fn test_malformed_directive_is_template_parse_error() {
        let err = TemplateSet::from_sources([("entity.tmpl", "#path = {{#if}}\nbody")], false)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::TemplateParse);
    }

    #[test]
    fn test_strict_mode_rejects_unknown_fields() {
        let sources = [("entity.tmpl", "{{entity_nmae}}")];
        let ctx = context();

        let lenient = TemplateSet::from_sources(sources, false).unwrap();
        let unit = lenient.get("entity.tmpl").unwrap();
        assert_eq!(lenient.render_body(unit, &ctx).unwrap(), "\n");

        let strict = TemplateSet::from_sources(sources, true).unwrap();
        let unit = strict.get("entity.tmpl").unwrap();
        let err = strict.render_body(unit, &ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TemplateParse);
        assert!(matches!(err, Error::Render { ref table, .. } if table == "order_items"));
    }

    #[test]
    fn test_strict_directive_is_path_resolution_error() {
        let set = TemplateSet::from_sources([("entity.tmpl", "#path = {{nope}}\nbody")], true)
            .unwrap();
        let unit = set.get("entity.tmpl").unwrap();

        let err = set
            .render_directive(unit, DirectiveKind::Path, &context())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PathResolution);
    }
}
