use std::fs;

use crudgen_core::{File, GoTypeMapper, TypeMapper, WriteResult, to_pascal_case};
use crudgen_manifest::TableConfig;
use crudgen_schema::{SchemaError, Table, parse_schema};

use crate::{
    Error, GeneratedFile, GenerationContext, GenerationReport, GeneratorConfig, Outcome, Result,
    TemplateSet, TemplateUnit,
    naming::{GO_NAMING, NamingConvention},
    resolver::Resolver,
    template::DirectiveKind,
};

/// A table to generate and the entity name used in its templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableTarget {
    pub table: String,
    pub entity: String,
}

impl TableTarget {
    pub fn new(table: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            entity: entity.into(),
        }
    }

    /// Target whose entity name is the PascalCase table name.
    pub fn from_table(table: impl Into<String>) -> Self {
        let table = table.into();
        let entity = to_pascal_case(&table);
        Self { table, entity }
    }
}

impl From<&TableConfig> for TableTarget {
    fn from(config: &TableConfig) -> Self {
        Self::new(&config.name, config.entity_name())
    }
}

/// Generates source files for tables of a migration.
///
/// Templates are loaded once at construction and shared by every table.
pub struct Generator {
    config: GeneratorConfig,
    templates: TemplateSet,
    naming: NamingConvention,
    mapper: Box<dyn TypeMapper>,
}

impl Generator {
    /// Load the configured template directory.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let templates = TemplateSet::load(&config.template_dir, config.strict)?;
        Ok(Self::with_templates(config, templates))
    }

    /// Use an already loaded template set.
    pub fn with_templates(config: GeneratorConfig, templates: TemplateSet) -> Self {
        Self {
            config,
            templates,
            naming: GO_NAMING,
            mapper: Box::new(GoTypeMapper),
        }
    }

    pub fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_type_mapper(mut self, mapper: impl TypeMapper + 'static) -> Self {
        self.mapper = Box::new(mapper);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Read the migration and parse a single table from it.
    pub fn load_table(&self, table: &str) -> Result<Table> {
        let path = &self.config.migration_file;
        let schema = fs::read_to_string(path).map_err(|source| Error::MigrationRead {
            path: path.clone(),
            source,
        })?;

        let mut tables = parse_schema(&schema, &[table]).map_err(|source| Error::SchemaParse {
            table: table.to_string(),
            source,
        })?;

        tracing::debug!(table, "Parsed table from {}", path.display());
        tables.shift_remove(table).ok_or_else(|| Error::SchemaParse {
            table: table.to_string(),
            source: SchemaError::TablesNotFound {
                tables: vec![table.to_string()],
            },
        })
    }

    /// Build the template context of a table.
    pub fn context(&self, table: &str, entity: &str) -> Result<GenerationContext> {
        let table = self.load_table(table)?;
        Ok(GenerationContext::new(
            &table,
            entity,
            &self.naming,
            self.mapper.as_ref(),
        ))
    }

    /// Render every non-skipped template without touching the file system.
    pub fn preview(&self, table: &str, entity: &str) -> Result<Vec<GeneratedFile>> {
        let ctx = self.context(table, entity)?;
        let resolver = self.resolver();

        self.templates
            .iter()
            .filter(|unit| !self.is_skipped(unit))
            .map(|unit| self.render(unit, &ctx, &resolver))
            .collect()
    }

    /// Render and write every non-skipped template of a table.
    ///
    /// Each file is written as soon as it is rendered; a failure stops the
    /// table but leaves files already written in place.
    pub fn generate(&self, table: &str, entity: &str) -> Result<GenerationReport> {
        let ctx = self.context(table, entity)?;
        let resolver = self.resolver();
        let mut report = GenerationReport::new(table, entity);

        for unit in self.templates.iter() {
            if self.is_skipped(unit) {
                tracing::debug!(
                    template = unit.name(),
                    category = %unit.category(),
                    "Skipped by flag"
                );
                report.push(unit.name(), unit.category(), Outcome::Skipped);
                continue;
            }

            let generated = self.render(unit, &ctx, &resolver)?;
            let outcome = self.write(&generated)?;
            report.push(unit.name(), unit.category(), outcome);
        }

        Ok(report)
    }

    /// Generate tables in order, stopping at the first failure.
    pub fn generate_all(&self, targets: &[TableTarget]) -> Result<Vec<GenerationReport>> {
        targets
            .iter()
            .map(|target| self.generate(&target.table, &target.entity))
            .collect()
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.config, &self.naming, self.mapper.file_extension())
    }

    fn is_skipped(&self, unit: &TemplateUnit) -> bool {
        self.config.skip.is_skipped(unit.category())
    }

    fn render(
        &self,
        unit: &TemplateUnit,
        ctx: &GenerationContext,
        resolver: &Resolver<'_>,
    ) -> Result<GeneratedFile> {
        let content = self.templates.render_body(unit, ctx)?;
        let path = self
            .templates
            .render_directive(unit, DirectiveKind::Path, ctx)?;
        let file_name = self
            .templates
            .render_directive(unit, DirectiveKind::FileName, ctx)?;

        let location = resolver.resolve(
            unit,
            &ctx.entity_name,
            path.as_deref(),
            file_name.as_deref(),
        )?;
        tracing::debug!(
            template = unit.name(),
            path = %location.path().display(),
            "Resolved output"
        );

        Ok(GeneratedFile {
            template: unit.name().to_string(),
            category: unit.category(),
            path: location.path(),
            content,
        })
    }

    fn write(&self, generated: &GeneratedFile) -> Result<Outcome> {
        let file = File::new(&generated.path, generated.content.as_str())
            .with_overwrite(self.config.overwrite);

        let result = file.write().map_err(|source| Error::Io {
            template: generated.template.clone(),
            path: generated.path.clone(),
            source,
        })?;

        match result {
            WriteResult::Written => {
                tracing::info!("Generated: {}", generated.path.display());
                Ok(Outcome::Written(generated.path.clone()))
            }
            WriteResult::Skipped => {
                tracing::info!("Kept existing: {}", generated.path.display());
                Ok(Outcome::Kept(generated.path.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_target_from_table() {
        assert_eq!(
            TableTarget::from_table("order_items"),
            TableTarget::new("order_items", "OrderItems")
        );
    }

    #[test]
    fn test_table_target_from_config() {
        let config = TableConfig {
            name: "people".into(),
            entity: Some("Person".into()),
        };

        assert_eq!(TableTarget::from(&config), TableTarget::new("people", "Person"));
    }
}
