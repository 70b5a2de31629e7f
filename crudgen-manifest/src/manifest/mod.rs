//! Manifest types and parsing for crudgen.toml files.

mod file;
mod parse;
mod validate;

use std::path::{Path, PathBuf};

use crudgen_core::{Category, to_pascal_case};
pub use file::CrudgenToml;
use serde::Deserialize;

/// Default manifest file name
pub const MANIFEST_FILE: &str = "crudgen.toml";

/// Root manifest for crudgen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Input locations
    pub project: ProjectConfig,

    /// Fallback output directories per category
    #[serde(default)]
    pub output: OutputConfig,

    /// Categories to skip
    #[serde(default)]
    pub skip: SkipConfig,

    /// Rendering and writing options
    #[serde(default)]
    pub generate: GenerateConfig,

    /// Default tables to generate
    #[serde(default)]
    pub tables: Vec<TableConfig>,
}

/// The `[project]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Root directory of the target project
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Migration file containing the CREATE TABLE statements
    pub migration: PathBuf,
    /// Directory containing the template files
    pub templates: PathBuf,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

/// The `[output]` section: one optional directory per category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub entity: Option<PathBuf>,
    pub repository: Option<PathBuf>,
    pub usecase: Option<PathBuf>,
    pub handler: Option<PathBuf>,
    pub payload: Option<PathBuf>,
}

impl OutputConfig {
    /// The configured directory for a category, if any.
    pub fn dir(&self, category: Category) -> Option<&Path> {
        match category {
            Category::Entity => self.entity.as_deref(),
            Category::Repository => self.repository.as_deref(),
            Category::Usecase => self.usecase.as_deref(),
            Category::Handler => self.handler.as_deref(),
            Category::Payload => self.payload.as_deref(),
            Category::Other => None,
        }
    }
}

/// The `[skip]` section: one flag per category.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkipConfig {
    #[serde(default)]
    pub entity: bool,
    #[serde(default)]
    pub repository: bool,
    #[serde(default)]
    pub usecase: bool,
    #[serde(default)]
    pub handler: bool,
    #[serde(default)]
    pub payload: bool,
}

impl SkipConfig {
    pub fn is_skipped(&self, category: Category) -> bool {
        match category {
            Category::Entity => self.entity,
            Category::Repository => self.repository,
            Category::Usecase => self.usecase,
            Category::Handler => self.handler,
            Category::Payload => self.payload,
            Category::Other => false,
        }
    }
}

/// The `[generate]` section.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    /// Overwrite existing files (false keeps them untouched)
    #[serde(default = "default_true")]
    pub overwrite: bool,
    /// Fail on template references to unknown context fields
    #[serde(default)]
    pub strict: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            overwrite: true,
            strict: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// A `[[tables]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// Table name as written in the migration
    pub name: String,
    /// Entity name; defaults to the PascalCase table name
    pub entity: Option<String>,
}

impl TableConfig {
    /// The entity name, falling back to the PascalCase table name.
    pub fn entity_name(&self) -> String {
        self.entity
            .clone()
            .unwrap_or_else(|| to_pascal_case(&self.name))
    }
}

impl Manifest {
    /// Resolve the project paths against the directory containing the manifest.
    pub fn resolve_paths(&mut self, base: &Path) {
        let project = &mut self.project;
        for path in [&mut project.root, &mut project.migration, &mut project.templates] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const FULL: &str = r#"
[project]
root = "app"
migration = "db/001_init.sql"
templates = "templates"

[output]
entity = "core/entity"
repository = "internal/repository"

[skip]
payload = true

[generate]
overwrite = false
strict = true

[[tables]]
name = "users"
entity = "User"

[[tables]]
name = "order_items"
"#;

    #[test]
    fn test_parse_full_manifest() {
        let manifest = Manifest::from_str(FULL).unwrap();

        assert_eq!(manifest.project.root, PathBuf::from("app"));
        assert_eq!(manifest.project.migration, PathBuf::from("db/001_init.sql"));
        assert_eq!(
            manifest.output.dir(Category::Repository),
            Some(Path::new("internal/repository"))
        );
        assert_eq!(manifest.output.dir(Category::Usecase), None);
        assert!(manifest.skip.is_skipped(Category::Payload));
        assert!(!manifest.skip.is_skipped(Category::Entity));
        assert!(!manifest.generate.overwrite);
        assert!(manifest.generate.strict);
        assert_eq!(manifest.tables.len(), 2);
        assert_eq!(manifest.tables[0].entity_name(), "User");
        assert_eq!(manifest.tables[1].entity_name(), "OrderItems");
    }

    #[test]
    fn test_defaults() {
        let manifest = Manifest::from_str(
            r#"
            [project]
            migration = "schema.sql"
            templates = "templates"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.project.root, PathBuf::from("."));
        assert!(manifest.generate.overwrite);
        assert!(!manifest.generate.strict);
        assert!(manifest.tables.is_empty());
        for category in Category::NAMED {
            assert!(!manifest.skip.is_skipped(category));
        }
    }

    #[test]
    fn test_other_category_is_never_skipped() {
        let skip = SkipConfig {
            entity: true,
            repository: true,
            usecase: true,
            handler: true,
            payload: true,
        };
        assert!(!skip.is_skipped(Category::Other));
    }

    #[test]
    fn test_resolve_paths() {
        let mut manifest = Manifest::from_str(FULL).unwrap();
        manifest.resolve_paths(Path::new("/work"));

        assert_eq!(manifest.project.root, PathBuf::from("/work/app"));
        assert_eq!(
            manifest.project.migration,
            PathBuf::from("/work/db/001_init.sql")
        );
        assert_eq!(manifest.project.templates, PathBuf::from("/work/templates"));
    }
}
