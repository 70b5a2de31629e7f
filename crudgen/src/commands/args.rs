//! Arguments shared by several commands.

use std::path::{Path, PathBuf};

use clap::Args;
use crudgen_codegen::{GeneratorConfig, TableTarget};
use crudgen_core::{is_identifier, to_pascal_case};
use crudgen_manifest::{CrudgenToml, MANIFEST_FILE};
use eyre::{Result, bail};

use super::UnwrapOrExit;

/// Project location flags. Each one overrides crudgen.toml.
#[derive(Args)]
pub struct ProjectArgs {
    /// Path to crudgen.toml (defaults to ./crudgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root directory of the target project
    #[arg(long, value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Migration file containing the CREATE TABLE statements
    #[arg(long, value_name = "FILE")]
    pub migration_file: Option<PathBuf>,

    /// Directory containing the template files
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}

/// Generator configuration and default tables resolved from flags and manifest.
pub struct Project {
    pub config: GeneratorConfig,
    /// `[[tables]]` from the manifest
    pub tables: Vec<TableTarget>,
    /// The manifest that was loaded, if any
    pub manifest: Option<PathBuf>,
}

impl ProjectArgs {
    fn manifest_path(&self) -> Option<PathBuf> {
        match &self.config {
            Some(path) => Some(path.clone()),
            None => {
                let default = Path::new(MANIFEST_FILE);
                default.exists().then(|| default.to_path_buf())
            }
        }
    }

    /// Resolve the project. Without a manifest, the template directory must
    /// come from flags, as must the migration file when `needs_migration`.
    pub fn load(&self, needs_migration: bool) -> Result<Project> {
        let Some(manifest_path) = self.manifest_path() else {
            return self.load_from_flags(needs_migration);
        };

        let manifest = CrudgenToml::open(&manifest_path)
            .unwrap_or_exit()
            .into_manifest();
        let mut config = GeneratorConfig::from(&manifest);
        if let Some(target) = &self.target {
            config.project_root = target.clone();
        }
        if let Some(migration) = &self.migration_file {
            config.migration_file = migration.clone();
        }
        if let Some(templates) = &self.templates {
            config.template_dir = templates.clone();
        }

        tracing::debug!("Loaded {}", manifest_path.display());
        Ok(Project {
            config,
            tables: manifest.tables.iter().map(TableTarget::from).collect(),
            manifest: Some(manifest_path),
        })
    }

    fn load_from_flags(&self, needs_migration: bool) -> Result<Project> {
        let Some(templates) = &self.templates else {
            bail!("no {} found; pass --templates or --config", MANIFEST_FILE);
        };
        let migration = match &self.migration_file {
            Some(path) => path.clone(),
            None if needs_migration => {
                bail!("no {} found; pass --migration-file or --config", MANIFEST_FILE)
            }
            None => PathBuf::new(),
        };
        let root = self.target.clone().unwrap_or_else(|| PathBuf::from("."));

        Ok(Project {
            config: GeneratorConfig::new(root, migration, templates),
            tables: Vec::new(),
            manifest: None,
        })
    }
}

/// Table selection flags.
#[derive(Args)]
pub struct TableArgs {
    /// Table to generate (repeatable)
    #[arg(short, long = "table", value_name = "NAME")]
    pub tables: Vec<String>,

    /// Entity name of the table given at the same position (defaults to PascalCase)
    #[arg(short, long = "entity", value_name = "NAME")]
    pub entities: Vec<String>,
}

impl TableArgs {
    /// Tables from the flags, or `defaults` when none were given.
    ///
    /// The n-th `--entity` names the entity of the n-th `--table`.
    pub fn targets(&self, defaults: &[TableTarget]) -> Result<Vec<TableTarget>> {
        if self.tables.is_empty() {
            if !self.entities.is_empty() {
                bail!("--entity requires a matching --table");
            }
            return Ok(defaults.to_vec());
        }
        if self.entities.len() > self.tables.len() {
            bail!(
                "{} entity names given for {} tables",
                self.entities.len(),
                self.tables.len()
            );
        }

        self.tables
            .iter()
            .enumerate()
            .map(|(i, table)| {
                let entity = match self.entities.get(i) {
                    Some(entity) => entity.clone(),
                    None => to_pascal_case(table),
                };
                if !is_identifier(&entity) {
                    bail!("'{}' is not a valid entity name for table '{}'", entity, table);
                }
                Ok(TableTarget::new(table, entity))
            })
            .collect()
    }
}
