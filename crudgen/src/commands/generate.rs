use std::path::PathBuf;

use clap::Args;
use crudgen_codegen::{Generator, GeneratorConfig};
use crudgen_core::{Category, Overwrite};
use eyre::{Context, Result, bail};

use super::args::{ProjectArgs, TableArgs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    #[command(flatten)]
    pub tables: TableArgs,

    /// Fallback directory for entity templates
    #[arg(long, value_name = "DIR")]
    pub entity_dir: Option<PathBuf>,

    /// Fallback directory for repository templates
    #[arg(long, value_name = "DIR")]
    pub repository_dir: Option<PathBuf>,

    /// Fallback directory for usecase templates
    #[arg(long, value_name = "DIR")]
    pub usecase_dir: Option<PathBuf>,

    /// Fallback directory for handler templates
    #[arg(long, value_name = "DIR")]
    pub handler_dir: Option<PathBuf>,

    /// Fallback directory for payload templates
    #[arg(long, value_name = "DIR")]
    pub payload_dir: Option<PathBuf>,

    /// Skip entity templates
    #[arg(long)]
    pub skip_entity: bool,

    /// Skip repository templates
    #[arg(long)]
    pub skip_repository: bool,

    /// Skip usecase templates
    #[arg(long)]
    pub skip_usecase: bool,

    /// Skip handler templates
    #[arg(long)]
    pub skip_handler: bool,

    /// Skip payload templates
    #[arg(long)]
    pub skip_payload: bool,

    /// Leave files that already exist untouched
    #[arg(long)]
    pub keep_existing: bool,

    /// Fail on references to unknown template fields
    #[arg(long)]
    pub strict: bool,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let project = self.project.load(true)?;
        let targets = self.tables.targets(&project.tables)?;
        if targets.is_empty() {
            bail!("no tables to generate; pass --table or add [[tables]] to crudgen.toml");
        }

        let config = self.configure(project.config);
        let generator = Generator::new(config).wrap_err("Failed to load templates")?;
        let report = ops::generate(&generator, &targets, self.dry_run)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    /// Apply the output, skip and write flags on top of the project config.
    fn configure(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        for (category, dir) in self.output_dirs() {
            if let Some(dir) = dir {
                config.output_dirs.set(category, dir);
            }
        }
        for (category, skipped) in self.skip_flags() {
            if skipped {
                config.skip.insert(category);
            }
        }
        if self.keep_existing {
            config.overwrite = Overwrite::IfMissing;
        }
        if self.strict {
            config.strict = true;
        }
        config
    }

    fn output_dirs(&self) -> [(Category, Option<&PathBuf>); 5] {
        [
            (Category::Entity, self.entity_dir.as_ref()),
            (Category::Repository, self.repository_dir.as_ref()),
            (Category::Usecase, self.usecase_dir.as_ref()),
            (Category::Handler, self.handler_dir.as_ref()),
            (Category::Payload, self.payload_dir.as_ref()),
        ]
    }

    fn skip_flags(&self) -> [(Category, bool); 5] {
        [
            (Category::Entity, self.skip_entity),
            (Category::Repository, self.skip_repository),
            (Category::Usecase, self.skip_usecase),
            (Category::Handler, self.skip_handler),
            (Category::Payload, self.skip_payload),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    #[derive(Parser)]
    struct GenerateCli {
        #[command(flatten)]
        generate: GenerateCommand,
    }

    fn parse(args: &[&str]) -> GenerateCommand {
        let argv = std::iter::once("generate").chain(args.iter().copied());
        GenerateCli::try_parse_from(argv).unwrap().generate
    }

    fn build_config(cmd: &GenerateCommand) -> GeneratorConfig {
        let project = cmd.project.load(true).unwrap();
        cmd.configure(project.config)
    }

    #[test]
    fn test_flags_onto_defaults() {
        let cmd = parse(&[
            "--templates",
            "templates",
            "--migration-file",
            "schema.sql",
            "--entity-dir",
            "domain",
            "--skip-handler",
            "--skip-payload",
            "--keep-existing",
            "--strict",
        ]);

        let config = build_config(&cmd);

        assert_eq!(config.output_dirs.entity, PathBuf::from("domain"));
        assert_eq!(config.output_dirs.repository, PathBuf::from("repository"));
        assert!(config.skip.is_skipped(Category::Handler));
        assert!(config.skip.is_skipped(Category::Payload));
        assert!(!config.skip.is_skipped(Category::Entity));
        assert_eq!(config.overwrite, Overwrite::IfMissing);
        assert!(config.strict);
    }

    #[test]
    fn test_no_flags_keep_defaults() {
        let cmd = parse(&["--templates", "templates", "--migration-file", "schema.sql"]);

        let config = build_config(&cmd);

        assert_eq!(config.skip.iter().count(), 0);
        assert_eq!(config.overwrite, Overwrite::Always);
        assert!(!config.strict);
    }

    #[test]
    fn test_flags_override_manifest() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("crudgen.toml");
        fs::write(
            &manifest,
            r#"
[project]
migration = "db/schema.sql"
templates = "templates"

[output]
handler = "http"
payload = "api/payload"

[skip]
usecase = true

[generate]
strict = false
"#,
        )
        .unwrap();

        let cmd = parse(&[
            "--config",
            manifest.to_str().unwrap(),
            "--migration-file",
            "other.sql",
            "--payload-dir",
            "dto",
            "--skip-entity",
            "--strict",
        ]);
        let config = build_config(&cmd);

        assert_eq!(config.migration_file, PathBuf::from("other.sql"));
        assert_eq!(config.template_dir, temp.path().join("templates"));
        assert_eq!(config.output_dirs.payload, PathBuf::from("dto"));
        assert_eq!(config.output_dirs.handler, PathBuf::from("http"));
        assert!(config.skip.is_skipped(Category::Usecase));
        assert!(config.skip.is_skipped(Category::Entity));
        assert!(config.strict);
        assert_eq!(config.overwrite, Overwrite::Always);
    }
}
