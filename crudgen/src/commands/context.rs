use clap::Args;
use crudgen_codegen::Generator;
use crudgen_core::to_pascal_case;
use eyre::{Context, Result};

use super::args::ProjectArgs;

#[derive(Args)]
pub struct ContextCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Table to describe
    #[arg(short, long)]
    pub table: String,

    /// Entity name (defaults to the PascalCase table name)
    #[arg(short, long)]
    pub entity: Option<String>,
}

impl ContextCommand {
    pub fn run(&self) -> Result<()> {
        let project = self.project.load(true)?;
        let entity = self
            .entity
            .clone()
            .unwrap_or_else(|| to_pascal_case(&self.table));

        let generator = Generator::new(project.config).wrap_err("Failed to load templates")?;
        let ctx = generator
            .context(&self.table, &entity)
            .wrap_err_with(|| format!("Failed to build context for table '{}'", self.table))?;

        println!("{}", ctx.to_json_pretty()?);
        Ok(())
    }
}
