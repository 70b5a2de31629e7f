use clap::Args;
use crudgen_codegen::Generator;
use eyre::{Context, Result};

use super::args::{ProjectArgs, TableArgs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    #[command(flatten)]
    pub tables: TableArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let project = self.project.load(true)?;
        let targets = self.tables.targets(&project.tables)?;

        let generator = Generator::new(project.config).wrap_err("Failed to load templates")?;
        let report = ops::check(&generator, &targets, project.manifest.as_deref())?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
