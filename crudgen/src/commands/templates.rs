use clap::Args;
use crudgen_codegen::TemplateSet;
use eyre::{Context, Result};

use super::args::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TemplatesCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl TemplatesCommand {
    pub fn run(&self) -> Result<()> {
        let project = self.project.load(false)?;
        let config = &project.config;

        let templates = TemplateSet::load(&config.template_dir, config.strict)
            .wrap_err("Failed to load templates")?;
        let report = ops::templates(&templates, config);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
