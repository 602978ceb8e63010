use crate::commands::synth::SynthCommand;
use crate::error::Error;
use crate::runner::Runner;
use crate::synthesis::write_stack;
use eyre::Context;
use igvf_constructs::{App, Config, DemoStage};

pub(crate) struct SynthRunner {
    pub(crate) command: SynthCommand,
}

impl Runner for SynthRunner {
    /// Compose the stage and write its stack templates to disk
    fn run(&mut self) -> Result<(), Error> {
        let config = self.config(&self.command.config)?;
        self.synth(config)?;
        Ok(())
    }
}

impl SynthRunner {
    fn synth(&self, config: Config) -> eyre::Result<()> {
        let mut app = App::new();

        let stage = DemoStage::builder()
            .construct_id(&self.command.construct_id)
            .config(config)
            .build(&mut app)
            .wrap_err("Failed to compose the stage")?;

        let stack = &stage.frontend_stack;
        let path = write_stack(&self.command.out, stack)?;

        println!(
            "    {} `{}` ({}) to {}",
            console::style("Synthesized").green().bold(),
            stack.path(),
            stack.env(),
            path.display(),
        );

        for tag in stack.tags() {
            println!(
                "{} {}",
                console::style(&tag.key).bold(),
                console::style(&tag.value).dim(),
            );
        }

        Ok(())
    }
}
