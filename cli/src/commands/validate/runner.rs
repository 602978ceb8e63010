use crate::commands::validate::ValidateCommand;
use crate::error::Error;
use crate::runner::Runner;

pub(crate) struct ValidateRunner {
    pub(crate) command: ValidateCommand,
}

impl Runner for ValidateRunner {
    /// Load the config and print the resolved settings
    fn run(&mut self) -> Result<(), Error> {
        let config = self.config(&self.command.config)?;

        println!(
            "    {} `{}` on branch `{}`",
            console::style("Config OK").green().bold(),
            config.name,
            config.branch,
        );

        println!(
            "{} {}MB memory, {}s timeout",
            console::style("frontend").bold(),
            config.frontend.memory,
            config.frontend.timeout,
        );

        let tags_string = config
            .tags
            .iter()
            .map(|t| format!("{}={}", t.key, t.value))
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "{} {}",
            console::style("tags").bold(),
            if tags_string.is_empty() {
                console::style("None").dim().yellow()
            } else {
                console::style(tags_string.as_str()).dim()
            }
        );

        Ok(())
    }
}
