mod runner;
use crate::runner::{Runnable, Runner};
use runner::ValidateRunner;
use std::path::PathBuf;

#[derive(clap::Args, Clone)]
pub struct ValidateCommand {
    /// Path to the deployment config
    #[arg(short, long, default_value = "igvf.toml")]
    config: PathBuf,
}

impl Runnable for ValidateCommand {
    fn runner(&self) -> impl Runner {
        ValidateRunner {
            command: self.clone(),
        }
    }
}
