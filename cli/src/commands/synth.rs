mod runner;
use crate::runner::{Runnable, Runner};
use runner::SynthRunner;
use std::path::PathBuf;

#[derive(clap::Args, Clone)]
pub struct SynthCommand {
    /// Path to the deployment config
    #[arg(short, long, default_value = "igvf.toml")]
    config: PathBuf,

    /// Directory to write synthesized templates into
    #[arg(short, long, default_value = "igvf.out")]
    out: PathBuf,

    /// Construct id of the stage, unique within one synthesis
    #[arg(long, default_value = "DemoDeployStage")]
    construct_id: String,
}

impl Runnable for SynthCommand {
    fn runner(&self) -> impl Runner {
        SynthRunner {
            command: self.clone(),
        }
    }
}
