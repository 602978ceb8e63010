pub mod synth;
pub mod validate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Synthesize CFN templates for a deployment stage
    Synth(synth::SynthCommand),

    /// Check the deployment config and print the resolved settings
    Validate(validate::ValidateCommand),
}
