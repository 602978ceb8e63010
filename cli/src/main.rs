mod commands;
mod error;
mod logger;
mod runner;
mod synthesis;
use crate::commands::Commands;
use crate::logger::Logger;
use crate::runner::{Runnable, Runner};
use clap::Parser;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Derive a runner from the command and run it
fn run(command: impl Runnable) {
    let run = command.runner().run();

    if let Err(error) = run {
        eprintln!("\n{}\n{error}", console::style("Error").red().bold());
        std::process::exit(1);
    }
}

fn main() {
    Logger::init();
    let cli = Cli::parse();

    // Match all commands here, in one place
    match cli.command {
        Commands::Synth(cmd) => run(cmd),
        Commands::Validate(cmd) => run(cmd),
    }
}
