//! Codemap CLI - project analysis for coding agents

use anyhow::Result;
use clap::Parser;
use codemap_cli::{commands, log_filter, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(cli.verbose)))
        .init();

    match cli.command {
        Commands::Structure { max_depth } => {
            commands::structure::run(&cli.base_path, max_depth, cli.format)?;
        }
        Commands::File { ref file_path } => {
            commands::file::run(&cli.base_path, file_path, cli.format)?;
        }
        Commands::Plan {
            ref task_description,
            ref relevant_files,
        } => {
            commands::plan::run(&cli.base_path, task_description, relevant_files, cli.format)?;
        }
        Commands::Init { ref path } => {
            commands::init::run(path.as_deref())?;
        }
    }

    Ok(())
}
