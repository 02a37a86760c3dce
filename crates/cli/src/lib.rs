//! Codemap CLI library, exposed for integration tests

pub mod commands;
pub mod output;
pub mod progress;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "codemap")]
#[command(about = "Project structure, file and plan analysis for coding agents", long_about = None)]
#[command(version = codemap_core::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project root all paths are relative to (default: current directory)
    #[arg(long, global = true, default_value = ".")]
    pub base_path: PathBuf,

    /// Output format
    #[arg(long, value_enum, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Directory tree, file statistics and dependency signals
    #[command(alias = "analyze_project_structure")]
    Structure {
        /// Tree depth (default: from .codemap.toml, else 3)
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Metadata, imports and declarations of a single file
    #[command(alias = "analyze_file_content")]
    File {
        /// File path relative to the base path
        file_path: String,
    },

    /// Heuristic implementation plan for a task
    #[command(alias = "generate_implementation_plan")]
    Plan {
        /// Natural-language task description
        #[arg(long)]
        task_description: String,

        /// Files the task is expected to touch
        #[arg(long, num_args = 0..)]
        relevant_files: Vec<String>,
    },

    /// Initialize .codemap.toml configuration
    Init {
        /// Path to initialize (default: current directory)
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

/// Default log filter for a `-v` count
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        _ => "debug",
    }
}
