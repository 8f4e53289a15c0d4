use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `persona-governor` - constraint, repair and drift accounting for a governed persona.
#[derive(Parser, Debug)]
#[command(name = "persona-governor")]
#[command(version)]
#[command(about = "Run governed turns against the reference persona.", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.persona-governor/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log evaluation steps (equivalent to RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Drive a sequence of inputs through the reference persona
    Demo {
        /// Input to send; repeat for several turns (default: configured demo inputs)
        #[arg(short, long = "input")]
        inputs: Vec<String>,

        /// Print the report as JSON instead of a transcript
        #[arg(long)]
        json: bool,
    },

    /// Classify raw counter values with the configured thresholds
    Drift {
        /// Accumulated constraint pressure
        #[arg(long, default_value = "0")]
        pressure: u64,

        /// Accumulated repair saturation
        #[arg(long, default_value = "0")]
        saturation: u64,
    },

    /// Show the constraints, repairs and memory schema of the reference persona
    Definition,
}
