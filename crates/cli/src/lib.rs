pub mod generate;
mod logging;
pub mod validate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kotgen",
    version,
    about = "Generates Kotlin extension bindings from Java binding classes",
    long_about = "Kotgen parses Java binding classes (public static factory methods over \
                  UI widgets), validates their authoring conventions, and emits one Kotlin \
                  file of extension functions per class, delegating back to the binding class."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate Kotlin extension functions for binding classes
    #[command(
        long_about = "Walks SOURCE_DIR for .java files, validates each binding class, and \
                            writes one .kt file per class under OUT_DIR, mirroring the package \
                            structure. Any convention or structural error stops the run."
    )]
    Generate {
        /// Directory containing Java binding sources
        #[arg(value_name = "SOURCE_DIR")]
        source: PathBuf,
        /// Output directory for generated Kotlin sources
        #[arg(short, long, value_name = "OUT_DIR")]
        out: PathBuf,
        /// Print each parsed source model as JSON instead of emitting Kotlin
        #[arg(long)]
        dump_model: bool,
    },
    /// Validate binding authoring conventions without generating
    Validate {
        /// Directory containing Java binding sources
        #[arg(value_name = "SOURCE_DIR")]
        source: PathBuf,
    },
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init();

    match cli.command {
        Commands::Generate {
            source,
            out,
            dump_model,
        } => generate::run(&source, &out, dump_model),
        Commands::Validate { source } => validate::run(&source),
    }
}
