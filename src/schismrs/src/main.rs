// schismrs/src/main.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use schismrs::cli::{generate_schism, generate_swan, SchismArgs, SwanArgs};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "schismrs")]
#[command(about = "Validated namelist generation for SCHISM and SWAN", long_about = None)]
#[command(version)]
struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(short, long, value_name = "DIR", global = true)]
    project_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the SCHISM namelists
    Schism(SchismArgs),
    /// Write the SWAN INPUT deck
    Swan(SwanArgs),
}

fn entrypoint() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let project_dir = match cli.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    match &cli.command {
        Commands::Schism(args) => generate_schism(&project_dir, args),
        Commands::Swan(args) => generate_swan(&project_dir, args),
    }
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
