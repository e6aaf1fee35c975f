// schismrs/src/cli/swan.rs

use super::config_path;
use crate::config::RunConfig;
use anyhow::Context;
use clap::Args;
use schismrs_swan::SwanInput;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone)]
pub struct SwanArgs {
    /// Run configuration (defaults to schismrs.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory the INPUT deck is written to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: PathBuf,
}

/// Build the SWAN command deck from a run configuration and write it.
pub fn generate_swan(project_dir: &Path, args: &SwanArgs) -> anyhow::Result<()> {
    let config_path = config_path(project_dir, args.config.as_ref());
    let config = RunConfig::try_from(&config_path)?;
    let tree = config
        .swan()
        .cloned()
        .context(format!("{} has no swan section", config_path.display()))?;

    let input = SwanInput::build(tree).context("Invalid SWAN configuration")?;
    println!("✓ Loaded {}", config_path.display());

    let written = input.write_all(&args.output_dir).context(format!(
        "Error writing SWAN input to {}",
        args.output_dir.display()
    ))?;
    for path in &written {
        println!("  ✓ Wrote {}", path.display());
    }
    if written.is_empty() {
        println!("  No SWAN commands configured; nothing written");
    }
    Ok(())
}
