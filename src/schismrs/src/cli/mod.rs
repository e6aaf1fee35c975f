// schismrs/src/cli/mod.rs

pub mod schism;
pub mod swan;

pub use schism::{generate_schism, SchismArgs};
pub use swan::{generate_swan, SwanArgs};

use crate::constants::DEFAULT_CONFIG_NAME;
use crate::error::Advisory;
use std::path::{Path, PathBuf};

/// The config file given on the command line, or the default one in the
/// project directory.
fn config_path(project_dir: &Path, config: Option<&PathBuf>) -> PathBuf {
    match config {
        Some(path) => path.clone(),
        None => project_dir.join(DEFAULT_CONFIG_NAME),
    }
}

fn print_advisories(advisories: &[Advisory]) {
    for advisory in advisories {
        println!("  ! {}", advisory);
    }
}
