// schismrs/src/cli/schism.rs

use super::{config_path, print_advisories};
use crate::config::{PeriodConfig, RunConfig, RunDuration};
use crate::nml::Nml;
use crate::period::TimeRange;
use crate::sources::{DataSource, DataSources};
use anyhow::Context;
use chrono::NaiveDateTime;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone)]
pub struct SchismArgs {
    /// Run configuration (defaults to schismrs.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory the namelists are written to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Run start, e.g. 2020-02-21T04:00:00
    #[arg(long, value_name = "DATETIME")]
    pub start: Option<NaiveDateTime>,

    /// Run end
    #[arg(long, value_name = "DATETIME", conflicts_with = "duration")]
    pub end: Option<NaiveDateTime>,

    /// Run length, in seconds or with units such as "36h"
    #[arg(long, value_name = "DURATION")]
    pub duration: Option<RunDuration>,

    /// Prepared boundary wave product
    #[arg(long, value_name = "PATH")]
    pub wave: Option<PathBuf>,

    /// Prepared atmospheric forcing
    #[arg(long, value_name = "PATH")]
    pub atmos: Option<PathBuf>,
}

/// Build the SCHISM namelists from a run configuration and write them.
pub fn generate_schism(project_dir: &Path, args: &SchismArgs) -> anyhow::Result<()> {
    let config_path = config_path(project_dir, args.config.as_ref());
    let config = RunConfig::try_from(&config_path)?;
    let tree = config
        .nml()
        .cloned()
        .context(format!("{} has no nml section", config_path.display()))?;

    let mut nml = Nml::build(tree).context("Invalid SCHISM configuration")?;
    println!("✓ Loaded {}", config_path.display());
    print_advisories(&nml.check()?);

    if let Some(period) = resolve_period(args, config.period())? {
        let advisories = nml
            .update_times(&period)
            .context("Error applying the run period")?;
        println!("  ✓ Period {} to {}", period.start(), period.end());
        print_advisories(&advisories);
    }

    let wave = args.wave.as_ref().or(config.sources().wave.as_ref());
    let atmos = args.atmos.as_ref().or(config.sources().atmos.as_ref());
    let sources = DataSources {
        wave: wave.map(|path| path as &dyn DataSource),
        atmos: atmos.map(|path| path as &dyn DataSource),
    };
    if !sources.is_empty() {
        let advisories = nml
            .update_data_sources(&sources)
            .context("Error applying data sources")?;
        println!("  ✓ Applied data sources");
        print_advisories(&advisories);
    }

    let written = nml.write_all(&args.output_dir).context(format!(
        "Error writing namelists to {}",
        args.output_dir.display()
    ))?;
    for path in &written {
        println!("  ✓ Wrote {}", path.display());
    }
    if written.is_empty() {
        println!("  No sections configured; nothing written");
    }
    Ok(())
}

/// Command-line period flags take precedence over the config file.
fn resolve_period(
    args: &SchismArgs,
    config: Option<&PeriodConfig>,
) -> anyhow::Result<Option<TimeRange>> {
    let start = args.start.or(config.map(|period| period.start));
    let (end, duration) = if args.end.is_some() || args.duration.is_some() {
        (args.end, args.duration)
    } else {
        config
            .map(|period| (period.end, period.duration))
            .unwrap_or_default()
    };
    let Some(start) = start else {
        if end.is_some() || duration.is_some() {
            anyhow::bail!("A run end or duration was given without a start");
        }
        return Ok(None);
    };
    let period = PeriodConfig {
        start,
        end,
        duration,
    };
    Ok(Some(period.to_time_range()?))
}
