// schismrs/src/config/model.rs

use crate::config::duration::RunDuration;
use crate::period::TimeRange;
use anyhow::Context;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Run configuration parsed from a YAML file.
///
/// ```yaml
/// period:
///   start: 2020-02-21T04:00:00
///   duration: 12h
/// sources:
///   wave: /prepared/wavebnd.nc
///   atmos: /prepared/sflux
/// nml:
///   param:
///     core: {dt: 150.0}
/// swan:
///   project: {name: demo, nr: "1"}
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    #[serde(default)]
    period: Option<PeriodConfig>,
    #[serde(default)]
    sources: SourcesConfig,
    /// SCHISM namelist tree.
    #[serde(default)]
    nml: Option<Value>,
    /// SWAN `INPUT` command tree.
    #[serde(default)]
    swan: Option<Value>,
}

impl RunConfig {
    pub fn period(&self) -> Option<&PeriodConfig> {
        self.period.as_ref()
    }

    pub fn sources(&self) -> &SourcesConfig {
        &self.sources
    }

    pub fn nml(&self) -> Option<&Value> {
        self.nml.as_ref()
    }

    pub fn swan(&self) -> Option<&Value> {
        self.swan.as_ref()
    }
}

impl TryFrom<&Path> for RunConfig {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs_err::read_to_string(path)
            .context(format!("Error reading {} to string.", path.display()))?;

        serde_saphyr::from_str::<RunConfig>(&content)
            .context(format!("Error parsing YAML file: {}", path.display()))
    }
}

impl TryFrom<&PathBuf> for RunConfig {
    type Error = anyhow::Error;

    fn try_from(path: &PathBuf) -> anyhow::Result<Self> {
        Self::try_from(path.as_path())
    }
}

/// Start of the run plus either its end or its length.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeriodConfig {
    pub start: NaiveDateTime,
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
    #[serde(default)]
    pub duration: Option<RunDuration>,
}

impl PeriodConfig {
    pub fn to_time_range(&self) -> anyhow::Result<TimeRange> {
        let range = match (self.end, self.duration) {
            (Some(end), None) => TimeRange::new(self.start, end)?,
            (None, Some(duration)) => TimeRange::from_duration(self.start, duration.as_duration())?,
            (Some(_), Some(_)) => anyhow::bail!("A period takes either an end or a duration, not both"),
            (None, None) => anyhow::bail!("A period needs an end or a duration"),
        };
        Ok(range)
    }
}

/// Prepared forcing products to reference from the namelists.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    #[serde(default)]
    pub wave: Option<PathBuf>,
    #[serde(default)]
    pub atmos: Option<PathBuf>,
}
