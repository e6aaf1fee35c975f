// schismrs/src/config/duration.rs

use anyhow::Context;
use chrono::Duration;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Length of a simulation period.
///
/// Can be deserialized from either:
/// - A float (interpreted as seconds): `duration: 43200.0`
/// - A string with units (parsed via humantime): `duration: "3days 12h"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunDuration {
    duration: Duration,
}

impl RunDuration {
    /// Returns an error if the duration is negative or zero.
    pub fn new(duration: Duration) -> anyhow::Result<Self> {
        if duration <= Duration::zero() {
            anyhow::bail!("Run duration must be > 0, but got {}", duration);
        }
        Ok(Self { duration })
    }

    pub fn from_seconds(seconds: f64) -> anyhow::Result<Self> {
        if seconds.is_nan() || seconds <= 0.0 {
            anyhow::bail!("Run duration must be > 0, but got {} seconds", seconds);
        }
        Self::new(Duration::milliseconds((seconds * 1000.0) as i64))
    }

    /// Examples: "12h", "3days", "1week 2days"
    pub fn from_humantime_str(s: &str) -> anyhow::Result<Self> {
        let std_duration = humantime::parse_duration(s)
            .context(format!("Error parsing duration from string: {:?}", s))?;
        let chrono_duration = Duration::from_std(std_duration).context(format!(
            "Error converting std duration to chrono duration: {}",
            humantime::format_duration(std_duration)
        ))?;
        Self::new(chrono_duration)
    }

    pub fn as_duration(&self) -> Duration {
        self.duration
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.duration.num_milliseconds() as f64 / 1000.0
    }
}

impl fmt::Display for RunDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.as_secs_f64())
    }
}

/// Plain numbers are seconds, anything else goes through humantime.
impl FromStr for RunDuration {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().parse::<f64>() {
            Ok(seconds) => Self::from_seconds(seconds),
            Err(_) => Self::from_humantime_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for RunDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum DurationValue {
            Float(f64),
            String(String),
        }

        match DurationValue::deserialize(deserializer)? {
            DurationValue::Float(seconds) => {
                RunDuration::from_seconds(seconds).map_err(D::Error::custom)
            }
            DurationValue::String(s) => {
                RunDuration::from_humantime_str(&s).map_err(D::Error::custom)
            }
        }
    }
}

impl Serialize for RunDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seconds() {
        assert_eq!(RunDuration::from_seconds(43200.0).unwrap().as_duration(), Duration::hours(12));
        assert!(RunDuration::from_seconds(0.0).is_err());
        assert!(RunDuration::from_seconds(-10.0).is_err());
    }

    #[test]
    fn test_from_humantime() {
        let run = RunDuration::from_humantime_str("1day 12h").unwrap();
        assert_eq!(run.as_duration(), Duration::hours(36));
        assert!(RunDuration::from_humantime_str("soon").is_err());
    }

    #[test]
    fn test_from_str_accepts_both_forms() {
        assert_eq!("3600".parse::<RunDuration>().unwrap().as_secs_f64(), 3600.0);
        assert_eq!("2h".parse::<RunDuration>().unwrap().as_secs_f64(), 7200.0);
    }

    #[test]
    fn test_deserialize() {
        let run: RunDuration = serde_json::from_str("5400.0").unwrap();
        assert_eq!(run.as_duration(), Duration::minutes(90));
        let run: RunDuration = serde_json::from_str("\"90m\"").unwrap();
        assert_eq!(run.as_duration(), Duration::minutes(90));
        assert!(serde_json::from_str::<RunDuration>("\"-1h\"").is_err());
    }
}
