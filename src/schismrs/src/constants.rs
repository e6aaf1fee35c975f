// schismrs/src/constants.rs

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_NAME: &str = "schismrs.yml";

/// Stamp format of the WWM `begtc`/`endtc` fields.
pub const TIME_FORMAT: &str = "%Y%m%d.%H%M%S";

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Tolerance when checking that the forcing interval is a multiple of `dt`.
pub const WTIMINC_TOLERANCE: f64 = 1e-10;
