// schismrs/src/validation.rs

//! Rules spanning several sections of a SCHISM configuration.
//!
//! A rule only applies when every section and field it reads is present.

use crate::constants::WTIMINC_TOLERANCE;
use crate::error::{Advisory, ConsistencyError};
use crate::nml::Nml;

/// Check every cross-section rule, returning the advisories raised.
pub fn check_consistency(nml: &Nml) -> Result<Vec<Advisory>, ConsistencyError> {
    let mut advisories = Vec::new();
    check_atmospheric_forcing(nml, &mut advisories)?;
    Ok(advisories)
}

/// With atmospheric forcing on (`nws` not 0 or -1) the forcing interval
/// `wtiminc` must be longer than, and a multiple of, the time step `dt`.
fn check_atmospheric_forcing(
    nml: &Nml,
    advisories: &mut Vec<Advisory>,
) -> Result<(), ConsistencyError> {
    let Some(param) = nml.param() else {
        return Ok(());
    };
    let Some(opt) = &param.opt else {
        return Ok(());
    };
    let Some(nws) = opt.nws else {
        return Ok(());
    };

    if nws != 0 && nws != -1 {
        let dt = param.core.as_ref().and_then(|core| core.dt);
        if let (Some(wtiminc), Some(dt)) = (opt.wtiminc, dt) {
            if wtiminc <= dt {
                return Err(ConsistencyError::new(
                    "wtiminc",
                    format!("wtiminc ({}) must be greater than dt ({})", wtiminc, dt),
                ));
            }
            let remainder = wtiminc % dt;
            if remainder > WTIMINC_TOLERANCE && (remainder - dt).abs() > WTIMINC_TOLERANCE {
                return Err(ConsistencyError::new(
                    "wtiminc",
                    format!("wtiminc ({}) must be a multiple of dt ({})", wtiminc, dt),
                ));
            }
        }
    }

    if nws == 2 && opt.ihconsv == Some(1) && opt.iwind_form == Some(0) {
        advisories.push(Advisory::raise(
            "With nws=2, ihconsv=1, and iwind_form=0, USE_ATMOS should be off",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn forcing(nws: i32, wtiminc: f64, dt: f64) -> serde_json::Value {
        json!({"param": {"core": {"dt": dt}, "opt": {"nws": nws, "wtiminc": wtiminc}}})
    }

    #[test]
    fn test_wtiminc_multiple_of_dt() {
        assert!(Nml::build(forcing(2, 300.0, 150.0)).is_ok());
        assert!(Nml::build(forcing(2, 450.0, 150.0)).is_ok());
        assert!(Nml::build(forcing(2, 100.0, 150.0)).is_err());
        assert!(Nml::build(forcing(2, 150.0, 150.0)).is_err());
        assert!(Nml::build(forcing(2, 320.0, 150.0)).is_err());
    }

    #[test]
    fn test_rule_is_off_without_forcing() {
        assert!(Nml::build(forcing(0, 100.0, 150.0)).is_ok());
        assert!(Nml::build(forcing(-1, 320.0, 150.0)).is_ok());
    }

    #[test]
    fn test_rule_is_vacuous_when_sections_are_missing() {
        assert!(Nml::build(json!({})).is_ok());
        assert!(Nml::build(json!({"param": {"opt": {"nws": 2, "wtiminc": 10.0}}})).is_ok());
        assert!(Nml::build(json!({"param": {"core": {"dt": 150.0}, "opt": {"nws": 2}}})).is_ok());
    }

    #[test]
    fn test_use_atmos_advisory() {
        let nml = Nml::build(json!({"param": {"opt": {
            "nws": 2, "ihconsv": 1, "iwind_form": 0
        }}}))
        .unwrap();
        let advisories = check_consistency(&nml).unwrap();
        assert_eq!(advisories.len(), 1);
        assert!(advisories[0].message().contains("USE_ATMOS"));

        let nml = Nml::build(json!({"param": {"opt": {
            "nws": 2, "ihconsv": 1, "iwind_form": -1
        }}}))
        .unwrap();
        assert!(check_consistency(&nml).unwrap().is_empty());
    }

    #[test]
    fn test_use_atmos_advisory_with_core_present() {
        let nml = Nml::build(json!({"param": {
            "core": {"dt": 150.0},
            "opt": {"nws": 2, "wtiminc": 300.0, "ihconsv": 1, "iwind_form": 0}
        }}))
        .unwrap();
        assert_eq!(check_consistency(&nml).unwrap().len(), 1);
    }
}
