// schismrs/tests/nml.rs

use chrono::NaiveDate;
use schismrs::{DataSources, Nml, SchismError, TimeRange};
use serde_json::json;
use std::path::PathBuf;

fn run_period() -> TimeRange {
    let day = NaiveDate::from_ymd_opt(2020, 2, 21).unwrap();
    TimeRange::new(
        day.and_hms_opt(0, 0, 0).unwrap(),
        day.succ_opt().unwrap().and_hms_opt(12, 0, 0).unwrap(),
    )
    .unwrap()
}

#[test]
fn test_only_present_sections_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("run");
    let nml = Nml::build(json!({"param": {"core": {"dt": 150.0, "rnday": 1.0}}})).unwrap();

    let written = nml.write_all(&out).unwrap();
    assert_eq!(written, vec![out.join("param.nml")]);
    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 1);
    assert_eq!(
        std::fs::read_to_string(&written[0]).unwrap(),
        "&CORE\n    rnday = 1.0\n    dt = 150.0\n/\n"
    );
}

#[test]
fn test_existing_files_are_replaced() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("ice.nml"), "stale").unwrap();
    let nml = Nml::build(json!({"ice": {"ice_in": {"ievp": 1}}})).unwrap();
    nml.write_all(dir.path()).unwrap();
    assert_eq!(
        std::fs::read_to_string(dir.path().join("ice.nml")).unwrap(),
        "&ICE_IN\n    ievp = 1\n/\n"
    );
}

#[test]
fn test_every_bad_field_is_reported() {
    let err = Nml::build(json!({
        "param": {"core": {"dt": -1.0, "ibc": 3}},
        "wwminput": {"grid": {"frlow": 1.0, "frhigh": 0.5}}
    }))
    .unwrap_err();
    let SchismError::Validation(err) = err else {
        panic!("expected a validation error, got {:?}", err);
    };
    assert_eq!(err.violations().len(), 3);
    assert!(err.mentions("param.core.dt"));
    assert!(err.mentions("param.core.ibc"));
    assert!(err.mentions("wwminput.grid.frhigh"));
}

#[test]
fn test_every_malformed_field_is_reported() {
    let err = Nml::build(json!({
        "param": {"opt": {"unknown_option": 1}},
        "wwminput": {"grid": {"mdc": "36"}}
    }))
    .unwrap_err();
    let SchismError::Validation(err) = err else {
        panic!("expected a validation error, got {:?}", err);
    };
    assert_eq!(err.violations().len(), 2);
    assert!(err.mentions("param.opt.unknown_option"));
    assert!(err.mentions("wwminput.grid.mdc"));
}

#[test]
fn test_unknown_section_fails() {
    assert!(matches!(
        Nml::build(json!({"params": {}})),
        Err(SchismError::Validation(_))
    ));
}

#[test]
fn test_forcing_interval_rule() {
    let build = |wtiminc: f64| {
        Nml::build(json!({"param": {
            "core": {"dt": 150.0},
            "opt": {"nws": 2, "wtiminc": wtiminc}
        }}))
    };
    assert!(build(300.0).is_ok());
    assert!(matches!(build(100.0), Err(SchismError::Consistency(_))));
    assert!(matches!(build(320.0), Err(SchismError::Consistency(_))));
}

#[test]
fn test_empty_merge_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let mut nml = Nml::build(json!({
        "param": {"core": {"dt": 150.0}, "schout": {"iof_hydro": [1, 0, 0, 1]}},
        "wwminput": {"proc": {"procname": "test"}, "station": {"xouts": [1.0], "youts": [2.0]}}
    }))
    .unwrap();
    let before: Vec<String> = nml
        .write_all(&dir.path().join("before"))
        .unwrap()
        .iter()
        .map(|path| std::fs::read_to_string(path).unwrap())
        .collect();
    nml.update(json!({})).unwrap();
    let after: Vec<String> = nml
        .write_all(&dir.path().join("after"))
        .unwrap()
        .iter()
        .map(|path| std::fs::read_to_string(path).unwrap())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_merge_is_all_or_nothing() {
    let mut nml = Nml::build(json!({
        "param": {"core": {"dt": 150.0, "rnday": 2.0}, "opt": {"nws": 0}}
    }))
    .unwrap();
    let before = nml.render();
    let result = nml.update(json!({
        "param": {"core": {"rnday": 5.0}, "opt": {"nws": 2, "wtiminc": 100.0}}
    }));
    assert!(result.is_err());
    assert_eq!(nml.render(), before);
}

#[test]
fn test_full_run_preparation() {
    let mut nml = Nml::build(json!({
        "param": {
            "core": {"dt": 150.0},
            "opt": {"wtiminc": 900.0, "ihconsv": 1, "iwind_form": -1}
        },
        "wwminput": {
            "proc": {"deltc": 600.0, "unitc": "SEC"},
            "bouc": {"lbcwa": true, "lbinter": true}
        }
    }))
    .unwrap();

    let mut advisories = nml.update_times(&run_period()).unwrap();
    let wave = PathBuf::from("/prepared/wavebnd.nc");
    let atmos = PathBuf::from("/prepared/sflux");
    advisories.extend(
        nml.update_data_sources(&DataSources {
            wave: Some(&wave),
            atmos: Some(&atmos),
        })
        .unwrap(),
    );
    assert!(advisories.is_empty(), "{:?}", advisories);

    let rendered = nml.render();
    let param = &rendered[0].1;
    assert!(param.contains("rnday = 1.5\n"));
    assert!(param.contains("start_year = 2020\n"));
    assert!(param.contains("nws = 2\n"));
    let wwm = &rendered[1].1;
    assert!(wwm.contains("filewave = 'wavebnd.nc'\n"));
    assert!(wwm.contains("begtc = '20200221.000000'\n"));
    assert!(wwm.contains("endtc = '20200222.120000'\n"));
}

#[test]
fn test_wave_then_atmos_injection_without_prior_sources() {
    let mut nml = Nml::build(json!({
        "param": {"core": {"dt": 150.0}, "opt": {"nws": 2}},
        "wwminput": {"proc": {"deltc": 600.0}}
    }))
    .unwrap();
    assert!(nml.wwminput().unwrap().bouc.is_none());

    let wave = PathBuf::from("wave.nc");
    let advisories = nml
        .update_data_sources(&DataSources {
            wave: Some(&wave),
            atmos: None,
        })
        .unwrap();
    assert!(advisories.is_empty(), "{:?}", advisories);
    let bouc = nml.wwminput().unwrap().bouc.as_ref().unwrap();
    assert_eq!(bouc.filewave.as_deref(), Some("wave.nc"));

    let before = nml.render();
    let atmos = PathBuf::from("sflux");
    let advisories = nml
        .update_data_sources(&DataSources {
            wave: None,
            atmos: Some(&atmos),
        })
        .unwrap();
    assert!(advisories.is_empty(), "{:?}", advisories);
    assert_eq!(nml.param().unwrap().opt.as_ref().unwrap().nws, Some(2));
    assert_eq!(nml.render(), before);
}

#[test]
fn test_atmos_with_conflicting_interval_is_rejected() {
    let mut nml = Nml::build(json!({
        "param": {"core": {"dt": 150.0}, "opt": {"nws": 0, "wtiminc": 100.0}}
    }))
    .unwrap();
    let atmos = PathBuf::from("sflux");
    let result = nml.update_data_sources(&DataSources {
        wave: None,
        atmos: Some(&atmos),
    });
    assert!(matches!(result, Err(SchismError::Consistency(_))));
    assert_eq!(nml.param().unwrap().opt.as_ref().unwrap().nws, Some(0));
}
