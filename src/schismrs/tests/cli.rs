// schismrs/tests/cli.rs

use schismrs::cli::{generate_schism, generate_swan, SchismArgs, SwanArgs};
use std::path::Path;

const CONFIG: &str = "\
period:
  start: \"2020-02-21T00:00:00\"
  duration: 1day
sources:
  atmos: /prepared/sflux
nml:
  param:
    core:
      dt: 150.0
    opt:
      wtiminc: 300.0
swan:
  project:
    name: demo
    nr: \"1\"
  initial:
    model_type: zero
";

fn write_config(dir: &Path) {
    std::fs::write(dir.join("schismrs.yml"), CONFIG).unwrap();
}

#[test]
fn test_generate_schism_from_default_config() {
    let project = tempfile::tempdir().unwrap();
    write_config(project.path());
    let out = project.path().join("run");
    let args = SchismArgs {
        config: None,
        output_dir: out.clone(),
        start: None,
        end: None,
        duration: None,
        wave: None,
        atmos: None,
    };
    generate_schism(project.path(), &args).unwrap();

    let param = std::fs::read_to_string(out.join("param.nml")).unwrap();
    assert!(param.contains("rnday = 1.0\n"));
    assert!(param.contains("start_day = 21\n"));
    assert!(param.contains("nws = 2\n"));
    assert!(!out.join("wwminput.nml").exists());
}

#[test]
fn test_generate_schism_reports_invalid_config() {
    let project = tempfile::tempdir().unwrap();
    std::fs::write(
        project.path().join("bad.yml"),
        "nml:\n  param:\n    core:\n      dt: 0.0\n",
    )
    .unwrap();
    let args = SchismArgs {
        config: Some(project.path().join("bad.yml")),
        output_dir: project.path().join("run"),
        start: None,
        end: None,
        duration: None,
        wave: None,
        atmos: None,
    };
    let err = generate_schism(project.path(), &args).unwrap_err();
    assert!(format!("{:#}", err).contains("param.core.dt"));
    assert!(!project.path().join("run").exists());
}

#[test]
fn test_generate_swan() {
    let project = tempfile::tempdir().unwrap();
    write_config(project.path());
    let out = project.path().join("swan");
    let args = SwanArgs {
        config: None,
        output_dir: out.clone(),
    };
    generate_swan(project.path(), &args).unwrap();
    let input = std::fs::read_to_string(out.join("INPUT")).unwrap();
    assert!(input.contains("PROJECT name='demo' nr='1'"));
    assert!(input.contains("INITIAL ZERO"));
}
