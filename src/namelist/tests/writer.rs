// schismrs-namelist/tests/writer.rs

use schismrs_namelist::{
    namelist_file, namelist_group, write, write_into, write_to_writer, write_with_options,
    Namelist, NamelistError, WriteOptions,
};

namelist_group! {
    #[group = "ICE_IN"]
    pub struct IceIn {
        pub ievp: Option<i32>,
        pub ice_cutoff: Option<f64>,
    }
}

namelist_file! {
    #[file = "ice.nml"]
    pub struct Ice {
        pub ice_in: IceIn,
    }
}

fn sample() -> Namelist {
    let mut nml = Namelist::new();
    nml.insert_group("core").insert("dt", 150.0).insert("ipre", 0i32);
    nml
}

#[test]
fn test_write_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("param.nml");
    write(&sample(), &path).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "&CORE\n    dt = 150.0\n    ipre = 0\n/\n"
    );

    match write(&sample(), &path) {
        Err(NamelistError::FileAlreadyExists(existing)) => assert_eq!(existing, path),
        other => panic!("expected FileAlreadyExists, got {:?}", other),
    }

    let options = WriteOptions {
        force: true,
        uppercase_groups: false,
        ..WriteOptions::default()
    };
    write_with_options(&sample(), &path, &options).unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().starts_with("&core\n"));
}

#[test]
fn test_write_to_writer() {
    let mut buffer = Vec::new();
    let options = WriteOptions {
        end_comma: true,
        float_precision: Some(2),
        ..WriteOptions::default()
    };
    write_to_writer(&sample(), &mut buffer, &options).unwrap();
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "&CORE\n    dt = 150.00,\n    ipre = 0,\n/\n"
    );
}

#[test]
fn test_write_into_uses_the_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let ice = Ice {
        ice_in: Some(IceIn {
            ievp: Some(2),
            ice_cutoff: None,
        }),
    };
    let options = WriteOptions {
        force: true,
        ..WriteOptions::default()
    };
    let path = write_into(&ice, dir.path(), &options).unwrap();
    assert_eq!(path, dir.path().join("ice.nml"));
    assert_eq!(std::fs::read_to_string(path).unwrap(), "&ICE_IN\n    ievp = 2\n/\n");
}
