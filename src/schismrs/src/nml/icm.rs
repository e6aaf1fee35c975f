// schismrs/src/nml/icm.rs

//! `icm.nml`: water quality model.
//!
//! Per-group coefficients (phytoplankton classes, carbon pools) are written
//! as arrays and bounded by the number of classes the model carries.

use schismrs_namelist::{namelist_file, namelist_group};

namelist_group! {
    #[group = "MARCO"]
    /// Switches and global settings.
    pub struct Marco {
        pub nsub: Option<i32> => [Gt(0.0)],
        /// Light extinction formulation.
        pub ike: Option<i32> => [OneOf(&[0, 1, 2])],
        pub ke0: Option<f64> => [Ge(0.0)],
        pub kec: Option<f64> => [Ge(0.0)],
        pub ked: Option<f64> => [Ge(0.0)],
        pub kess: Option<f64> => [Ge(0.0)],
        pub ilight: Option<i32> => [OneOf(&[0, 1])],
        pub alpha: Option<Vec<f64>> => [Ge(0.0), MaxLen(3)],
        pub ipr: Option<i32> => [OneOf(&[1, 2])],
        pub prr: Option<Vec<f64>> => [Ge(0.0), MaxLen(3)],
        pub ilimit: Option<i32> => [OneOf(&[0, 1])],
        pub isilica: Option<i32> => [OneOf(&[0, 1])],
        pub izb: Option<i32> => [OneOf(&[0, 1])],
        pub iph: Option<i32> => [OneOf(&[0, 1])],
        pub icbp: Option<i32> => [OneOf(&[0, 1])],
        pub isav_icm: Option<i32> => [OneOf(&[0, 1])],
        pub imarsh_icm: Option<i32> => [OneOf(&[0, 1])],
        pub ised_icm: Option<i32> => [OneOf(&[0, 1])],
        pub iba_icm: Option<i32> => [OneOf(&[0, 1])],
        pub irad: Option<i32> => [OneOf(&[0, 1])],
        pub isflux: Option<i32> => [OneOf(&[0, 1])],
        pub ibflux: Option<i32> => [OneOf(&[0, 1])],
        pub iout_icm: Option<i32> => [OneOf(&[0, 1])],
        pub nspool_icm: Option<i32> => [Gt(0.0)],
        pub ilogic: Option<i32> => [OneOf(&[0, 1])],
        pub ihydro_region: Option<i32> => [Ge(0.0)],
    }
}

namelist_group! {
    #[group = "CORE"]
    /// Phytoplankton growth and carbon kinetics.
    pub struct Core {
        /// Maximum growth rate per phytoplankton class.
        pub gpm: Option<Vec<f64>> => [Ge(0.0), MaxLen(3)],
        /// Optimal growth temperature per class.
        pub tgp: Option<Vec<f64>> => [MaxLen(3)],
        pub ktgp: Option<Vec<f64>> => [Ge(0.0), MaxLen(6)],
        pub mtr: Option<Vec<f64>> => [Ge(0.0), MaxLen(3)],
        pub mtb: Option<Vec<f64>> => [Ge(0.0), MaxLen(3)],
        pub tmt: Option<Vec<f64>> => [MaxLen(3)],
        pub ktmt: Option<Vec<f64>> => [Ge(0.0), MaxLen(3)],
        pub fcp: Option<Vec<f64>> => [Ge(0.0), Le(1.0), MaxLen(9)],
        pub fnp: Option<Vec<f64>> => [Ge(0.0), Le(1.0), MaxLen(4)],
        pub fpp: Option<Vec<f64>> => [Ge(0.0), Le(1.0), MaxLen(4)],
        pub fcm: Option<Vec<f64>> => [Ge(0.0), Le(1.0), MaxLen(3)],
        pub fnm: Option<Vec<f64>> => [Ge(0.0), Le(1.0), MaxLen(12)],
        pub fpm: Option<Vec<f64>> => [Ge(0.0), Le(1.0), MaxLen(12)],
        pub nit: Option<f64> => [Ge(0.0)],
        pub tnit: Option<f64>,
        pub ktnit: Option<Vec<f64>> => [Ge(0.0), MaxLen(2)],
        pub khdon: Option<f64> => [Ge(0.0)],
        pub khdoox: Option<f64> => [Ge(0.0)],
        pub kcd: Option<Vec<f64>> => [Ge(0.0), MaxLen(3)],
        pub wsp: Option<Vec<f64>> => [Ge(0.0), MaxLen(3)],
        pub wspom: Option<Vec<f64>> => [Ge(0.0), MaxLen(2)],
        pub wsseed: Option<Vec<f64>> => [Ge(0.0), MaxLen(2)],
        pub kra: Option<f64> => [Ge(0.0)],
        pub krea: Option<f64> => [Ge(0.0)],
        pub dox_crit: Option<f64> => [Ge(0.0)],
    }
}

namelist_file! {
    #[file = "icm.nml"]
    pub struct Icm {
        pub marco: Marco,
        pub core: Core,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schismrs_namelist::schema;
    use serde_json::json;

    #[test]
    fn test_class_arrays_are_bounded() {
        assert!(schema::build::<Icm>(json!({"core": {"gpm": [2.5, 2.8, 3.5]}})).is_ok());
        let err = schema::build::<Icm>(json!({"core": {"gpm": [2.5, 2.8, 3.5, 1.0]}})).unwrap_err();
        assert!(err.mentions("core.gpm"));
        let err = schema::build::<Icm>(json!({"core": {"fcp": [0.35, 1.2]}})).unwrap_err();
        assert!(err.mentions("core.fcp[1]"));
    }
}
