// schismrs/src/nml/mice.rs

//! `mice.nml`: multi-class sea ice module.

use schismrs_namelist::{namelist_file, namelist_group};

namelist_group! {
    #[group = "MICE_IN"]
    pub struct MiceIn {
        pub ice_tests: Option<i32> => [OneOf(&[0, 1])],
        pub ihot_mice: Option<i32> => [OneOf(&[0, 1, 2])],
        pub ice_advection: Option<i32> => [OneOf(&[0, 1, 2])],
        pub ice_therm_on: Option<i32> => [OneOf(&[0, 1])],
        pub ievp: Option<i32> => [OneOf(&[1, 2])],
        pub ice_cutoff: Option<f64> => [Gt(0.0)],
        pub evp_rheol_steps: Option<i32> => [Gt(0.0)],
        pub mevp_rheol_steps: Option<i32> => [Gt(0.0)],
        pub ice_atmos_stress_form: Option<i32> => [OneOf(&[0, 1])],
        pub cdwin0: Option<f64> => [Gt(0.0)],
        pub delta_min: Option<f64> => [Gt(0.0)],
        pub theta_io: Option<f64> => [Ge(-360.0), Le(360.0)],
        pub mevp_coef: Option<i32> => [OneOf(&[0, 1])],
        pub mevp_alpha1: Option<f64> => [Gt(0.0)],
        pub mevp_alpha2: Option<f64> => [Gt(0.0)],
        pub mevp_alpha3: Option<f64> => [Gt(0.0)],
        pub mevp_alpha4: Option<f64> => [Gt(0.0)],
        pub pstar: Option<f64> => [Gt(0.0)],
        pub ellipse: Option<f64> => [Gt(0.0)],
        pub c_pressure: Option<f64> => [Gt(0.0)],
        pub ncyc_fct: Option<i32> => [Gt(0.0)],
        pub depth_ice_fct: Option<f64> => [Gt(0.0)],
        pub lead_closing: Option<f64> => [Gt(0.0)],
        pub saterm: Option<f64> => [Ge(0.0), Le(1.0)],
        pub albsn: Option<f64> => [Ge(0.0), Le(1.0)],
        pub albsnm: Option<f64> => [Ge(0.0), Le(1.0)],
        pub albi: Option<f64> => [Ge(0.0), Le(1.0)],
        pub albm: Option<f64> => [Ge(0.0), Le(1.0)],
    }
}

namelist_file! {
    #[file = "mice.nml"]
    pub struct Mice {
        pub mice_in: MiceIn,
    }
}
