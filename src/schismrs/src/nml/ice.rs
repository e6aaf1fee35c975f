// schismrs/src/nml/ice.rs

//! `ice.nml`: single-class sea ice module.

use schismrs_namelist::{namelist_file, namelist_group};

namelist_group! {
    #[group = "ICE_IN"]
    pub struct IceIn {
        pub ice_tests: Option<i32> => [OneOf(&[0, 1])],
        pub ice_advection: Option<i32> => [OneOf(&[0, 1])],
        pub ice_therm_on: Option<i32> => [OneOf(&[0, 1])],
        /// Rheology: EVP (1) or mEVP (2).
        pub ievp: Option<i32> => [OneOf(&[1, 2])],
        /// Thickness below which ice is ignored, in meters.
        pub ice_cutoff: Option<f64> => [Gt(0.0)],
        pub evp_rheol_steps: Option<i32> => [Gt(0.0)],
        pub mevp_rheol_steps: Option<i32> => [Gt(0.0)],
        pub delta_min: Option<f64> => [Gt(0.0)],
        /// Turning angle between ice and ocean, in degrees.
        pub theta_io: Option<f64> => [Ge(-360.0), Le(360.0)],
        pub mevp_alpha1: Option<f64> => [Gt(0.0)],
        pub mevp_alpha2: Option<f64> => [Gt(0.0)],
        pub pstar: Option<f64> => [Gt(0.0)],
        pub ellipse: Option<f64> => [Gt(0.0)],
        pub c_pressure: Option<f64> => [Gt(0.0)],
        pub niter_fct: Option<i32> => [Gt(0.0)],
        pub ice_gamma_fct: Option<f64> => [Ge(0.0), Le(1.0)],
        pub h_ml0: Option<f64> => [Gt(0.0)],
        pub salt_ice: Option<f64> => [Ge(0.0)],
        pub salt_water: Option<f64> => [Ge(0.0)],
    }
}

namelist_file! {
    #[file = "ice.nml"]
    pub struct Ice {
        pub ice_in: IceIn,
    }
}
