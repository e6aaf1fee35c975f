// schismrs/src/nml/cosine.rs

//! `cosine.nml`: CoSiNE carbon, silicate and nitrogen ecosystem model.

use schismrs_namelist::{namelist_file, namelist_group};

namelist_group! {
    #[group = "MARCO"]
    pub struct Marco {
        pub idelay: Option<i32> => [OneOf(&[0, 1])],
        pub ndelay: Option<i32> => [Gt(0.0)],
        pub ibgraze: Option<i32> => [OneOf(&[0, 1])],
        pub idapt: Option<i32> => [OneOf(&[0, 1])],
        pub alpha_corr: Option<f64> => [Ge(0.0)],
        pub zeptic: Option<f64> => [Ge(0.0)],
        pub iz2graze: Option<i32> => [OneOf(&[0, 1])],
        pub iout_cosine: Option<i32> => [OneOf(&[0, 1, 2, 3, 4, 5])],
        pub nspool_cosine: Option<i32> => [Gt(0.0)],
        pub ico2s: Option<i32> => [OneOf(&[0, 1])],
        pub ispm: Option<i32> => [OneOf(&[0, 1, 2])],
        pub spm0: Option<f64> => [Ge(0.0)],
        pub ised: Option<i32> => [OneOf(&[0, 1])],
    }
}

namelist_group! {
    #[group = "CORE"]
    /// Growth and uptake coefficients, one entry per phytoplankton class
    /// (small, diatom) where given as pairs.
    pub struct Core {
        pub gmaxs: Option<Vec<f64>> => [Ge(0.0), MaxLen(2)],
        pub gammas: Option<Vec<f64>> => [Ge(0.0), MaxLen(2)],
        pub pis: Option<Vec<f64>> => [Ge(0.0), MaxLen(2)],
        pub kno3s: Option<Vec<f64>> => [Ge(0.0), MaxLen(2)],
        pub knh4s: Option<Vec<f64>> => [Ge(0.0), MaxLen(2)],
        pub kpo4s: Option<Vec<f64>> => [Ge(0.0), MaxLen(2)],
        pub kco2s: Option<Vec<f64>> => [Ge(0.0), MaxLen(2)],
        pub ksio4: Option<f64> => [Ge(0.0)],
        pub kns: Option<Vec<f64>> => [Ge(0.0), MaxLen(2)],
        pub alphas: Option<Vec<f64>> => [Ge(0.0), MaxLen(2)],
        pub betas: Option<Vec<f64>> => [Ge(0.0), MaxLen(2)],
        pub aks: Option<Vec<f64>> => [Ge(0.0), MaxLen(3)],
        pub betac: Option<f64> => [Ge(0.0)],
        pub betad: Option<f64> => [Ge(0.0)],
        pub gmaxz: Option<Vec<f64>> => [Ge(0.0), MaxLen(2)],
        pub rgz: Option<Vec<f64>> => [Ge(0.0), MaxLen(2)],
        pub kgz: Option<Vec<f64>> => [Ge(0.0), MaxLen(2)],
        pub tr: Option<f64>,
    }
}

namelist_file! {
    #[file = "cosine.nml"]
    pub struct Cosine {
        pub marco: Marco,
        pub core: Core,
    }
}
