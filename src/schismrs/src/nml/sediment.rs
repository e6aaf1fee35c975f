// schismrs/src/nml/sediment.rs

//! `sediment.nml`: 3D sediment transport.
//!
//! Several arrays carry one entry per sediment class and are spread over
//! both groups. Whichever of them are present must agree in length; `sd50`
//! is the reference when it is given.

use super::require_common_length;
use schismrs_namelist::schema::{FieldPath, GroupRules, Violations};
use schismrs_namelist::{namelist_file, namelist_group};

namelist_group! {
    #[group = "SED_CORE"]
    pub struct SedCore {
        /// Median grain size per class, in millimeters.
        pub sd50: Option<Vec<f64>> => [Gt(0.0)],
        /// Surface erosion rate per class, in kg/m2/s.
        pub erate: Option<Vec<f64>> => [Ge(0.0)],
    }
}

namelist_group! {
    #[group = "SED_OPT"]
    pub struct SedOpt {
        pub ised_type: Option<Vec<i32>> => [OneOf(&[0, 1, 2])],
        pub srho: Option<Vec<f64>> => [Gt(0.0)],
        pub comp_ws: Option<i32> => [OneOf(&[0, 1])],
        pub comp_tauce: Option<i32> => [OneOf(&[0, 1])],
        /// Settling velocity per class, used when `comp_ws = 0`.
        pub wsed: Option<Vec<f64>> => [Ge(0.0)],
        /// Critical shear stress per class, used when `comp_tauce = 0`.
        pub tau_ce: Option<Vec<f64>> => [Ge(0.0)],
        pub sed_debug: Option<i32> => [OneOf(&[0, 1])],
        pub ised_dump: Option<i32> => [OneOf(&[0, 1])],
        pub ierosion: Option<i32> => [OneOf(&[0, 1, 2])],
        pub slope_formulation: Option<i32> => [OneOf(&[0, 1, 2, 3, 4])],
        pub alpha_bs: Option<f64> => [Ge(0.0)],
        pub alpha_bn: Option<f64> => [Ge(0.0)],
        pub ised_bc_bot: Option<i32> => [OneOf(&[1, 2])],
        pub alpha: Option<f64> => [Ge(0.0)],
        pub kappa: Option<f64> => [Gt(0.0)],
        pub bedload: Option<i32> => [OneOf(&[0, 1, 3, 4])],
        pub bedload_filter: Option<i32> => [OneOf(&[0, 1])],
        pub bedload_limiter: Option<i32> => [OneOf(&[0, 1])],
        pub suspended_load: Option<i32> => [OneOf(&[0, 1])],
        pub iasym: Option<i32> => [OneOf(&[0, 1])],
        pub w_asym_max: Option<f64> => [Ge(0.0), Le(1.0)],
        pub elfrink_filter: Option<i32> => [OneOf(&[0, 1])],
        pub ech_uorb: Option<i32> => [Gt(0.0)],
        pub bedload_acc: Option<i32> => [OneOf(&[0, 1, 2])],
        pub bedload_acc_filter: Option<i32> => [OneOf(&[0, 1])],
        pub kacc_hoe: Option<f64> => [Ge(0.0)],
        pub kacc_dub: Option<f64> => [Ge(0.0)],
        pub thresh_acc_opt: Option<i32> => [OneOf(&[0, 1, 2])],
        pub acrit: Option<f64> => [Ge(0.0)],
        pub tau_option: Option<i32> => [OneOf(&[1, 2, 3])],
        pub tau_max: Option<f64> => [Gt(0.0)],
        pub zstress: Option<f64> => [Gt(0.0)],
        pub sed_morph: Option<i32> => [OneOf(&[0, 1, 2])],
        /// Morphology spin-up, in days.
        pub sed_morph_time: Option<f64> => [Ge(0.0)],
        pub morph_fac: Option<f64> => [Gt(0.0)],
        pub drag_formulation: Option<i32> => [OneOf(&[1, 2, 3])],
        pub ddensed: Option<i32> => [OneOf(&[0, 1])],
        pub bedforms_rough: Option<i32> => [OneOf(&[0, 1, 2])],
        pub iwave_ripple: Option<i32> => [OneOf(&[0, 1])],
        pub irough_bdld: Option<i32> => [OneOf(&[0, 1])],
        pub slope_avalanching: Option<i32> => [OneOf(&[0, 1])],
        pub dry_slope_cr: Option<f64> => [Gt(0.0)],
        pub wet_slope_cr: Option<f64> => [Gt(0.0)],
        pub bedmass_filter: Option<i32> => [OneOf(&[0, 1])],
        pub bedmass_threshold: Option<f64> => [Ge(0.0)],
        pub bdldiffu: Option<f64> => [Ge(0.0)],
        pub bedthick_overall: Option<Vec<f64>> => [Ge(0.0)],
        pub imeth_bed_evol: Option<i32> => [OneOf(&[1, 2])],
        pub poro_option: Option<i32> => [OneOf(&[1, 2])],
        pub porosity: Option<f64> => [Ge(0.0), Le(1.0)],
        pub nbed: Option<i32> => [Gt(0.0)],
    }
}

namelist_file! {
    #[file = "sediment.nml"]
    #[custom_rules]
    pub struct Sediment {
        pub sed_core: SedCore,
        pub sed_opt: SedOpt,
    }
}

impl GroupRules for Sediment {
    fn check_rules(&self, path: &FieldPath, report: &mut Violations) {
        let core = self.sed_core.as_ref();
        let opt = self.sed_opt.as_ref();
        let lengths = [
            ("sed_core.sd50", core.and_then(|c| c.sd50.as_ref().map(Vec::len))),
            ("sed_core.erate", core.and_then(|c| c.erate.as_ref().map(Vec::len))),
            ("sed_opt.ised_type", opt.and_then(|o| o.ised_type.as_ref().map(Vec::len))),
            ("sed_opt.srho", opt.and_then(|o| o.srho.as_ref().map(Vec::len))),
            ("sed_opt.wsed", opt.and_then(|o| o.wsed.as_ref().map(Vec::len))),
            ("sed_opt.tau_ce", opt.and_then(|o| o.tau_ce.as_ref().map(Vec::len))),
        ];
        require_common_length(path, &lengths, report);
    }
}
