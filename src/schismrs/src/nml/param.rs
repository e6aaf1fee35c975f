// schismrs/src/nml/param.rs

//! `param.nml`: hydrodynamic core, options and output control.

use schismrs_namelist::schema::{FieldPath, GroupRules, Violation, Violations};
use schismrs_namelist::{namelist_file, namelist_group};

namelist_group! {
    #[group = "CORE"]
    #[custom_rules]
    /// Parameters that must be set for every run.
    pub struct Core {
        /// Pre-processing only (1) or full run (0).
        pub ipre: Option<i32> => [OneOf(&[0, 1])],
        /// Barotropic (0) or baroclinic (1).
        pub ibc: Option<i32> => [OneOf(&[0, 1])],
        pub ibtp: Option<i32> => [OneOf(&[0, 1])],
        /// Run length in days.
        pub rnday: Option<f64> => [Gt(0.0)],
        /// Time step in seconds.
        pub dt: Option<f64> => [Gt(0.0)],
        pub msc2: Option<i32> => [Gt(0.0)],
        pub mdc2: Option<i32> => [Gt(0.0)],
        pub ntracer_gen: Option<i32> => [Ge(0.0)],
        pub ntracer_age: Option<i32> => [Ge(0.0)],
        pub sed_class: Option<i32> => [Ge(0.0)],
        pub eco_class: Option<i32> => [Ge(0.0)],
        /// Output interval in time steps.
        pub nspool: Option<i32> => [Gt(0.0)],
        /// Steps per output file, a multiple of `nspool`.
        pub ihfskip: Option<i32> => [Gt(0.0)],
    }
}

impl GroupRules for Core {
    fn check_rules(&self, path: &FieldPath, report: &mut Violations) {
        if let (Some(nspool), Some(ihfskip)) = (self.nspool, self.ihfskip) {
            if nspool > 0 && ihfskip % nspool != 0 {
                report.push(Violation::rule(
                    path.join("ihfskip"),
                    format!("ihfskip ({}) must be a multiple of nspool ({})", ihfskip, nspool),
                ));
            }
        }
    }
}

namelist_group! {
    #[group = "OPT"]
    pub struct Opt {
        pub ipre2: Option<i32> => [OneOf(&[0, 1])],
        pub itransport_only: Option<i32> => [OneOf(&[0, 1, 2])],
        pub iloadtide: Option<i32> => [OneOf(&[0, 1, 2, 3])],
        pub loadtide_coef: Option<f64> => [Ge(0.0)],
        pub start_year: Option<i32> => [Ge(1.0), Le(9999.0)],
        pub start_month: Option<i32> => [Ge(1.0), Le(12.0)],
        pub start_day: Option<i32> => [Ge(1.0), Le(31.0)],
        /// Hour of day, fractional.
        pub start_hour: Option<f64> => [Ge(0.0), Lt(24.0)],
        pub utc_start: Option<f64> => [Ge(-12.0), Le(14.0)],
        /// Coordinate frame: Cartesian (1) or lon/lat (2).
        pub ics: Option<i32> => [OneOf(&[1, 2])],
        /// Cold start (0), hotstart from 0 (1) or continue hotstart time (2).
        pub ihot: Option<i32> => [OneOf(&[0, 1, 2])],
        pub ieos_type: Option<i32> => [OneOf(&[0, 1])],
        pub ieos_pres: Option<i32> => [OneOf(&[0, 1])],
        pub eos_a: Option<f64>,
        pub eos_b: Option<f64>,
        pub nramp: Option<i32> => [OneOf(&[0, 1])],
        pub dramp: Option<f64> => [Gt(0.0)],
        pub nrampbc: Option<i32> => [OneOf(&[0, 1])],
        pub drampbc: Option<f64> => [Gt(0.0)],
        pub iupwind_mom: Option<i32> => [OneOf(&[0, 1])],
        pub indvel: Option<i32> => [OneOf(&[0, 1])],
        pub ihorcon: Option<i32> => [OneOf(&[0, 1, 2])],
        pub hvis_coef0: Option<f64> => [Ge(0.0)],
        pub ishapiro: Option<i32> => [OneOf(&[-1, 0, 1, 2])],
        pub niter_shap: Option<i32> => [Ge(0.0)],
        pub shapiro0: Option<f64> => [Ge(0.0)],
        pub thetai: Option<f64> => [Ge(0.0), Le(1.0)],
        pub icou_elfe_wwm: Option<i32> => [OneOf(&[0, 1, 2, 3, 4, 5, 6, 7])],
        pub nstep_wwm: Option<i32> => [Gt(0.0)],
        pub iwbl: Option<i32> => [OneOf(&[0, 1, 2])],
        pub hmin_radstress: Option<f64> => [Ge(0.0)],
        pub nchi: Option<i32> => [OneOf(&[-1, 0, 1])],
        pub dzb_min: Option<f64> => [Gt(0.0)],
        pub hmin_man: Option<f64> => [Gt(0.0)],
        pub ncor: Option<i32> => [OneOf(&[-1, 0, 1])],
        pub rlatitude: Option<f64> => [Ge(-90.0), Le(90.0)],
        pub coricoef: Option<f64>,
        pub ic_elev: Option<i32> => [OneOf(&[0, 1])],
        pub nramp_elev: Option<i32> => [OneOf(&[0, 1])],
        pub inunfl: Option<i32> => [OneOf(&[0, 1])],
        pub h0: Option<f64> => [Gt(0.0)],
        /// Atmospheric forcing: none (0), Holland (-1) or file based.
        pub nws: Option<i32> => [OneOf(&[-1, 0, 1, 2, 3, 4])],
        /// Interval of the atmospheric forcing in seconds.
        pub wtiminc: Option<f64> => [Gt(0.0)],
        pub nrampwind: Option<i32> => [OneOf(&[0, 1])],
        pub drampwind: Option<f64> => [Gt(0.0)],
        pub iwindoff: Option<i32> => [OneOf(&[0, 1])],
        pub iwind_form: Option<i32> => [OneOf(&[-3, -2, -1, 0, 1])],
        pub model_type_pahm: Option<i32> => [OneOf(&[1, 10])],
        pub ihconsv: Option<i32> => [OneOf(&[0, 1])],
        pub isconsv: Option<i32> => [OneOf(&[0, 1])],
        pub i_hmin_airsea_ex: Option<i32> => [OneOf(&[1, 2])],
        pub hmin_airsea_ex: Option<f64> => [Gt(0.0)],
        pub itur: Option<i32> => [OneOf(&[-2, -1, 0, 2, 3, 4, 5])],
        pub dfv0: Option<f64> => [Ge(0.0)],
        pub dfh0: Option<f64> => [Ge(0.0)],
        pub mid: Option<String> => [OneOfStr(&["MY", "KL", "KE", "KW", "UB"])],
        pub stab: Option<String> => [OneOfStr(&["GA", "KC"])],
        pub xlsc0: Option<f64> => [Gt(0.0)],
        pub inter_mom: Option<i32> => [OneOf(&[-1, 0, 1])],
        pub kr_co: Option<i32> => [OneOf(&[1, 2, 3, 4])],
        pub itr_met: Option<i32> => [OneOf(&[1, 2, 3, 4])],
        pub h_tvd: Option<f64> => [Ge(0.0)],
        pub eps1_tvd_imp: Option<f64> => [Gt(0.0)],
        pub eps2_tvd_imp: Option<f64> => [Gt(0.0)],
        pub ip_weno: Option<i32> => [OneOf(&[0, 1, 2])],
        pub courant_weno: Option<f64> => [Gt(0.0)],
        pub ielm_transport: Option<i32> => [OneOf(&[0, 1])],
        pub max_subcyc: Option<i32> => [Gt(0.0)],
        pub ihhat: Option<i32> => [OneOf(&[0, 1])],
        /// Nudging per tracer module.
        pub inu_tr: Option<Vec<i32>> => [OneOf(&[0, 1, 2])],
        pub step_nu_tr: Option<f64> => [Gt(0.0)],
        pub vnh1: Option<f64> => [Ge(0.0)],
        pub vnf1: Option<f64> => [Ge(0.0)],
        pub vnh2: Option<f64> => [Ge(0.0)],
        pub vnf2: Option<f64> => [Ge(0.0)],
        pub nadv: Option<i32> => [OneOf(&[0, 1, 2])],
        pub dtb_min: Option<f64> => [Gt(0.0)],
        pub dtb_max: Option<f64> => [Gt(0.0)],
        /// Initial condition per tracer module.
        pub flag_ic: Option<Vec<i32>> => [OneOf(&[0, 1, 2])],
        pub ibcc_mean: Option<i32> => [OneOf(&[0, 1])],
        pub rmaxvel: Option<f64> => [Gt(0.0)],
        pub velmin_btrack: Option<f64> => [Gt(0.0)],
        pub btrack_nudge: Option<f64> => [Gt(0.0)],
        pub iunder_deep: Option<i32> => [OneOf(&[0, 1])],
        pub level_age: Option<Vec<i32>>,
        pub rearth_pole: Option<f64> => [Gt(0.0)],
        pub rearth_eq: Option<f64> => [Gt(0.0)],
        pub shw: Option<f64> => [Gt(0.0)],
        pub rho0: Option<f64> => [Gt(0.0)],
        pub vclose_surf_frac: Option<f64> => [Ge(0.0), Le(1.0)],
        pub iadjust_mass_consv0: Option<Vec<i32>> => [OneOf(&[0, 1])],
        pub meth_sink: Option<i32> => [OneOf(&[0, 1])],
    }
}

namelist_group! {
    #[group = "SCHOUT"]
    pub struct Schout {
        pub nc_out: Option<i32> => [OneOf(&[0, 1])],
        pub iof_ugrid: Option<i32> => [OneOf(&[0, 1])],
        /// Write hotstart files (1).
        pub nhot: Option<i32> => [OneOf(&[0, 1])],
        /// Hotstart interval in steps, a multiple of `ihfskip` when `nhot = 1`.
        pub nhot_write: Option<i32> => [Gt(0.0)],
        pub iout_sta: Option<i32> => [OneOf(&[0, 1])],
        pub nspool_sta: Option<i32> => [Gt(0.0)],
        pub iof_hydro: Option<Vec<i32>> => [OneOf(&[0, 1])],
        pub iof_wwm: Option<Vec<i32>> => [OneOf(&[0, 1])],
        pub iof_gen: Option<Vec<i32>> => [OneOf(&[0, 1])],
        pub iof_age: Option<Vec<i32>> => [OneOf(&[0, 1])],
        pub iof_sed: Option<Vec<i32>> => [OneOf(&[0, 1])],
        pub iof_eco: Option<Vec<i32>> => [OneOf(&[0, 1])],
        pub iof_icm_core: Option<Vec<i32>> => [OneOf(&[0, 1])],
        pub iof_cos: Option<Vec<i32>> => [OneOf(&[0, 1])],
        pub iof_fib: Option<Vec<i32>> => [OneOf(&[0, 1])],
        pub iof_sed2d: Option<Vec<i32>> => [OneOf(&[0, 1])],
        pub iof_marsh: Option<Vec<i32>> => [OneOf(&[0, 1])],
        pub iof_ice: Option<Vec<i32>> => [OneOf(&[0, 1])],
        pub iof_ana: Option<Vec<i32>> => [OneOf(&[0, 1])],
    }
}

namelist_file! {
    #[file = "param.nml"]
    #[custom_rules]
    pub struct Param {
        pub core: Core,
        pub opt: Opt,
        pub schout: Schout,
    }
}

impl GroupRules for Param {
    fn check_rules(&self, path: &FieldPath, report: &mut Violations) {
        let (Some(core), Some(schout)) = (&self.core, &self.schout) else {
            return;
        };
        if schout.nhot != Some(1) {
            return;
        }
        if let (Some(nhot_write), Some(ihfskip)) = (schout.nhot_write, core.ihfskip) {
            if ihfskip > 0 && nhot_write % ihfskip != 0 {
                report.push(Violation::rule(
                    path.join("schout").join("nhot_write"),
                    format!(
                        "nhot_write ({}) must be a multiple of ihfskip ({}) when nhot = 1",
                        nhot_write, ihfskip
                    ),
                ));
            }
        }
    }
}
