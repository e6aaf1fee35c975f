// schismrs/src/nml/wwminput.rs

//! `wwminput.nml`: the WWM-III spectral wave model coupled to SCHISM.
//!
//! Groups that read time-varying input or write output carry a
//! `begtc`/`deltc`/`unitc`/`endtc` window. Stamps use the
//! `yyyymmdd.hhmmss` form and the window may not run backwards.

use super::require_common_length;
use crate::constants::TIME_FORMAT;
use chrono::NaiveDateTime;
use schismrs_namelist::schema::{FieldPath, GroupRules, Violation, Violations};
use schismrs_namelist::{namelist_file, namelist_group};

const TIME_UNITS: &[&str] = &["SEC", "MIN", "HR", "DAY"];

namelist_group! {
    #[group = "PROC"]
    #[custom_rules]
    /// Run-level settings.
    pub struct Proc {
        pub procname: Option<String>,
        /// One (1) or two (2) dimensional run.
        pub dimmode: Option<i32> => [OneOf(&[1, 2])],
        pub lstea: Option<bool>,
        pub lqstea: Option<bool>,
        pub lsphe: Option<bool>,
        pub lnautin: Option<bool>,
        pub lnautout: Option<bool>,
        pub lmono_in: Option<bool>,
        pub lmono_out: Option<bool>,
        pub begtc: Option<String>,
        pub deltc: Option<f64> => [Gt(0.0)],
        pub unitc: Option<String> => [OneOfStr(TIME_UNITS)],
        pub endtc: Option<String>,
        pub dmin: Option<f64> => [Ge(0.0)],
    }
}

namelist_group! {
    #[group = "COUPL"]
    pub struct Coupl {
        pub lcpl: Option<bool>,
        pub radflag: Option<String> => [OneOfStr(&["LON", "VOR"])],
        pub letot: Option<bool>,
        pub nlvt: Option<i32> => [Gt(0.0)],
        pub dtcoup: Option<f64> => [Gt(0.0)],
    }
}

namelist_group! {
    #[group = "GRID"]
    #[custom_rules]
    /// Spectral discretization.
    pub struct Grid {
        /// Full circle in direction space.
        pub lcird: Option<bool>,
        pub lstag: Option<bool>,
        pub mindir: Option<f64> => [Ge(-360.0), Le(360.0)],
        pub maxdir: Option<f64> => [Ge(-360.0), Le(360.0)],
        /// Number of directional bins.
        pub mdc: Option<i32> => [Gt(0.0)],
        /// Lowest frequency, in Hz.
        pub frlow: Option<f64> => [Gt(0.0)],
        /// Highest frequency, in Hz.
        pub frhigh: Option<f64> => [Gt(0.0)],
        /// Number of frequency bins.
        pub msc: Option<i32> => [Gt(0.0)],
        pub filegrid: Option<String>,
        pub igridtype: Option<i32> => [OneOf(&[1, 2, 3, 4])],
        pub lslop: Option<bool>,
        pub slmax: Option<f64> => [Gt(0.0)],
        pub lvar1d: Option<bool>,
        pub loptsig: Option<bool>,
    }
}

namelist_group! {
    #[group = "INIT"]
    pub struct Init {
        pub lhotr: Option<bool>,
        pub linid: Option<bool>,
        pub initstyle: Option<i32> => [OneOf(&[1, 2, 3])],
    }
}

namelist_group! {
    #[group = "BOUC"]
    #[custom_rules]
    /// Boundary forcing.
    pub struct Bouc {
        pub lbcse: Option<bool>,
        pub lbinter: Option<bool>,
        pub lbcwa: Option<bool>,
        pub linhom: Option<bool>,
        pub lbcsp: Option<bool>,
        pub lindsprdeg: Option<bool>,
        pub lparmdir: Option<bool>,
        /// Boundary wave product read by WWM.
        pub filewave: Option<String>,
        pub lbsp1d: Option<bool>,
        pub lbsp2d: Option<bool>,
        pub begtc: Option<String>,
        pub deltc: Option<f64> => [Gt(0.0)],
        pub unitc: Option<String> => [OneOfStr(TIME_UNITS)],
        pub endtc: Option<String>,
        pub filebound: Option<String>,
        pub iboundformat: Option<i32> => [OneOf(&[1, 2, 3, 4, 5, 6])],
        pub wbhs: Option<f64> => [Ge(0.0)],
        pub wbss: Option<i32> => [OneOf(&[-2, -1, 1, 2])],
        pub wbtp: Option<f64> => [Gt(0.0)],
        pub wbdm: Option<f64> => [Ge(-360.0), Le(360.0)],
        pub wbdsms: Option<i32> => [OneOf(&[1, 2])],
        pub wbds: Option<f64> => [Ge(0.0)],
        pub wbgauss: Option<f64> => [Ge(0.0)],
        pub wbpken: Option<f64> => [Gt(0.0)],
    }
}

namelist_group! {
    #[group = "WIND"]
    #[custom_rules]
    pub struct Wind {
        pub lsewd: Option<bool>,
        pub begtc: Option<String>,
        pub deltc: Option<f64> => [Gt(0.0)],
        pub unitc: Option<String> => [OneOfStr(TIME_UNITS)],
        pub endtc: Option<String>,
        pub linterwd: Option<bool>,
        pub lstwd: Option<bool>,
        pub lcwin: Option<bool>,
        pub lwdir: Option<bool>,
        pub wdir: Option<f64> => [Ge(-360.0), Le(360.0)],
        pub wvel: Option<f64> => [Ge(0.0)],
        pub cwindx: Option<f64>,
        pub cwindy: Option<f64>,
        pub filewind: Option<String>,
        pub windfac: Option<f64> => [Gt(0.0)],
        pub iwindformat: Option<i32> => [OneOf(&[1, 2, 3, 4, 5, 6])],
        pub lwindfromwwm: Option<bool>,
    }
}

namelist_group! {
    #[group = "CURR"]
    #[custom_rules]
    pub struct Curr {
        pub lsecu: Option<bool>,
        pub begtc: Option<String>,
        pub deltc: Option<f64> => [Gt(0.0)],
        pub unitc: Option<String> => [OneOfStr(TIME_UNITS)],
        pub endtc: Option<String>,
        pub lintercu: Option<bool>,
        pub lstcu: Option<bool>,
        pub lccur: Option<bool>,
        pub ccurtx: Option<f64>,
        pub ccurty: Option<f64>,
        pub filecur: Option<String>,
        pub lercur: Option<bool>,
        pub icurrformat: Option<i32> => [OneOf(&[1, 2, 3, 4])],
    }
}

namelist_group! {
    #[group = "WALV"]
    #[custom_rules]
    pub struct Walv {
        pub lsewl: Option<bool>,
        pub begtc: Option<String>,
        pub deltc: Option<f64> => [Gt(0.0)],
        pub unitc: Option<String> => [OneOfStr(TIME_UNITS)],
        pub endtc: Option<String>,
        pub linterwl: Option<bool>,
        pub lstwl: Option<bool>,
        pub lcwlv: Option<bool>,
        pub cwatlv: Option<f64>,
        pub filewatl: Option<String>,
        pub lerwlv: Option<bool>,
        pub iwatlvformat: Option<i32> => [OneOf(&[1, 2, 3, 4])],
    }
}

namelist_group! {
    #[group = "ENGS"]
    /// Source terms.
    pub struct Engs {
        pub mesnl: Option<i32> => [OneOf(&[0, 1])],
        pub mesin: Option<i32> => [OneOf(&[0, 1, 2, 3, 4, 5])],
        pub ifric: Option<i32> => [OneOf(&[0, 1, 4])],
        pub mesbf: Option<i32> => [OneOf(&[0, 1, 2])],
        pub fricc: Option<f64> => [Ge(0.0)],
        pub mesbr: Option<i32> => [OneOf(&[0, 1])],
        pub icrit: Option<i32> => [OneOf(&[1, 2, 3, 4, 5, 6])],
        pub brcr: Option<f64> => [Gt(0.0)],
        pub a_brcr: Option<f64> => [Ge(0.0)],
        pub b_brcr: Option<f64> => [Ge(0.0)],
        pub min_brcr: Option<f64> => [Ge(0.0)],
        pub max_brcr: Option<f64> => [Ge(0.0)],
        pub a_ur: Option<f64> => [Ge(0.0)],
        pub b_ur: Option<f64> => [Ge(0.0)],
        pub min_ur: Option<f64> => [Ge(0.0)],
        pub max_ur: Option<f64> => [Ge(0.0)],
        pub alpbj: Option<f64> => [Gt(0.0)],
        pub lmaxetot: Option<bool>,
        pub mesds: Option<i32> => [OneOf(&[0, 1, 2, 3, 4, 5])],
        pub mestr: Option<i32> => [OneOf(&[0, 1])],
        pub trico: Option<f64> => [Ge(0.0)],
        pub trira: Option<f64> => [Ge(0.0)],
        pub triurs: Option<f64> => [Ge(0.0)],
    }
}

namelist_group! {
    #[group = "NUMS"]
    /// Numerical schemes and solver controls.
    pub struct Nums {
        pub icomp: Option<i32> => [OneOf(&[0, 1, 2, 3])],
        pub amethod: Option<i32> => [OneOf(&[0, 1, 2, 3, 4, 5, 6, 7])],
        pub smethod: Option<i32> => [OneOf(&[0, 1, 2, 3, 4, 5, 6])],
        pub dmethod: Option<i32> => [OneOf(&[0, 1, 2, 3, 4])],
        pub rtheta: Option<f64> => [Ge(0.0), Le(1.0)],
        pub litersplit: Option<bool>,
        pub lfilterth: Option<bool>,
        pub maxcflth: Option<f64> => [Gt(0.0)],
        pub fmethod: Option<i32> => [OneOf(&[0, 1])],
        pub lfiltersig: Option<bool>,
        pub maxcflsig: Option<f64> => [Gt(0.0)],
        pub llimt: Option<bool>,
        pub melim: Option<i32> => [OneOf(&[1, 2, 3])],
        pub limfak: Option<f64> => [Gt(0.0)],
        pub ldifr: Option<bool>,
        pub idiffr: Option<i32> => [OneOf(&[1, 2])],
        pub lconv: Option<bool>,
        pub lcfl: Option<bool>,
        pub nqsiter: Option<i32> => [Gt(0.0)],
        pub qsconv1: Option<f64> => [Ge(0.0), Le(1.0)],
        pub qsconv2: Option<f64> => [Ge(0.0), Le(1.0)],
        pub qsconv3: Option<f64> => [Ge(0.0), Le(1.0)],
        pub qsconv4: Option<f64> => [Ge(0.0), Le(1.0)],
        pub qsconv5: Option<f64> => [Ge(0.0), Le(1.0)],
        pub lexport: Option<bool>,
        pub ivector: Option<i32> => [OneOf(&[1, 2, 3, 4, 5, 6])],
        pub lchkconv: Option<bool>,
        pub dtmin_dyn: Option<f64> => [Gt(0.0)],
        pub ndyniter: Option<i32> => [Gt(0.0)],
        pub wae_solverthr: Option<f64> => [Gt(0.0)],
        pub maxiter: Option<i32> => [Gt(0.0)],
        /// Percentage of converged nodes required to stop iterating.
        pub pmin: Option<f64> => [Ge(0.0), Le(100.0)],
        pub lnaninfchk: Option<bool>,
        pub lzeta_setup: Option<bool>,
        pub zeta_meth: Option<i32> => [OneOf(&[0, 1])],
        pub block_gauss_seidel: Option<bool>,
        pub lnonl: Option<bool>,
        pub aspar_local_level: Option<i32> => [Ge(0.0), Le(10.0)],
        pub l_solver_norm: Option<bool>,
        pub laccel: Option<bool>,
    }
}

namelist_group! {
    #[group = "HISTORY"]
    #[custom_rules]
    /// Gridded output.
    pub struct History {
        pub begtc: Option<String>,
        pub deltc: Option<f64> => [Gt(0.0)],
        pub unitc: Option<String> => [OneOfStr(TIME_UNITS)],
        pub endtc: Option<String>,
        pub definetc: Option<f64>,
        pub outstyle: Option<String> => [OneOfStr(&["NO", "XFN", "NC", "SHP"])],
        pub multipleout: Option<i32> => [OneOf(&[0, 1])],
        pub use_single_out: Option<bool>,
        pub paramwrite: Option<bool>,
        pub gridwrite: Option<bool>,
        pub printmma: Option<bool>,
        pub fileout: Option<String>,
        pub loutiter: Option<bool>,
        pub lentcheck: Option<bool>,
        pub lsigmax: Option<bool>,
        pub hs: Option<bool>,
        pub tm01: Option<bool>,
        pub tm02: Option<bool>,
        pub klm: Option<bool>,
        pub wlm: Option<bool>,
        pub etotc: Option<bool>,
        pub etots: Option<bool>,
        pub dm: Option<bool>,
        pub dspr: Option<bool>,
        pub tppd: Option<bool>,
        pub tpp: Option<bool>,
        pub cpp: Option<bool>,
        pub wnpp: Option<bool>,
        pub cgpp: Option<bool>,
        pub kpp: Option<bool>,
        pub lpp: Option<bool>,
        pub peakd: Option<bool>,
        pub peakdspr: Option<bool>,
        pub dpeak: Option<bool>,
        pub ubot: Option<bool>,
        pub orbital: Option<bool>,
        pub botexper: Option<bool>,
        pub tmbot: Option<bool>,
        pub ursell: Option<bool>,
        pub ufric: Option<bool>,
        pub z0: Option<bool>,
        pub alpha_ch: Option<bool>,
        pub windx: Option<bool>,
        pub windy: Option<bool>,
        pub cd: Option<bool>,
        pub currtx: Option<bool>,
        pub currty: Option<bool>,
        pub watlev: Option<bool>,
        pub watlevold: Option<bool>,
        pub depdt: Option<bool>,
        pub dep: Option<bool>,
        pub tauw: Option<bool>,
        pub tauhf: Option<bool>,
        pub tautot: Option<bool>,
        pub stokessurfx: Option<bool>,
        pub stokessurfy: Option<bool>,
        pub stokesbarox: Option<bool>,
        pub stokesbaroy: Option<bool>,
        pub rsxx: Option<bool>,
        pub rsxy: Option<bool>,
        pub rsyy: Option<bool>,
        pub cfl1: Option<bool>,
        pub cfl2: Option<bool>,
        pub cfl3: Option<bool>,
    }
}

namelist_group! {
    #[group = "STATION"]
    #[custom_rules]
    /// Point output. Station names, coordinates and cutoffs are parallel
    /// lists.
    pub struct Station {
        pub begtc: Option<String>,
        pub deltc: Option<f64> => [Gt(0.0)],
        pub unitc: Option<String> => [OneOfStr(TIME_UNITS)],
        pub endtc: Option<String>,
        pub definetc: Option<f64>,
        pub outstyle: Option<String> => [OneOfStr(&["NO", "STE", "NC"])],
        pub multipleout: Option<i32> => [OneOf(&[0, 1])],
        pub use_single_out: Option<bool>,
        pub paramwrite: Option<bool>,
        pub fileout: Option<String>,
        pub loutiter: Option<bool>,
        pub llouts: Option<bool>,
        pub ilouts: Option<i32> => [Ge(0.0)],
        pub nlouts: Option<String>,
        /// Number of stations.
        pub iouts: Option<i32> => [Ge(0.0)],
        pub nouts: Option<Vec<String>>,
        pub xouts: Option<Vec<f64>>,
        pub youts: Option<Vec<f64>>,
        pub cutoff: Option<Vec<f64>> => [Ge(0.0)],
        pub lsp1d: Option<bool>,
        pub lsp2d: Option<bool>,
        pub lsigmax: Option<bool>,
        pub ac: Option<bool>,
        pub wk: Option<bool>,
        pub acout_1d: Option<bool>,
        pub acout_2d: Option<bool>,
        pub hs: Option<bool>,
        pub tm01: Option<bool>,
        pub tm02: Option<bool>,
        pub klm: Option<bool>,
        pub wlm: Option<bool>,
        pub etotc: Option<bool>,
        pub etots: Option<bool>,
        pub dm: Option<bool>,
        pub dspr: Option<bool>,
        pub tppd: Option<bool>,
        pub tpp: Option<bool>,
        pub peakd: Option<bool>,
        pub peakdspr: Option<bool>,
        pub dpeak: Option<bool>,
        pub ubot: Option<bool>,
        pub orbital: Option<bool>,
        pub windx: Option<bool>,
        pub windy: Option<bool>,
        pub watlev: Option<bool>,
        pub dep: Option<bool>,
    }
}

namelist_group! {
    #[group = "HOTFILE"]
    #[custom_rules]
    pub struct Hotfile {
        pub lhotf: Option<bool>,
        pub filehot_out: Option<String>,
        pub begtc: Option<String>,
        pub deltc: Option<f64> => [Gt(0.0)],
        pub unitc: Option<String> => [OneOfStr(TIME_UNITS)],
        pub endtc: Option<String>,
        pub lcyclehot: Option<bool>,
        pub hotstyle_out: Option<i32> => [OneOf(&[1, 2])],
        pub multipleout: Option<i32> => [OneOf(&[0, 1])],
        pub filehot_in: Option<String>,
        pub hotstyle_in: Option<i32> => [OneOf(&[1, 2])],
        pub ihotpos_in: Option<i32> => [OneOf(&[1, 2])],
        pub multiplein: Option<i32> => [OneOf(&[0, 1])],
    }
}

namelist_file! {
    #[file = "wwminput.nml"]
    pub struct WwmInput {
        pub proc: Proc,
        pub coupl: Coupl,
        pub grid: Grid,
        pub init: Init,
        pub bouc: Bouc,
        pub wind: Wind,
        pub curr: Curr,
        pub walv: Walv,
        pub engs: Engs,
        pub nums: Nums,
        pub history: History,
        pub station: Station,
        pub hotfile: Hotfile,
    }
}

/// Names of the groups that carry a `begtc`/`endtc` window.
pub const TIMED_GROUPS: &[&str] = &[
    "proc", "bouc", "wind", "curr", "walv", "history", "station", "hotfile",
];

fn parse_stamp(
    path: &FieldPath,
    field: &str,
    stamp: &Option<String>,
    report: &mut Violations,
) -> Option<NaiveDateTime> {
    let text = stamp.as_deref()?;
    match NaiveDateTime::parse_from_str(text, TIME_FORMAT) {
        Ok(time) => Some(time),
        Err(_) => {
            report.push(Violation::rule(
                path.join(field),
                format!("{:?} is not a yyyymmdd.hhmmss timestamp", text),
            ));
            None
        }
    }
}

fn check_time_window(
    path: &FieldPath,
    begtc: &Option<String>,
    endtc: &Option<String>,
    report: &mut Violations,
) {
    let begin = parse_stamp(path, "begtc", begtc, report);
    let end = parse_stamp(path, "endtc", endtc, report);
    if let (Some(begin), Some(end)) = (begin, end) {
        if end < begin {
            report.push(Violation::rule(
                path.join("endtc"),
                format!("endtc ({}) is before begtc ({})", end, begin),
            ));
        }
    }
}

macro_rules! time_window_rules {
    ($($group:ty),* $(,)?) => {
        $(
            impl GroupRules for $group {
                fn check_rules(&self, path: &FieldPath, report: &mut Violations) {
                    check_time_window(path, &self.begtc, &self.endtc, report);
                }
            }
        )*
    };
}

time_window_rules!(Proc, Bouc, Wind, Curr, Walv, History, Hotfile);

impl GroupRules for Grid {
    fn check_rules(&self, path: &FieldPath, report: &mut Violations) {
        if let (Some(frlow), Some(frhigh)) = (self.frlow, self.frhigh) {
            if frlow >= frhigh {
                report.push(Violation::rule(
                    path.join("frhigh"),
                    format!("frhigh ({}) must exceed frlow ({})", frhigh, frlow),
                ));
            }
        }
    }
}

impl GroupRules for Station {
    fn check_rules(&self, path: &FieldPath, report: &mut Violations) {
        check_time_window(path, &self.begtc, &self.endtc, report);
        let lengths = [
            ("xouts", self.xouts.as_ref().map(Vec::len)),
            ("youts", self.youts.as_ref().map(Vec::len)),
            ("nouts", self.nouts.as_ref().map(Vec::len)),
            ("cutoff", self.cutoff.as_ref().map(Vec::len)),
        ];
        require_common_length(path, &lengths, report);
        let count = lengths.iter().find_map(|(_, len)| *len);
        if let (Some(iouts), Some(count)) = (self.iouts, count) {
            if iouts as usize != count {
                report.push(Violation::rule(
                    path.join("iouts"),
                    format!("iouts ({}) does not match the {} listed stations", iouts, count),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schismrs_namelist::schema;
    use schismrs_namelist::{ToNamelist, WriteOptions};
    use serde_json::json;

    #[test]
    fn test_frequency_range() {
        assert!(schema::build::<WwmInput>(json!({"grid": {"frlow": 0.04, "frhigh": 1.0}})).is_ok());
        let err =
            schema::build::<WwmInput>(json!({"grid": {"frlow": 1.0, "frhigh": 0.04}})).unwrap_err();
        assert!(err.mentions("grid.frhigh"));
    }

    #[test]
    fn test_time_windows() {
        assert!(schema::build::<WwmInput>(json!({
            "history": {"begtc": "20200221.040000", "endtc": "20200222.000000", "unitc": "SEC"}
        }))
        .is_ok());

        let err = schema::build::<WwmInput>(json!({
            "wind": {"begtc": "20200222.000000", "endtc": "20200221.040000"},
            "curr": {"begtc": "2020-02-21"},
            "walv": {"unitc": "WEEK"}
        }))
        .unwrap_err();
        assert!(err.mentions("wind.endtc"));
        assert!(err.mentions("curr.begtc"));
        assert!(err.mentions("walv.unitc"));
    }

    #[test]
    fn test_station_lists() {
        assert!(schema::build::<WwmInput>(json!({"station": {
            "iouts": 2,
            "nouts": ["P-1", "P-2"],
            "xouts": [-76.0, -75.5],
            "youts": [39.0, 38.5],
        }}))
        .is_ok());

        let err = schema::build::<WwmInput>(json!({"station": {
            "iouts": 3,
            "nouts": ["P-1", "P-2"],
            "xouts": [-76.0, -75.5],
            "youts": [39.0],
        }}))
        .unwrap_err();
        assert!(err.mentions("station.youts"));
        assert!(err.mentions("station.iouts"));
    }

    #[test]
    fn test_renders_thirteen_groups_in_order() {
        let groups = json!({
            "proc": {}, "coupl": {}, "grid": {}, "init": {}, "bouc": {}, "wind": {},
            "curr": {}, "walv": {}, "engs": {}, "nums": {}, "history": {}, "station": {},
            "hotfile": {}
        });
        let wwm: WwmInput = schema::build(groups).unwrap();
        let text = wwm.to_namelist().to_fortran_string(&WriteOptions::default());
        let names: Vec<&str> = text.lines().filter(|l| l.starts_with('&')).collect();
        assert_eq!(
            names,
            [
                "&PROC", "&COUPL", "&GRID", "&INIT", "&BOUC", "&WIND", "&CURR", "&WALV", "&ENGS",
                "&NUMS", "&HISTORY", "&STATION", "&HOTFILE"
            ]
        );
    }
}
