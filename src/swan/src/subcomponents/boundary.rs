// schismrs-swan/src/subcomponents/boundary.rs

//! Where a boundary condition applies and what it prescribes.

use crate::command::SwanCommand;
use schismrs_namelist::schema::{
    require_equal_lengths, BoundedString, Direction, FieldPath, GroupRules, NonNegativeF64,
    PositiveF64, SeqNumber, Spread, Violations,
};
use schismrs_namelist::{impl_leaf_node, schema_struct, tagged_union};
use serde::Deserialize;
use std::fmt::Write;

// =============================================================================
// LOCATIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideName {
    North,
    Nw,
    West,
    Sw,
    South,
    Se,
    East,
    Ne,
}

impl SideName {
    pub fn keyword(&self) -> &'static str {
        match self {
            SideName::North => "NORTH",
            SideName::Nw => "NW",
            SideName::West => "WEST",
            SideName::Sw => "SW",
            SideName::South => "SOUTH",
            SideName::Se => "SE",
            SideName::East => "EAST",
            SideName::Ne => "NE",
        }
    }
}

/// Direction in which lengths along a side are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideDirection {
    #[default]
    Ccw,
    Clockwise,
}

impl SideDirection {
    pub fn keyword(&self) -> &'static str {
        match self {
            SideDirection::Ccw => "CCW",
            SideDirection::Clockwise => "CLOCKWISE",
        }
    }
}

impl_leaf_node!(SideName, SideDirection);

schema_struct! {
    /// One full side of the computational grid. Not valid on curvilinear
    /// grids.
    pub struct Side {
        pub side: SideName,
        /// Counter-clockwise when absent.
        pub direction: Option<SideDirection>,
    }
}

impl SwanCommand for Side {
    fn cmd(&self) -> String {
        format!(
            "SIDE {} {} ",
            self.side.keyword(),
            self.direction.unwrap_or_default().keyword()
        )
    }
}

schema_struct! {
    /// Segment through points in problem coordinates.
    pub struct SegmentXy {
        pub points: Vec<(f64, f64)>,
        /// Decimals written per coordinate, 8 when absent.
        pub precision: Option<u32> => [Le(17.0)],
    }
}

impl SegmentXy {
    pub const DEFAULT_PRECISION: usize = 8;
}

impl SwanCommand for SegmentXy {
    fn cmd(&self) -> String {
        let precision = self
            .precision
            .map_or(Self::DEFAULT_PRECISION, |p| p as usize);
        let mut repr = String::from("SEGMENT XY &");
        for (x, y) in &self.points {
            let _ = write!(
                repr,
                "\n\t{:.prec$} {:.prec$} &",
                x,
                y,
                prec = precision
            );
        }
        repr.push_str("\n\t");
        repr
    }
}

schema_struct! {
    /// Segment through computational grid points, origin at (0, 0).
    pub struct SegmentIj {
        pub points: Vec<(u32, u32)>,
    }
}

impl SwanCommand for SegmentIj {
    fn cmd(&self) -> String {
        let mut repr = String::from("SEGMENT IJ &");
        for (i, j) in &self.points {
            let _ = write!(repr, "\n\t{} {} &", i, j);
        }
        repr.push_str("\n\t");
        repr
    }
}

tagged_union! {
    pub enum BoundaryLocation {
        "side" => Side(Side),
        "segmentxy" => SegmentXy(SegmentXy),
        "segmentij" => SegmentIj(SegmentIj),
    }
}

impl SwanCommand for BoundaryLocation {
    fn cmd(&self) -> String {
        match self {
            BoundaryLocation::Side(side) => side.cmd(),
            BoundaryLocation::SegmentXy(segment) => segment.cmd(),
            BoundaryLocation::SegmentIj(segment) => segment.cmd(),
        }
    }
}

// =============================================================================
// DATA
// =============================================================================

schema_struct! {
    /// Wave parameters at a single point.
    pub struct Par {
        /// Significant wave height (m).
        pub hs: PositiveF64,
        /// Characteristic period (s), peak or mean depending on BOUND SHAPESPEC.
        pub per: PositiveF64,
        /// Peak wave direction (degrees).
        pub dir: Direction,
        /// Directional spreading, in degrees or as a cosine power.
        pub dd: Spread,
    }
}

impl SwanCommand for Par {
    fn cmd(&self) -> String {
        format!(
            "PAR hs={} per={} dir={} dd={}",
            self.hs, self.per, self.dir, self.dd
        )
    }
}

schema_struct! {
    /// Wave parameters constant along the boundary.
    pub struct ConstantPar {
        pub hs: PositiveF64,
        pub per: PositiveF64,
        pub dir: Direction,
        pub dd: Spread,
    }
}

impl ConstantPar {
    pub fn par(&self) -> Par {
        Par {
            hs: self.hs,
            per: self.per,
            dir: self.dir,
            dd: self.dd,
        }
    }
}

impl SwanCommand for ConstantPar {
    fn cmd(&self) -> String {
        format!("CONSTANT {}", self.par().cmd())
    }
}

schema_struct! {
    #[custom_rules]
    /// Wave parameters varying along the boundary, one entry per distance.
    pub struct VariablePar {
        pub hs: Vec<NonNegativeF64>,
        pub per: Vec<NonNegativeF64>,
        pub dir: Vec<Direction>,
        pub dd: Vec<Spread>,
        /// Distance from the first point of the side or segment, ascending.
        pub dist: Vec<NonNegativeF64>,
    }
}

impl GroupRules for VariablePar {
    fn check_rules(&self, path: &FieldPath, report: &mut Violations) {
        require_equal_lengths(
            path,
            ("dist", self.dist.len()),
            &[
                ("hs", Some(self.hs.len())),
                ("per", Some(self.per.len())),
                ("dir", Some(self.dir.len())),
                ("dd", Some(self.dd.len())),
            ],
            report,
        );
    }
}

impl SwanCommand for VariablePar {
    fn cmd(&self) -> String {
        let mut repr = String::from("VARIABLE PAR");
        let rows = self
            .dist
            .iter()
            .zip(&self.hs)
            .zip(&self.per)
            .zip(&self.dir)
            .zip(&self.dd);
        for ((((dist, hs), per), dir), dd) in rows {
            let _ = write!(
                repr,
                " &\n\t\tlen={} hs={} per={} dir={} dd={}",
                dist, hs, per, dir, dd
            );
        }
        repr
    }
}

schema_struct! {
    /// Boundary condition read from one file.
    pub struct ConstantFile {
        pub fname: BoundedString<40>,
        /// Location index inside the file.
        pub seq: Option<SeqNumber>,
    }
}

impl SwanCommand for ConstantFile {
    fn cmd(&self) -> String {
        let mut repr = format!("CONSTANT FILE fname='{}'", self.fname);
        if let Some(seq) = self.seq {
            let _ = write!(repr, " seq={}", seq);
        }
        repr
    }
}

schema_struct! {
    #[custom_rules]
    /// Boundary conditions read from one file per distance along the
    /// boundary.
    pub struct VariableFile {
        pub fname: Vec<BoundedString<40>>,
        /// Location index per file, all `1` when absent.
        pub seq: Option<Vec<SeqNumber>>,
        pub dist: Vec<NonNegativeF64>,
    }
}

impl GroupRules for VariableFile {
    fn fill_defaults(&mut self) {
        if self.seq.is_none() {
            self.seq = Some(vec![SeqNumber::FIRST; self.dist.len()]);
        }
    }

    fn check_rules(&self, path: &FieldPath, report: &mut Violations) {
        require_equal_lengths(
            path,
            ("dist", self.dist.len()),
            &[
                ("fname", Some(self.fname.len())),
                ("seq", self.seq.as_ref().map(Vec::len)),
            ],
            report,
        );
    }
}

impl SwanCommand for VariableFile {
    fn cmd(&self) -> String {
        let mut repr = String::from("VARIABLE FILE");
        for (i, (dist, fname)) in self.dist.iter().zip(&self.fname).enumerate() {
            let seq = self
                .seq
                .as_ref()
                .and_then(|seq| seq.get(i))
                .copied()
                .unwrap_or(SeqNumber::FIRST);
            let _ = write!(repr, " &\n\t\tlen={} fname='{}' seq={}", dist, fname, seq);
        }
        repr
    }
}

tagged_union! {
    pub enum BoundaryData {
        "par" => Par(Par),
        "constantpar" => ConstantPar(ConstantPar),
        "variablepar" => VariablePar(VariablePar),
        "constantfile" => ConstantFile(ConstantFile),
        "variablefile" => VariableFile(VariableFile),
    }
}

impl SwanCommand for BoundaryData {
    fn cmd(&self) -> String {
        match self {
            BoundaryData::Par(par) => par.cmd(),
            BoundaryData::ConstantPar(par) => par.cmd(),
            BoundaryData::VariablePar(par) => par.cmd(),
            BoundaryData::ConstantFile(file) => file.cmd(),
            BoundaryData::VariableFile(file) => file.cmd(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schismrs_namelist::schema::{self, ViolationKind};
    use serde_json::json;

    #[test]
    fn test_side_defaults_to_ccw() {
        let location: BoundaryLocation =
            schema::build(json!({"model_type": "side", "side": "west"})).unwrap();
        assert_eq!(location.cmd(), "SIDE WEST CCW ");
        let location: BoundaryLocation = schema::build(
            json!({"model_type": "side", "side": "ne", "direction": "clockwise"}),
        )
        .unwrap();
        assert_eq!(location.cmd(), "SIDE NE CLOCKWISE ");
    }

    #[test]
    fn test_side_rejects_unknown_name() {
        assert!(schema::build::<BoundaryLocation>(json!({"model_type": "side", "side": "up"}))
            .is_err());
    }

    #[test]
    fn test_segment_xy_uses_fixed_precision() {
        let location: BoundaryLocation = schema::build(json!({
            "model_type": "segmentxy",
            "points": [[172.5, -40.0], [173.0, -40.25]]
        }))
        .unwrap();
        assert_eq!(
            location.cmd(),
            "SEGMENT XY &\n\t172.50000000 -40.00000000 &\n\t173.00000000 -40.25000000 &\n\t"
        );
        let location: BoundaryLocation = schema::build(json!({
            "model_type": "segmentxy",
            "points": [[1.0, 2.0]],
            "precision": 2
        }))
        .unwrap();
        assert_eq!(location.cmd(), "SEGMENT XY &\n\t1.00 2.00 &\n\t");
    }

    #[test]
    fn test_segment_ij() {
        let location: BoundaryLocation = schema::build(json!({
            "model_type": "segmentij",
            "points": [[0, 0], [0, 10]]
        }))
        .unwrap();
        assert_eq!(location.cmd(), "SEGMENT IJ &\n\t0 0 &\n\t0 10 &\n\t");
    }

    #[test]
    fn test_par_renders_reals_with_decimal_point() {
        let data: BoundaryData = schema::build(json!({
            "model_type": "constantpar", "hs": 1, "per": 8.5, "dir": 270, "dd": 30
        }))
        .unwrap();
        assert_eq!(data.cmd(), "CONSTANT PAR hs=1.0 per=8.5 dir=270.0 dd=30.0");
    }

    #[test]
    fn test_par_bounds() {
        let ok = json!({"model_type": "par", "hs": 1.0, "per": 10.0, "dir": 360.0, "dd": 20.0});
        assert!(schema::build::<BoundaryData>(ok).is_ok());

        let err = schema::build::<BoundaryData>(
            json!({"model_type": "par", "hs": 1.0, "per": 10.0, "dir": 360.0001, "dd": 20.0}),
        )
        .unwrap_err();
        assert!(err.mentions("dir"));

        let err = schema::build::<BoundaryData>(
            json!({"model_type": "par", "hs": 0.0, "per": 10.0, "dir": 0.0, "dd": 400.0}),
        )
        .unwrap_err();
        assert!(err.mentions("hs"));
        assert!(err.mentions("dd"));
    }

    #[test]
    fn test_variable_par_lengths_must_match_dist() {
        let err = schema::build::<BoundaryData>(json!({
            "model_type": "variablepar",
            "hs": [1.0, 2.0],
            "per": [8.0, 9.0, 10.0],
            "dir": [0.0, 10.0, 20.0],
            "dd": [20.0, 20.0, 20.0],
            "dist": [0.0, 0.5, 1.0]
        }))
        .unwrap_err();
        assert_eq!(err.violations().len(), 1);
        let violation = &err.violations()[0];
        assert_eq!(violation.path.as_str(), "hs");
        assert_eq!(
            violation.kind,
            ViolationKind::LengthMismatch {
                field: "hs".to_string(),
                anchor: "dist".to_string(),
                expected: 3,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_variable_par_renders_one_line_per_distance() {
        let data: BoundaryData = schema::build(json!({
            "model_type": "variablepar",
            "hs": [1.0, 2.0, 3.0, 4.0],
            "per": [8.0, 9.0, 10.0, 11.0],
            "dir": [0.0, 10.0, 20.0, 30.0],
            "dd": [20.0, 20.0, 20.0, 20.0],
            "dist": [0.0, 0.25, 0.5, 1.0]
        }))
        .unwrap();
        let cmd = data.cmd();
        assert!(cmd.starts_with("VARIABLE PAR &\n\t\tlen=0.0 hs=1.0 per=8.0 dir=0.0 dd=20.0"));
        assert!(cmd.ends_with("len=1.0 hs=4.0 per=11.0 dir=30.0 dd=20.0"));
        assert_eq!(cmd.matches("len=").count(), 4);
    }

    #[test]
    fn test_variable_par_built_directly_renders_common_prefix() {
        let real = |v: f64| NonNegativeF64::new(v).unwrap();
        let par = VariablePar {
            hs: vec![real(1.0)],
            per: vec![real(8.0), real(9.0)],
            dir: vec![Direction::new(0.0).unwrap(), Direction::new(10.0).unwrap()],
            dd: vec![Spread::new(20.0).unwrap(), Spread::new(20.0).unwrap()],
            dist: vec![real(0.0), real(1.0)],
        };
        assert_eq!(par.cmd(), "VARIABLE PAR &\n\t\tlen=0.0 hs=1.0 per=8.0 dir=0.0 dd=20.0");
    }

    #[test]
    fn test_constant_file() {
        let data: BoundaryData = schema::build(
            json!({"model_type": "constantfile", "fname": "tpar.txt", "seq": 2}),
        )
        .unwrap();
        assert_eq!(data.cmd(), "CONSTANT FILE fname='tpar.txt' seq=2");

        let data: BoundaryData =
            schema::build(json!({"model_type": "constantfile", "fname": "tpar.txt"})).unwrap();
        assert_eq!(data.cmd(), "CONSTANT FILE fname='tpar.txt'");

        let long = "x".repeat(41);
        assert!(
            schema::build::<BoundaryData>(json!({"model_type": "constantfile", "fname": long}))
                .is_err()
        );
        assert!(schema::build::<BoundaryData>(
            json!({"model_type": "constantfile", "fname": "a", "seq": 0})
        )
        .is_err());
    }

    #[test]
    fn test_variable_file_fills_seq() {
        let data: BoundaryData = schema::build(json!({
            "model_type": "variablefile",
            "fname": ["a.txt", "b.txt"],
            "dist": [0.0, 2.0]
        }))
        .unwrap();
        match &data {
            BoundaryData::VariableFile(file) => {
                assert_eq!(file.seq, Some(vec![SeqNumber::FIRST, SeqNumber::FIRST]));
            }
            other => panic!("unexpected variant {:?}", other),
        }
        assert_eq!(
            data.cmd(),
            "VARIABLE FILE &\n\t\tlen=0.0 fname='a.txt' seq=1 &\n\t\tlen=2.0 fname='b.txt' seq=1"
        );
    }

    #[test]
    fn test_variable_file_seq_length_checked() {
        let err = schema::build::<BoundaryData>(json!({
            "model_type": "variablefile",
            "fname": ["a.txt", "b.txt"],
            "seq": [1],
            "dist": [0.0, 2.0]
        }))
        .unwrap_err();
        assert!(err.mentions("seq"));
    }
}
