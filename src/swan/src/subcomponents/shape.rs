// schismrs-swan/src/subcomponents/shape.rs

//! Spectral shape assumed for parametric boundary conditions.

use crate::command::SwanCommand;
use schismrs_namelist::schema::{FieldPath, GroupRules, PositiveF64, Violation, Violations};
use schismrs_namelist::{impl_leaf_node, schema_struct};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpectralShape {
    Jonswap,
    Pm,
    Gauss,
    Bin,
}

impl SpectralShape {
    pub fn keyword(&self) -> &'static str {
        match self {
            SpectralShape::Jonswap => "JONSWAP",
            SpectralShape::Pm => "PM",
            SpectralShape::Gauss => "GAUSS",
            SpectralShape::Bin => "BIN",
        }
    }
}

/// Whether `per` in PAR commands is the peak or the mean period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Peak,
    Mean,
}

/// Whether `dd` in PAR commands is a cosine power or a spread in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionalSpread {
    Power,
    Degrees,
}

impl_leaf_node!(SpectralShape, PeriodKind, DirectionalSpread);

schema_struct! {
    #[custom_rules]
    pub struct ShapeSpec {
        pub shape: SpectralShape,
        /// Peak enhancement, JONSWAP only.
        pub gamma: Option<PositiveF64>,
        /// Gaussian width, GAUSS only.
        pub sigfr: Option<PositiveF64>,
        pub per_type: Option<PeriodKind>,
        pub dspr_type: Option<DirectionalSpread>,
    }
}

impl GroupRules for ShapeSpec {
    fn check_rules(&self, path: &FieldPath, report: &mut Violations) {
        if self.gamma.is_some() && self.shape != SpectralShape::Jonswap {
            report.push(Violation::rule(
                path.join("gamma"),
                "gamma only applies to the JONSWAP shape",
            ));
        }
        if self.sigfr.is_some() && self.shape != SpectralShape::Gauss {
            report.push(Violation::rule(
                path.join("sigfr"),
                "sigfr only applies to the GAUSS shape",
            ));
        }
    }
}

impl SwanCommand for ShapeSpec {
    fn cmd(&self) -> String {
        let mut repr = format!("BOUND SHAPESPEC {}", self.shape.keyword());
        if let Some(gamma) = self.gamma {
            repr.push_str(&format!(" {}", gamma));
        }
        if let Some(sigfr) = self.sigfr {
            repr.push_str(&format!(" {}", sigfr));
        }
        match self.per_type {
            Some(PeriodKind::Peak) => repr.push_str(" PEAK"),
            Some(PeriodKind::Mean) => repr.push_str(" MEAN"),
            None => {}
        }
        match self.dspr_type {
            Some(DirectionalSpread::Power) => repr.push_str(" DSPR POWER"),
            Some(DirectionalSpread::Degrees) => repr.push_str(" DSPR DEGREES"),
            None => {}
        }
        repr
    }
}
