// schismrs-swan/src/subcomponents/initial.rs

//! Initial wave field of a computation.

use super::boundary::Par;
use crate::command::SwanCommand;
use schismrs_namelist::schema::{expect_empty, BoundedString, FieldPath, Node, Value, Violations};
use schismrs_namelist::{impl_leaf_node, schema_struct, tagged_union};
use serde::Deserialize;

/// Spectra computed from local wind with the deep-water growth curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InitialDefault;

/// All initial spectral densities zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InitialZero;

macro_rules! fieldless_node {
    ($($ty:ident => $keyword:literal),* $(,)?) => {
        $(
            impl Node for $ty {
                fn from_value(value: Value, path: &FieldPath) -> Result<Self, Violations> {
                    expect_empty(value, path).map(|_| $ty)
                }

                fn merge(&mut self, value: Value, path: &FieldPath) -> Result<(), Violations> {
                    expect_empty(value, path)
                }
            }

            impl SwanCommand for $ty {
                fn cmd(&self) -> String {
                    $keyword.to_string()
                }
            }
        )*
    };
}

fieldless_node!(InitialDefault => "DEFAULT", InitialZero => "ZERO");

/// Storage format of a hotfile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotFormat {
    #[default]
    Free,
    Unformatted,
}

impl HotFormat {
    pub fn keyword(&self) -> &'static str {
        match self {
            HotFormat::Free => "FREE",
            HotFormat::Unformatted => "UNFORMATTED",
        }
    }
}

impl_leaf_node!(HotFormat);

schema_struct! {
    /// Wave field read from a single, possibly concatenated, hotfile.
    pub struct HotSingle {
        pub fname: BoundedString<85>,
        /// Free format when absent.
        pub format: Option<HotFormat>,
    }
}

schema_struct! {
    /// Wave field read from one hotfile per process of a previous parallel
    /// run.
    pub struct HotMultiple {
        pub fname: BoundedString<85>,
        pub format: Option<HotFormat>,
    }
}

impl SwanCommand for HotSingle {
    fn cmd(&self) -> String {
        format!(
            "HOTSTART SINGLE fname='{}' {}",
            self.fname,
            self.format.unwrap_or_default().keyword()
        )
    }
}

impl SwanCommand for HotMultiple {
    fn cmd(&self) -> String {
        format!(
            "HOTSTART MULTIPLE fname='{}' {}",
            self.fname,
            self.format.unwrap_or_default().keyword()
        )
    }
}

tagged_union! {
    pub enum InitialCondition {
        "default" => Default(InitialDefault),
        "zero" => Zero(InitialZero),
        "par" => Par(Par),
        "hotsingle" => HotSingle(HotSingle),
        "hotmultiple" => HotMultiple(HotMultiple),
    }
}

impl SwanCommand for InitialCondition {
    fn cmd(&self) -> String {
        match self {
            InitialCondition::Default(init) => init.cmd(),
            InitialCondition::Zero(init) => init.cmd(),
            InitialCondition::Par(par) => par.cmd(),
            InitialCondition::HotSingle(hot) => hot.cmd(),
            InitialCondition::HotMultiple(hot) => hot.cmd(),
        }
    }
}
