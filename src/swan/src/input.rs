// schismrs-swan/src/input.rs

//! The SWAN `INPUT` command file.

use crate::command::SwanCommand;
use crate::error::SwanError;
use crate::subcomponents::{BoundaryData, BoundaryLocation, InitialCondition, ShapeSpec};
use schismrs_namelist::schema::{self, BoundedString, Value};
use schismrs_namelist::schema_struct;
use std::fmt;
use std::path::{Path, PathBuf};

schema_struct! {
    /// Run identification.
    pub struct Project {
        pub name: BoundedString<16>,
        pub nr: BoundedString<4>,
        pub title1: Option<BoundedString<72>>,
        pub title2: Option<BoundedString<72>>,
        pub title3: Option<BoundedString<72>>,
    }
}

impl SwanCommand for Project {
    fn cmd(&self) -> String {
        let mut repr = format!("PROJECT name='{}' nr='{}'", self.name, self.nr);
        for (key, title) in [
            ("title1", &self.title1),
            ("title2", &self.title2),
            ("title3", &self.title3),
        ] {
            if let Some(title) = title {
                repr.push_str(&format!(" &\n\t{}='{}'", key, title));
            }
        }
        repr
    }
}

schema_struct! {
    /// Boundary condition on one side or segment, with the spectral shape
    /// its parameters refer to.
    pub struct BoundSpec {
        pub shapespec: Option<ShapeSpec>,
        pub location: BoundaryLocation,
        pub data: BoundaryData,
    }
}

impl SwanCommand for BoundSpec {
    fn cmd(&self) -> String {
        let boundspec = format!("BOUNDSPEC {}{}", self.location.cmd(), self.data.cmd());
        match &self.shapespec {
            Some(shape) => format!("{}\n{}", shape.cmd(), boundspec),
            None => boundspec,
        }
    }
}

schema_struct! {
    /// Commands of a SWAN `INPUT` file. Absent commands are not written.
    pub struct SwanInput {
        project: Option<Project>,
        boundspec: Option<BoundSpec>,
        initial: Option<InitialCondition>,
    }
}

impl SwanInput {
    pub const FILE_NAME: &'static str = "INPUT";

    /// Build and validate from nested key-value data.
    pub fn build(value: Value) -> Result<Self, SwanError> {
        Ok(schema::build(value)?)
    }

    /// Deep-merge `overrides` and re-validate. Nothing changes on failure.
    pub fn update(&mut self, overrides: Value) -> Result<(), SwanError> {
        *self = schema::merged(self, overrides)?;
        log::debug!("Updated SWAN input");
        Ok(())
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn boundspec(&self) -> Option<&BoundSpec> {
        self.boundspec.as_ref()
    }

    pub fn initial(&self) -> Option<&InitialCondition> {
        self.initial.as_ref()
    }

    fn commands(&self) -> Vec<String> {
        let mut commands = Vec::new();
        if let Some(project) = &self.project {
            commands.push(project.cmd());
        }
        if let Some(boundspec) = &self.boundspec {
            commands.push(boundspec.cmd());
        }
        if let Some(initial) = &self.initial {
            commands.push(format!("INITIAL {}", initial.cmd()));
        }
        commands
    }

    /// Write `INPUT` into `dir`, creating the directory if needed.
    ///
    /// Nothing is written when no command is present.
    pub fn write_all(&self, dir: &Path) -> Result<Vec<PathBuf>, SwanError> {
        if self.commands().is_empty() {
            log::debug!("No SWAN commands present, skipping {}", Self::FILE_NAME);
            return Ok(Vec::new());
        }
        fs_err::create_dir_all(dir)?;
        let path = dir.join(Self::FILE_NAME);
        fs_err::write(&path, self.to_string())?;
        log::debug!("Wrote {}", path.display());
        Ok(vec![path])
    }
}

impl fmt::Display for SwanInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in self.commands() {
            writeln!(f, "{}", command)?;
        }
        Ok(())
    }
}
