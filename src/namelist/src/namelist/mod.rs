// schismrs-namelist/src/namelist/mod.rs

//! Namelist files and groups, and the traits schema types implement to
//! produce them.

mod core;
mod group;

pub use self::core::Namelist;
pub use self::group::NamelistGroup;

/// A typed parameter group that renders as one `&NAME ... /` block.
pub trait ToNamelistGroup {
    /// Group name as written after `&`.
    const GROUP_NAME: &'static str;

    fn to_group(&self) -> NamelistGroup;
}

/// A typed collection of groups that renders as one namelist file.
pub trait ToNamelist {
    /// File name the namelist is written to inside a run directory.
    fn file_name(&self) -> &'static str;

    fn to_namelist(&self) -> Namelist;
}
