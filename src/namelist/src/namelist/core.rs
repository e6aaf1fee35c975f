// schismrs-namelist/src/namelist/core.rs

//! A namelist file as an ordered list of groups.

use super::group::NamelistGroup;
use crate::WriteOptions;
use std::fmt;

/// A complete Fortran namelist file containing multiple groups.
///
/// Group names are case-insensitive and kept in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Namelist {
    groups: Vec<(String, NamelistGroup)>,
}

impl Namelist {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.groups
            .iter()
            .position(|(existing, _)| existing.eq_ignore_ascii_case(name))
    }

    /// Get the group called `name`, appending an empty one if needed.
    pub fn insert_group(&mut self, name: &str) -> &mut NamelistGroup {
        let index = match self.position(name) {
            Some(index) => index,
            None => {
                self.groups.push((name.to_lowercase(), NamelistGroup::new()));
                self.groups.len() - 1
            }
        };
        &mut self.groups[index].1
    }

    /// Store `group` under `name`, replacing a group of the same name in place.
    pub fn insert_group_object(&mut self, name: &str, group: NamelistGroup) {
        match self.position(name) {
            Some(index) => self.groups[index].1 = group,
            None => self.groups.push((name.to_lowercase(), group)),
        }
    }

    pub fn get_group(&self, name: &str) -> Option<&NamelistGroup> {
        self.position(name).map(|index| &self.groups[index].1)
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &NamelistGroup)> {
        self.groups.iter().map(|(name, group)| (name.as_str(), group))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Render the namelist as Fortran text, groups separated by a blank line.
    pub fn to_fortran_string(&self, options: &WriteOptions) -> String {
        self.groups()
            .map(|(name, group)| {
                let name = if options.uppercase_groups {
                    name.to_uppercase()
                } else {
                    name.to_string()
                };
                format!("&{}\n{}/\n", name, group.to_fortran_string(options))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Namelist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fortran_string(&WriteOptions::default()))
    }
}
