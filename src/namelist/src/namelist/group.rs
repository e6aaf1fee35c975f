// schismrs-namelist/src/namelist/group.rs

//! Namelist group data structure and its text output.

use crate::fortran_types::FortranValue;
use crate::WriteOptions;
use std::fmt;

/// A single namelist group containing variables in insertion order.
///
/// Variable names are case-insensitive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NamelistGroup {
    variables: Vec<(String, FortranValue)>,
}

impl NamelistGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable with automatic type conversion.
    pub fn insert<T: Into<FortranValue>>(&mut self, name: &str, value: T) -> &mut Self {
        self.insert_value(name, value.into())
    }

    /// Insert a variable; re-inserting a name replaces the value in place.
    pub fn insert_value(&mut self, name: &str, value: FortranValue) -> &mut Self {
        match self
            .variables
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some((_, slot)) => *slot = value,
            None => self.variables.push((name.to_lowercase(), value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&FortranValue> {
        self.variables
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, &FortranValue)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Render the body of the group, one assignment per line.
    pub fn to_fortran_string(&self, options: &WriteOptions) -> String {
        let mut output = String::new();
        for (var_name, var_value) in self.variables() {
            let name = if options.uppercase_variables {
                var_name.to_uppercase()
            } else {
                var_name.to_string()
            };
            let lines = match var_value {
                FortranValue::Array(values) => format_array_assignment(&name, values, options),
                value => vec![format_simple_assignment(&name, value, options)],
            };
            for line in lines {
                output.push_str(&options.indent);
                output.push_str(&line);
                output.push('\n');
            }
        }
        output
    }
}

fn format_simple_assignment(name: &str, value: &FortranValue, options: &WriteOptions) -> String {
    let mut line = format!(
        "{} = {}",
        name,
        value.to_fortran_string_with_options(&options.format_options())
    );
    if options.end_comma {
        line.push(',');
    }
    line
}

fn format_array_assignment(
    name: &str,
    values: &[FortranValue],
    options: &WriteOptions,
) -> Vec<String> {
    if values.is_empty() {
        return vec![format!("{} =", name)];
    }

    let start_idx = options.default_start_index;
    let end_idx = start_idx + values.len() as i32 - 1;
    let mut line = if values.len() == 1 {
        format!("{}({}) = ", name, start_idx)
    } else {
        format!("{}({}:{}) = ", name, start_idx, end_idx)
    };
    let header_len = line.len();
    let format_options = options.format_options();
    let mut lines = Vec::new();

    for (i, value) in values.iter().enumerate() {
        let value_str = value.to_fortran_string_with_options(&format_options);
        if i > 0 {
            // Room is kept for the separator that may follow this element.
            if options.column_width > 0
                && options.indent.len() + line.len() + value_str.len() + 3 > options.column_width
            {
                line.push(',');
                lines.push(line);
                line = " ".repeat(header_len);
            } else {
                line.push_str(", ");
            }
        }
        line.push_str(&value_str);
    }

    if options.end_comma {
        line.push(',');
    }
    lines.push(line);
    lines
}

impl fmt::Display for NamelistGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fortran_string(&WriteOptions::default()))
    }
}
