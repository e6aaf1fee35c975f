// schismrs-namelist/src/schema/macros.rs

//! Declarative macros generating schema types.
//!
//! Fields are written `name: Type` with an optional constraint list,
//! `name: Option<f64> => [Gt(0.0), Le(86400.0)]`. Constraints are
//! [`Constraint`](crate::schema::Constraint) variants and are checked during
//! validation. A leading `#[custom_rules]` attribute means the type provides
//! its own [`GroupRules`](crate::schema::GroupRules) impl.

/// Define a struct implementing [`Node`](crate::schema::Node).
#[macro_export]
macro_rules! schema_struct {
    (@define
        [$($meta:tt)*] $vis:vis $name:ident
        [$( [$($fmeta:tt)*] [$fvis:vis] $field:ident : $ty:ty $({ $($rules:tt)* })? )*]
    ) => {
        $($meta)*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $( $($fmeta)* $fvis $field: $ty, )*
        }

        impl $crate::schema::Node for $name {
            fn from_value(
                value: $crate::schema::Value,
                path: &$crate::schema::FieldPath,
            ) -> ::std::result::Result<Self, $crate::schema::Violations> {
                let mut map = $crate::schema::expect_object(value, path)?;
                let mut report = $crate::schema::Violations::new();
                $(
                    let $field = $crate::schema::read_field::<$ty>(
                        &mut map,
                        stringify!($field),
                        path,
                        &mut report,
                    );
                )*
                $crate::schema::reject_unknown(map, path, &mut report);
                match ($($field,)*) {
                    ($(::std::option::Option::Some($field),)*) if report.is_empty() => {
                        let mut built = Self { $($field),* };
                        $crate::schema::GroupRules::fill_defaults(&mut built);
                        Ok(built)
                    }
                    _ => Err(report),
                }
            }

            fn merge(
                &mut self,
                value: $crate::schema::Value,
                path: &$crate::schema::FieldPath,
            ) -> ::std::result::Result<(), $crate::schema::Violations> {
                let map = $crate::schema::expect_object(value, path)?;
                let mut report = $crate::schema::Violations::new();
                for (key, value) in map {
                    let field_path = path.join(&key);
                    let merged = match key.as_str() {
                        $(
                            stringify!($field) => {
                                $crate::schema::Node::merge(&mut self.$field, value, &field_path)
                            }
                        )*
                        _ => Err($crate::schema::Violations::single($crate::schema::Violation::new(
                            field_path,
                            $crate::schema::ViolationKind::UnknownField,
                        ))),
                    };
                    if let Err(violations) = merged {
                        report.extend(violations);
                    }
                }
                $crate::schema::GroupRules::fill_defaults(self);
                report.into_result(())
            }

            fn validate(
                &self,
                path: &$crate::schema::FieldPath,
                report: &mut $crate::schema::Violations,
            ) {
                $(
                    {
                        let field_path = path.join(stringify!($field));
                        $crate::schema::Node::validate(&self.$field, &field_path, report);
                        $(
                            $crate::schema::check_all(
                                &self.$field,
                                &$crate::__constraint_list!($($rules)*),
                                &field_path,
                                report,
                            );
                        )?
                    }
                )*
                $crate::schema::GroupRules::check_rules(self, path, report);
            }
        }
    };

    (
        #[custom_rules]
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(=> [$($rules:tt)*])?
            ),* $(,)?
        }
    ) => {
        $crate::schema_struct!(@define
            [$(#[$meta])*] $vis $name
            [$( [$(#[$fmeta])*] [$fvis] $field : $ty $({ $($rules)* })? )*]
        );
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(=> [$($rules:tt)*])?
            ),* $(,)?
        }
    ) => {
        $crate::schema_struct!(@define
            [$(#[$meta])*] $vis $name
            [$( [$(#[$fmeta])*] [$fvis] $field : $ty $({ $($rules)* })? )*]
        );

        impl $crate::schema::GroupRules for $name {}
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __constraint_list {
    ($($constraint:ident($($arg:tt)*)),* $(,)?) => {
        [$($crate::schema::Constraint::$constraint($($arg)*)),*]
    };
}

/// Define a parameter group rendered as one `&GROUP ... /` namelist block.
///
/// Every field must implement [`ToFortran`](crate::ToFortran); fields that
/// are absent are left out of the block.
#[macro_export]
macro_rules! namelist_group {
    (
        #[group = $group:literal]
        $(#[$($meta:tt)*])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(=> [$($rules:tt)*])?
            ),* $(,)?
        }
    ) => {
        $crate::schema_struct! {
            $(#[$($meta)*])*
            $vis struct $name {
                $( $(#[$fmeta])* $fvis $field : $ty $(=> [$($rules)*])? ),*
            }
        }

        impl $crate::namelist::ToNamelistGroup for $name {
            const GROUP_NAME: &'static str = $group;

            fn to_group(&self) -> $crate::NamelistGroup {
                let mut group = $crate::NamelistGroup::new();
                $(
                    if let ::std::option::Option::Some(value) =
                        $crate::ToFortran::to_fortran(&self.$field)
                    {
                        group.insert_value(stringify!($field), value);
                    }
                )*
                group
            }
        }
    };
}

/// Define a namelist file made of optional parameter groups, written in
/// declaration order.
#[macro_export]
macro_rules! namelist_file {
    (
        #[file = $file:literal]
        $(#[$($meta:tt)*])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $group:ty
            ),* $(,)?
        }
    ) => {
        $crate::schema_struct! {
            $(#[$($meta)*])*
            $vis struct $name {
                $( $(#[$fmeta])* $fvis $field : ::std::option::Option<$group> ),*
            }
        }

        impl $crate::namelist::ToNamelist for $name {
            fn file_name(&self) -> &'static str {
                $file
            }

            fn to_namelist(&self) -> $crate::Namelist {
                let mut nml = $crate::Namelist::new();
                $(
                    if let ::std::option::Option::Some(group) = &self.$field {
                        nml.insert_group_object(
                            <$group as $crate::namelist::ToNamelistGroup>::GROUP_NAME,
                            $crate::namelist::ToNamelistGroup::to_group(group),
                        );
                    }
                )*
                nml
            }
        }
    };
}

/// Define an enum of parameter groups selected by the `model_type` key.
///
/// A merge carrying a different `model_type` rebuilds the value as the new
/// variant; otherwise the merge goes into the current variant.
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $tag:literal => $variant:ident($inner:ty)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant($inner), )*
        }

        impl $name {
            /// Accepted `model_type` values.
            pub const TAGS: &'static [&'static str] = &[$($tag),*];

            pub fn model_type(&self) -> &'static str {
                match self {
                    $( $name::$variant(_) => $tag, )*
                }
            }
        }

        impl $crate::schema::Node for $name {
            fn from_value(
                value: $crate::schema::Value,
                path: &$crate::schema::FieldPath,
            ) -> ::std::result::Result<Self, $crate::schema::Violations> {
                let (tag, rest) = $crate::schema::split_tag(value, path)?;
                match tag.as_str() {
                    $(
                        $tag => <$inner as $crate::schema::Node>::from_value(rest, path)
                            .map($name::$variant),
                    )*
                    other => Err($crate::schema::unknown_tag(other, Self::TAGS, path)),
                }
            }

            fn merge(
                &mut self,
                value: $crate::schema::Value,
                path: &$crate::schema::FieldPath,
            ) -> ::std::result::Result<(), $crate::schema::Violations> {
                let mut map = $crate::schema::expect_object(value, path)?;
                let switches = match map.get($crate::schema::TAG_KEY) {
                    ::std::option::Option::Some(tag) => tag.as_str() != Some(self.model_type()),
                    ::std::option::Option::None => false,
                };
                if switches {
                    *self = Self::from_value($crate::schema::Value::Object(map), path)?;
                    return Ok(());
                }
                map.remove($crate::schema::TAG_KEY);
                let rest = $crate::schema::Value::Object(map);
                match self {
                    $( $name::$variant(inner) => $crate::schema::Node::merge(inner, rest, path), )*
                }
            }

            fn validate(
                &self,
                path: &$crate::schema::FieldPath,
                report: &mut $crate::schema::Violations,
            ) {
                match self {
                    $( $name::$variant(inner) => $crate::schema::Node::validate(inner, path, report), )*
                }
            }
        }
    };
}
