//! Static metadata for the data model: object paths, parameter wire names,
//! types, access modes and the documented constraints.
//!
//! Every entity carries a `SCHEMA` constant built from these types. The
//! interop layers (XML, YAML, the BBF data-model writer, the validators) are
//! all driven from it.

use std::fmt;

use thiserror::Error;

use crate::value::{HexBinary, ParamValue, ValueError, check_wire};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    ReadOnly,
    ReadWrite,
}

impl Access {
    /// Name used by BBF data-model XML.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadOnly => "readOnly",
            Self::ReadWrite => "readWrite",
        }
    }

    pub fn is_writable(self) -> bool {
        self == Self::ReadWrite
    }

    /// Parse a BBF access attribute. Object tables use `readOnly`,
    /// `create`, `delete` and `createDelete`; anything but `readOnly` makes
    /// the item writable.
    pub fn from_dm(value: &str) -> Option<Self> {
        match value {
            "readOnly" => Some(Self::ReadOnly),
            "readWrite" | "create" | "delete" | "createDelete" => Some(Self::ReadWrite),
            _ => None,
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    String,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    Boolean,
    DateTime,
    HexBinary,
    Alias,
    IpAddress,
}

impl ParamKind {
    /// CWMP `xsd:` type used in ParameterValueStruct.
    pub fn xsd_type(self) -> &'static str {
        match self {
            Self::String | Self::Alias | Self::IpAddress => "xsd:string",
            Self::Int => "xsd:int",
            Self::UnsignedInt => "xsd:unsignedInt",
            Self::Long => "xsd:long",
            Self::UnsignedLong => "xsd:unsignedLong",
            Self::Boolean => "xsd:boolean",
            Self::DateTime => "xsd:dateTime",
            Self::HexBinary => "xsd:hexBinary",
        }
    }

    /// Base syntax element in BBF data-model XML.
    pub fn dm_type(self) -> &'static str {
        match self {
            Self::String | Self::Alias | Self::IpAddress => "string",
            Self::Int => "int",
            Self::UnsignedInt => "unsignedInt",
            Self::Long => "long",
            Self::UnsignedLong => "unsignedLong",
            Self::Boolean => "boolean",
            Self::DateTime => "dateTime",
            Self::HexBinary => "hexBinary",
        }
    }

    /// Named `dataType` reference in BBF data-model XML, if any.
    pub fn data_type(self) -> Option<&'static str> {
        match self {
            Self::Alias => Some("Alias"),
            Self::IpAddress => Some("IPAddress"),
            _ => None,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Int | Self::UnsignedInt | Self::Long | Self::UnsignedLong
        )
    }

    /// Range implied by the type itself.
    pub fn natural_range(self) -> Option<(i128, i128)> {
        match self {
            Self::Int => Some((i32::MIN.into(), i32::MAX.into())),
            Self::UnsignedInt => Some((0, u32::MAX.into())),
            Self::Long => Some((i64::MIN.into(), i64::MAX.into())),
            Self::UnsignedLong => Some((0, u64::MAX.into())),
            _ => None,
        }
    }

    /// Maximum length implied by the named data type.
    pub fn implied_max_length(self) -> Option<usize> {
        match self {
            Self::Alias => Some(64),
            Self::IpAddress => Some(45),
            _ => None,
        }
    }
}

/// Documented constraints on a parameter value.
///
/// None of these are enforced on assignment; [`ParamSchema::check`] and the
/// validation modules evaluate them on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facets {
    /// Maximum length of the value (per item for lists), in characters or
    /// in bytes for hexBinary.
    pub max_length: Option<usize>,
    /// Maximum length of the whole comma-separated list.
    pub list_max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    /// Enumerated legal values. Empty means unrestricted.
    pub values: &'static [&'static str],
    /// Object path template this parameter refers to, e.g.
    /// `VoiceService.{i}.CallControl.Line.{i}.`.
    pub reference: Option<&'static str>,
}

impl Facets {
    pub const NONE: Self = Self {
        max_length: None,
        list_max_length: None,
        min: None,
        max: None,
        values: &[],
        reference: None,
    };

    pub const fn max_len(len: usize) -> Self {
        Self::NONE.with_max_len(len)
    }

    pub const fn range(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::NONE
        }
    }

    pub const fn min_value(min: i64) -> Self {
        Self {
            min: Some(min),
            ..Self::NONE
        }
    }

    pub const fn max_value(max: i64) -> Self {
        Self {
            max: Some(max),
            ..Self::NONE
        }
    }

    pub const fn enumeration(values: &'static [&'static str]) -> Self {
        Self::NONE.with_values(values)
    }

    pub const fn reference(target: &'static str) -> Self {
        Self::NONE.with_reference(target)
    }

    pub const fn with_max_len(self, len: usize) -> Self {
        Self {
            max_length: Some(len),
            ..self
        }
    }

    pub const fn with_list_max_len(self, len: usize) -> Self {
        Self {
            list_max_length: Some(len),
            ..self
        }
    }

    pub const fn with_values(self, values: &'static [&'static str]) -> Self {
        Self { values, ..self }
    }

    pub const fn with_reference(self, target: &'static str) -> Self {
        Self {
            reference: Some(target),
            ..self
        }
    }
}

/// One parameter of an object.
#[derive(Debug, Clone, Copy)]
pub struct ParamSchema {
    /// Wire name, e.g. `MaxNumberOfLines`.
    pub name: &'static str,
    pub kind: ParamKind,
    /// Comma-separated list of `kind` values.
    pub list: bool,
    pub access: Access,
    pub facets: Facets,
    /// Default as a wire string.
    pub default: Option<&'static str>,
    /// Documentation from the defining standard, as raw doc-comment text.
    /// See [`description_text`].
    pub description: &'static str,
}

/// A child object or table of an object.
#[derive(Debug, Clone, Copy)]
pub struct ChildSchema {
    /// Wire name, e.g. `Line`.
    pub name: &'static str,
    pub multi_instance: bool,
    pub schema: &'static ObjectSchema,
}

#[derive(Debug)]
pub struct ObjectSchema {
    /// Rust type name.
    pub name: &'static str,
    /// Object path template as named by the defining document, e.g.
    /// `VoiceService.{i}.Trunk.{i}.`. Full paths in a tree are derived from
    /// the containment, not from this field.
    pub path: &'static str,
    /// Raw doc-comment text of the object.
    pub description: &'static str,
    pub multi_instance: bool,
    pub parameters: &'static [ParamSchema],
    pub children: &'static [ChildSchema],
}

impl ObjectSchema {
    pub fn parameter(&self, name: &str) -> Option<&'static ParamSchema> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn child(&self, name: &str) -> Option<&'static ChildSchema> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Wire name of the last path segment (`Line` for `...Line.{i}.`).
    pub fn object_name(&self) -> &'static str {
        let trimmed = self.path.trim_end_matches('.');
        let trimmed = trimmed.strip_suffix(".{i}").unwrap_or(trimmed);
        trimmed.rsplit('.').next().unwrap_or(trimmed)
    }
}

/// Turn raw doc-comment text into prose: lines are trimmed and joined with
/// spaces, blank lines separate paragraphs.
pub fn description_text(raw: &str) -> String {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    for line in raw.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(line);
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs.join("\n\n")
}

/// True when `path` names a table row, i.e. ends in `{i}.`.
pub const fn is_table_path(path: &str) -> bool {
    let bytes = path.as_bytes();
    let n = bytes.len();
    n >= 4
        && bytes[n - 4] == b'{'
        && bytes[n - 3] == b'i'
        && bytes[n - 2] == b'}'
        && bytes[n - 1] == b'.'
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("length {length} exceeds maximum {max}")]
    TooLong { length: usize, max: usize },
    #[error("value {value} is below minimum {min}")]
    BelowMinimum { value: i128, min: i64 },
    #[error("value {value} is above maximum {max}")]
    AboveMaximum { value: i128, max: i64 },
    #[error("'{value}' is not one of {allowed:?}")]
    NotInEnumeration {
        value: String,
        allowed: &'static [&'static str],
    },
    #[error("alias '{0}' must start with a letter")]
    InvalidAlias(String),
    #[error("'{0}' is not an IP address")]
    InvalidIpAddress(String),
    #[error(transparent)]
    InvalidValue(#[from] ValueError),
}

impl ParamSchema {
    /// Check one wire value against the type and the facets.
    pub fn check(&self, wire: &str) -> Result<(), ConstraintViolation> {
        check_wire(self.kind, self.list, wire)?;
        if self.list {
            if let Some(max) = self.facets.list_max_length {
                let length = wire.chars().count();
                if length > max {
                    return Err(ConstraintViolation::TooLong { length, max });
                }
            }
            if wire.trim().is_empty() {
                return Ok(());
            }
            return wire.split(',').try_for_each(|item| self.check_item(item.trim()));
        }
        self.check_item(wire)
    }

    fn check_item(&self, item: &str) -> Result<(), ConstraintViolation> {
        let max_length = self
            .facets
            .max_length
            .or_else(|| self.kind.implied_max_length());
        if let Some(max) = max_length {
            let length = match self.kind {
                ParamKind::HexBinary => HexBinary::from_wire(item)?.0.len(),
                _ => item.chars().count(),
            };
            if length > max {
                return Err(ConstraintViolation::TooLong { length, max });
            }
        }

        if self.kind.is_integer() {
            let value: i128 = item.trim().parse().map_err(|_| ValueError::InvalidNumber {
                kind: self.kind.dm_type(),
                value: item.to_string(),
            })?;
            if let Some(min) = self.facets.min {
                if value < i128::from(min) {
                    return Err(ConstraintViolation::BelowMinimum { value, min });
                }
            }
            if let Some(max) = self.facets.max {
                if value > i128::from(max) {
                    return Err(ConstraintViolation::AboveMaximum { value, max });
                }
            }
        }

        if !self.facets.values.is_empty() && !self.facets.values.contains(&item) {
            return Err(ConstraintViolation::NotInEnumeration {
                value: item.to_string(),
                allowed: self.facets.values,
            });
        }

        match self.kind {
            ParamKind::Alias
                if !item.is_empty() && !item.starts_with(|c: char| c.is_ascii_alphabetic()) =>
            {
                Err(ConstraintViolation::InvalidAlias(item.to_string()))
            }
            ParamKind::IpAddress
                if !item.trim().is_empty() && item.trim().parse::<std::net::IpAddr>().is_err() =>
            {
                Err(ConstraintViolation::InvalidIpAddress(item.to_string()))
            }
            _ => Ok(()),
        }
    }
}

/// Parameter path template and its schema, as visited by [`walk_parameters`].
#[derive(Debug, Clone)]
pub struct ParamEntry {
    pub path: String,
    pub object: &'static ObjectSchema,
    pub param: &'static ParamSchema,
}

/// Visit every parameter path template below `schema`, depth first in
/// declaration order. Tables contribute a `{i}` segment.
pub fn walk_parameters(
    schema: &'static ObjectSchema,
    root_path: &str,
    visitor: &mut dyn FnMut(&ParamEntry),
) {
    walk_objects(schema, root_path, &mut |path, object| {
        for param in object.parameters {
            visitor(&ParamEntry {
                path: format!("{path}{}", param.name),
                object,
                param,
            });
        }
    });
}

/// Visit every object path template below and including `schema`.
pub fn walk_objects(
    schema: &'static ObjectSchema,
    root_path: &str,
    visitor: &mut dyn FnMut(&str, &'static ObjectSchema),
) {
    visitor(root_path, schema);
    for child in schema.children {
        let path = if child.multi_instance {
            format!("{root_path}{}.{{i}}.", child.name)
        } else {
            format!("{root_path}{}.", child.name)
        };
        walk_objects(child.schema, &path, visitor);
    }
}

/// Collect every parameter path template below `schema`.
pub fn parameter_paths(schema: &'static ObjectSchema, root_path: &str) -> Vec<String> {
    let mut out = Vec::new();
    walk_parameters(schema, root_path, &mut |entry| out.push(entry.path.clone()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(kind: ParamKind, facets: Facets) -> ParamSchema {
        ParamSchema {
            name: "Test",
            kind,
            list: false,
            access: Access::ReadWrite,
            facets,
            default: None,
            description: "",
        }
    }

    #[test]
    fn test_is_table_path() {
        assert!(is_table_path("VoiceService.{i}."));
        assert!(is_table_path("VoiceService.{i}.Trunk.{i}."));
        assert!(!is_table_path("VoiceService.{i}.CallControl."));
        assert!(!is_table_path(""));
    }

    #[test]
    fn test_access_from_dm() {
        assert_eq!(Access::from_dm("readOnly"), Some(Access::ReadOnly));
        assert_eq!(Access::from_dm("createDelete"), Some(Access::ReadWrite));
        assert_eq!(Access::from_dm("bogus"), None);
    }

    #[test]
    fn test_check_range() {
        let p = param(ParamKind::Int, Facets::min_value(-1));
        assert!(p.check("-1").is_ok());
        assert!(p.check("12").is_ok());
        assert_eq!(
            p.check("-2"),
            Err(ConstraintViolation::BelowMinimum { value: -2, min: -1 })
        );
    }

    #[test]
    fn test_check_length_and_enumeration() {
        let p = param(
            ParamKind::String,
            Facets::enumeration(&["Up", "Disabled"]).with_max_len(8),
        );
        assert!(p.check("Up").is_ok());
        assert!(matches!(
            p.check("Down"),
            Err(ConstraintViolation::NotInEnumeration { .. })
        ));
        assert!(matches!(
            p.check("VeryLongValue"),
            Err(ConstraintViolation::TooLong { length: 13, max: 8 })
        ));
    }

    #[test]
    fn test_check_hex_binary_counts_bytes() {
        let p = param(ParamKind::HexBinary, Facets::max_len(2));
        assert!(p.check("abcd").is_ok());
        assert!(matches!(
            p.check("abcdef"),
            Err(ConstraintViolation::TooLong { length: 3, max: 2 })
        ));
    }

    #[test]
    fn test_check_alias_and_ip() {
        let alias = param(ParamKind::Alias, Facets::NONE);
        assert!(alias.check("cpe-1").is_ok());
        assert!(matches!(
            alias.check("1st"),
            Err(ConstraintViolation::InvalidAlias(_))
        ));
        let ip = param(ParamKind::IpAddress, Facets::NONE);
        assert!(ip.check("").is_ok());
        assert!(ip.check("10.0.0.1").is_ok());
        assert!(matches!(
            ip.check("10.0.0"),
            Err(ConstraintViolation::InvalidIpAddress(_))
        ));
    }

    #[test]
    fn test_check_list_items() {
        let mut p = param(ParamKind::UnsignedInt, Facets::range(1, 10).with_list_max_len(8));
        p.list = true;
        assert!(p.check("1,2,3").is_ok());
        assert!(p.check("").is_ok());
        assert!(matches!(
            p.check("1,20"),
            Err(ConstraintViolation::AboveMaximum { value: 20, max: 10 })
        ));
        assert!(matches!(
            p.check("1,2,3,4,5"),
            Err(ConstraintViolation::TooLong { length: 9, max: 8 })
        ));
    }

    #[test]
    fn test_description_text() {
        assert_eq!(description_text(""), "");
        assert_eq!(
            description_text(" Enables or disables\n this trunk.\n\n Second paragraph.\n"),
            "Enables or disables this trunk.\n\nSecond paragraph."
        );
    }
}
