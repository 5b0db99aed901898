//! BBF data-model definition XML (`cwmp-datamodel`) model.
//!
//! Serde types for the subset of the Broadband Forum data-model schema that
//! describes objects, parameters and their syntax. Attributes use the
//! quick-xml `@name` convention; everything else in a document (profiles,
//! components, imports, bibliography) is skipped on read.

use serde::{Deserialize, Serialize};
use tr069_model::{Access, ParamKind};

pub const DM_NAMESPACE: &str = "urn:broadband-forum-org:cwmp:datamodel-1-8";

// --- Root ---

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DmDocument {
    #[serde(rename = "@xmlns:dm", skip_serializing_if = "Option::is_none", default)]
    pub xmlns_dm: Option<String>,
    #[serde(rename = "@spec", skip_serializing_if = "Option::is_none", default)]
    pub spec: Option<String>,
    #[serde(rename = "description", skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(rename = "model", default)]
    pub models: Vec<DmModel>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DmModel {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "object", default)]
    pub objects: Vec<DmObject>,
}

// --- Objects and parameters ---

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DmObject {
    /// Full object path, e.g. `InternetGatewayDevice.Services.VoiceService.{i}.`.
    #[serde(rename = "@name", default)]
    pub name: String,
    /// Set instead of `name` when the object extends a previous definition.
    #[serde(rename = "@base", skip_serializing_if = "Option::is_none", default)]
    pub base: Option<String>,
    /// `readOnly`, or `create`/`delete`/`createDelete` for tables.
    #[serde(rename = "@access")]
    pub access: String,
    #[serde(rename = "@minEntries")]
    pub min_entries: String,
    /// A number or `unbounded`.
    #[serde(rename = "@maxEntries")]
    pub max_entries: String,
    #[serde(rename = "@numEntriesParameter", skip_serializing_if = "Option::is_none", default)]
    pub num_entries_parameter: Option<String>,
    #[serde(rename = "description", skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(rename = "parameter", default)]
    pub parameters: Vec<DmParameter>,
}

impl DmObject {
    /// The object path, whether it was given as `name` or `base`.
    pub fn path(&self) -> &str {
        match &self.base {
            Some(base) if self.name.is_empty() => base,
            _ => &self.name,
        }
    }

    pub fn is_table(&self) -> bool {
        self.max_entries != "1"
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DmParameter {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@base", skip_serializing_if = "Option::is_none", default)]
    pub base: Option<String>,
    /// Empty when a `base` parameter leaves the access unchanged.
    #[serde(rename = "@access", default)]
    pub access: String,
    #[serde(rename = "description", skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(rename = "syntax", default)]
    pub syntax: DmSyntax,
}

impl DmParameter {
    pub fn parameter_name(&self) -> &str {
        match &self.base {
            Some(base) if self.name.is_empty() => base,
            _ => &self.name,
        }
    }

    pub fn access(&self) -> Option<Access> {
        Access::from_dm(&self.access)
    }
}

// --- Syntax ---

/// Exactly one of the base type fields (or `data_type`) is expected to be
/// set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DmSyntax {
    #[serde(rename = "list", skip_serializing_if = "Option::is_none", default)]
    pub list: Option<DmList>,
    #[serde(rename = "string", skip_serializing_if = "Option::is_none", default)]
    pub string: Option<DmString>,
    #[serde(rename = "int", skip_serializing_if = "Option::is_none", default)]
    pub int: Option<DmNumber>,
    #[serde(rename = "unsignedInt", skip_serializing_if = "Option::is_none", default)]
    pub unsigned_int: Option<DmNumber>,
    #[serde(rename = "long", skip_serializing_if = "Option::is_none", default)]
    pub long: Option<DmNumber>,
    #[serde(rename = "unsignedLong", skip_serializing_if = "Option::is_none", default)]
    pub unsigned_long: Option<DmNumber>,
    #[serde(rename = "boolean", skip_serializing_if = "Option::is_none", default)]
    pub boolean: Option<DmEmpty>,
    #[serde(rename = "dateTime", skip_serializing_if = "Option::is_none", default)]
    pub date_time: Option<DmEmpty>,
    #[serde(rename = "hexBinary", skip_serializing_if = "Option::is_none", default)]
    pub hex_binary: Option<DmString>,
    #[serde(rename = "dataType", skip_serializing_if = "Option::is_none", default)]
    pub data_type: Option<DmDataTypeRef>,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none", default)]
    pub default: Option<DmDefault>,
}

impl DmSyntax {
    /// Name of the declared type: the named data type if any, otherwise the
    /// base type element.
    pub fn type_name(&self) -> Option<&str> {
        if let Some(dt) = &self.data_type {
            return Some(dt.reference.as_str());
        }
        let base = [
            (self.string.is_some(), "string"),
            (self.int.is_some(), "int"),
            (self.unsigned_int.is_some(), "unsignedInt"),
            (self.long.is_some(), "long"),
            (self.unsigned_long.is_some(), "unsignedLong"),
            (self.boolean.is_some(), "boolean"),
            (self.date_time.is_some(), "dateTime"),
            (self.hex_binary.is_some(), "hexBinary"),
        ];
        base.into_iter().find(|(set, _)| *set).map(|(_, name)| name)
    }

    /// Range facet of whichever integer type is set.
    pub fn range(&self) -> Option<&DmRange> {
        [&self.int, &self.unsigned_int, &self.long, &self.unsigned_long]
            .into_iter()
            .flatten()
            .find_map(|n| n.range.as_ref())
    }

    /// Facets of the string-like type that is set.
    pub fn string_facets(&self) -> Option<&DmString> {
        self.string.as_ref().or(self.hex_binary.as_ref())
    }
}

/// Type name used in a data-model document for a parameter kind.
pub fn kind_type_name(kind: ParamKind) -> &'static str {
    kind.data_type().unwrap_or_else(|| kind.dm_type())
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DmEmpty {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DmList {
    #[serde(rename = "size", skip_serializing_if = "Option::is_none", default)]
    pub size: Option<DmSize>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DmString {
    #[serde(rename = "size", skip_serializing_if = "Option::is_none", default)]
    pub size: Option<DmSize>,
    #[serde(rename = "pathRef", skip_serializing_if = "Option::is_none", default)]
    pub path_ref: Option<DmPathRef>,
    #[serde(rename = "enumeration", default)]
    pub enumerations: Vec<DmEnumeration>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DmSize {
    #[serde(rename = "@minLength", skip_serializing_if = "Option::is_none", default)]
    pub min_length: Option<usize>,
    #[serde(rename = "@maxLength", skip_serializing_if = "Option::is_none", default)]
    pub max_length: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DmNumber {
    #[serde(rename = "range", skip_serializing_if = "Option::is_none", default)]
    pub range: Option<DmRange>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DmRange {
    #[serde(rename = "@minInclusive", skip_serializing_if = "Option::is_none", default)]
    pub min_inclusive: Option<i64>,
    #[serde(rename = "@maxInclusive", skip_serializing_if = "Option::is_none", default)]
    pub max_inclusive: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DmEnumeration {
    #[serde(rename = "@value")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DmPathRef {
    #[serde(rename = "@refType")]
    pub ref_type: String,
    #[serde(rename = "@targetParent", skip_serializing_if = "Option::is_none", default)]
    pub target_parent: Option<String>,
    #[serde(rename = "@targetType", skip_serializing_if = "Option::is_none", default)]
    pub target_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DmDataTypeRef {
    #[serde(rename = "@ref")]
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DmDefault {
    /// `object` for defaults applied on creation, `factory` otherwise.
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@value")]
    pub value: String,
}
