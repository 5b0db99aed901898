//! Comparison of a parsed data-model definition with the built-in schema.

use std::collections::{HashMap, HashSet};
use std::fmt;

use tr069_model::schema::walk_objects;
use tr069_model::{Access, ObjectSchema};

use crate::dm_model::{DmDocument, DmObject, kind_type_name};

/// One difference between a data-model document and the built-in schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DmDifference {
    /// Object template known to the schema but absent from the document.
    MissingObject(String),
    /// Object template in the document that the schema does not know.
    ExtraObject(String),
    MissingParameter(String),
    ExtraParameter(String),
    AccessMismatch {
        path: String,
        expected: Access,
        found: Access,
    },
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: String,
    },
}

impl fmt::Display for DmDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingObject(path) => write!(f, "object {path} is missing from the document"),
            Self::ExtraObject(path) => write!(f, "object {path} is not in the built-in schema"),
            Self::MissingParameter(path) => {
                write!(f, "parameter {path} is missing from the document")
            }
            Self::ExtraParameter(path) => {
                write!(f, "parameter {path} is not in the built-in schema")
            }
            Self::AccessMismatch {
                path,
                expected,
                found,
            } => write!(f, "{path}: access is {found}, expected {expected}"),
            Self::TypeMismatch {
                path,
                expected,
                found,
            } => write!(f, "{path}: type is {found}, expected {expected}"),
        }
    }
}

/// Types that can be compared with a schema kind. Other named data types
/// (`MACAddress`, `StatsCounter32`, ...) are skipped.
const COMPARABLE_TYPES: &[&str] = &[
    "string",
    "int",
    "unsignedInt",
    "long",
    "unsignedLong",
    "boolean",
    "dateTime",
    "hexBinary",
    "Alias",
    "IPAddress",
];

/// Compare every model in `doc` against the schema of `root` mounted at
/// `root_path`. Differences are reported in schema order, then extra
/// objects in document order.
pub fn compare_data_model(
    doc: &DmDocument,
    root: &'static ObjectSchema,
    root_path: &str,
) -> Vec<DmDifference> {
    let found: HashMap<&str, &DmObject> = doc
        .models
        .iter()
        .flat_map(|m| m.objects.iter())
        .map(|o| (o.path(), o))
        .collect();

    let mut differences = Vec::new();
    let mut known: HashSet<String> = HashSet::new();

    walk_objects(root, root_path, &mut |path, schema| {
        known.insert(path.to_string());
        match found.get(path) {
            None => differences.push(DmDifference::MissingObject(path.to_string())),
            Some(object) => compare_object(path, schema, object, &mut differences),
        }
    });

    for object in doc.models.iter().flat_map(|m| m.objects.iter()) {
        if !known.contains(object.path()) {
            differences.push(DmDifference::ExtraObject(object.path().to_string()));
        }
    }

    log::debug!(
        "compared {} objects with {}: {} differences",
        known.len(),
        root_path,
        differences.len()
    );
    differences
}

fn compare_object(
    path: &str,
    schema: &'static ObjectSchema,
    object: &DmObject,
    out: &mut Vec<DmDifference>,
) {
    for param in schema.parameters {
        let full = format!("{path}{}", param.name);
        let Some(dm) = object
            .parameters
            .iter()
            .find(|p| p.parameter_name() == param.name)
        else {
            out.push(DmDifference::MissingParameter(full));
            continue;
        };

        if let Some(found) = dm.access() {
            if found != param.access {
                out.push(DmDifference::AccessMismatch {
                    path: full.clone(),
                    expected: param.access,
                    found,
                });
            }
        }

        let expected = kind_type_name(param.kind);
        if let Some(found) = dm.syntax.type_name() {
            if COMPARABLE_TYPES.contains(&found) && found != expected {
                out.push(DmDifference::TypeMismatch {
                    path: full,
                    expected,
                    found: found.to_string(),
                });
            }
        }
    }

    for dm in &object.parameters {
        if schema.parameter(dm.parameter_name()).is_none() {
            out.push(DmDifference::ExtraParameter(format!(
                "{path}{}",
                dm.parameter_name()
            )));
        }
    }
}
