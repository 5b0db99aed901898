//! Data-model definition writer: static schema -> BBF `cwmp-datamodel` XML.
//!
//! Emits one `<object>` per object path template (tables get `{i}`
//! segments) with its parameters, access modes and syntax facets. Tables are
//! declared `createDelete` with unbounded entries; singletons have exactly
//! one entry.

use std::collections::HashMap;

use tr069_model::schema::{description_text, walk_objects};
use tr069_model::{Facets, ObjectSchema, ParamKind, ParamSchema};

use crate::dm_model::*;
use crate::writer::{XmlWriteError, to_document};

/// Write the data-model definition of `root` (mounted at `root_path`) as a
/// `dm:document` with a single `<model name=...>`.
pub fn write_data_model(
    root: &'static ObjectSchema,
    root_path: &str,
    model_name: &str,
) -> Result<String, XmlWriteError> {
    let document = build_data_model(root, root_path, model_name);
    to_document(&document, "dm:document")
}

/// Build the [`DmDocument`] written by [`write_data_model`].
pub fn build_data_model(
    root: &'static ObjectSchema,
    root_path: &str,
    model_name: &str,
) -> DmDocument {
    let mut objects = Vec::new();
    // Filled from the parent before its tables are visited.
    let mut count_params: HashMap<String, String> = HashMap::new();

    walk_objects(root, root_path, &mut |path, schema| {
        for child in schema.children.iter().filter(|c| c.multi_instance) {
            let count = format!("{}NumberOfEntries", child.name);
            if schema.parameter(&count).is_some() {
                count_params.insert(format!("{path}{}.{{i}}.", child.name), count);
            }
        }
        objects.push(dm_object(path, schema, count_params.remove(path)));
    });

    log::debug!(
        "data model '{}': {} objects below {}",
        model_name,
        objects.len(),
        root_path
    );

    DmDocument {
        xmlns_dm: Some(DM_NAMESPACE.to_string()),
        spec: None,
        description: None,
        models: vec![DmModel {
            name: model_name.to_string(),
            objects,
        }],
    }
}

fn dm_object(path: &str, schema: &'static ObjectSchema, count: Option<String>) -> DmObject {
    let (access, min, max) = if schema.multi_instance {
        ("createDelete", "0", "unbounded")
    } else {
        ("readOnly", "1", "1")
    };
    DmObject {
        name: path.to_string(),
        base: None,
        access: access.to_string(),
        min_entries: min.to_string(),
        max_entries: max.to_string(),
        num_entries_parameter: count,
        description: description(schema.description),
        parameters: schema.parameters.iter().map(dm_parameter).collect(),
    }
}

fn dm_parameter(param: &ParamSchema) -> DmParameter {
    DmParameter {
        name: param.name.to_string(),
        base: None,
        access: param.access.as_str().to_string(),
        description: description(param.description),
        syntax: dm_syntax(param),
    }
}

fn description(raw: &str) -> Option<String> {
    let text = description_text(raw);
    (!text.is_empty()).then_some(text)
}

fn dm_syntax(param: &ParamSchema) -> DmSyntax {
    let facets = &param.facets;
    let mut syntax = DmSyntax::default();

    if param.list {
        syntax.list = Some(DmList {
            size: facets.list_max_length.map(max_size),
        });
    }

    match param.kind {
        ParamKind::String => syntax.string = Some(dm_string(facets)),
        ParamKind::HexBinary => syntax.hex_binary = Some(dm_string(facets)),
        ParamKind::Int => syntax.int = Some(dm_number(facets)),
        ParamKind::UnsignedInt => syntax.unsigned_int = Some(dm_number(facets)),
        ParamKind::Long => syntax.long = Some(dm_number(facets)),
        ParamKind::UnsignedLong => syntax.unsigned_long = Some(dm_number(facets)),
        ParamKind::Boolean => syntax.boolean = Some(DmEmpty {}),
        ParamKind::DateTime => syntax.date_time = Some(DmEmpty {}),
        ParamKind::Alias | ParamKind::IpAddress => {
            syntax.data_type = param.kind.data_type().map(|name| DmDataTypeRef {
                reference: name.to_string(),
            });
        }
    }

    syntax.default = param.default.map(|value| DmDefault {
        kind: "object".to_string(),
        value: value.to_string(),
    });
    syntax
}

fn max_size(max: usize) -> DmSize {
    DmSize {
        min_length: None,
        max_length: Some(max),
    }
}

fn dm_string(facets: &Facets) -> DmString {
    DmString {
        size: facets.max_length.map(max_size),
        path_ref: facets.reference.map(path_ref),
        enumerations: facets
            .values
            .iter()
            .map(|v| DmEnumeration {
                value: (*v).to_string(),
            })
            .collect(),
    }
}

/// Row references name the table; object references name the object.
fn path_ref(target: &str) -> DmPathRef {
    let (parent, kind) = match target.strip_suffix("{i}.") {
        Some(table) => (table, "row"),
        None => (target, "object"),
    };
    DmPathRef {
        ref_type: "strong".to_string(),
        target_parent: Some(parent.to_string()),
        target_type: Some(kind.to_string()),
    }
}

fn dm_number(facets: &Facets) -> DmNumber {
    let range = (facets.min.is_some() || facets.max.is_some()).then_some(DmRange {
        min_inclusive: facets.min,
        max_inclusive: facets.max,
    });
    DmNumber { range }
}
