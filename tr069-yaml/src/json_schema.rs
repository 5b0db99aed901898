//! JSON Schema (draft 2020-12) generated from the static object schemas.
//!
//! Objects become `object` schemas closed with `additionalProperties:
//! false`, tables become arrays of row schemas. Parameters carry their type,
//! numeric range, length, enumeration, default, description and `readOnly`
//! annotation.
//! List parameters are plain strings limited by their total list length.

use serde_json::{Map, Value, json};
use tr069_model::schema::description_text;
use tr069_model::{Access, ObjectSchema, ParamKind, ParamSchema};

pub const DRAFT_2020_12: &str = "https://json-schema.org/draft/2020-12/schema";

/// JSON Schema describing a document rooted at `root`.
pub fn json_schema(root: &'static ObjectSchema) -> Value {
    let mut schema = object_schema(root);
    if let Value::Object(map) = &mut schema {
        map.insert("$schema".into(), Value::from(DRAFT_2020_12));
        map.insert("title".into(), Value::from(root.object_name()));
    }
    schema
}

fn object_schema(schema: &'static ObjectSchema) -> Value {
    let mut properties = Map::new();
    for param in schema.parameters {
        properties.insert(param.name.to_string(), parameter_schema(param));
    }
    for child in schema.children {
        let object = object_schema(child.schema);
        let value = if child.multi_instance {
            json!({ "type": "array", "items": object })
        } else {
            object
        };
        properties.insert(child.name.to_string(), value);
    }

    let mut out = json!({
        "type": "object",
        "properties": properties,
        "additionalProperties": false,
    });
    if let Value::Object(map) = &mut out {
        describe(map, schema.description);
    }
    out
}

fn describe(map: &mut Map<String, Value>, raw: &str) {
    let text = description_text(raw);
    if !text.is_empty() {
        map.insert("description".into(), Value::from(text));
    }
}

fn parameter_schema(param: &ParamSchema) -> Value {
    let facets = &param.facets;
    let mut out = Map::new();

    if param.list {
        out.insert("type".into(), Value::from("string"));
        if let Some(max) = facets.list_max_length {
            out.insert("maxLength".into(), Value::from(max));
        }
    } else {
        match param.kind {
            ParamKind::Boolean => {
                out.insert("type".into(), Value::from("boolean"));
            }
            kind if kind.is_integer() => {
                out.insert("type".into(), Value::from("integer"));
                let (natural_min, natural_max) = kind.natural_range().unwrap_or((0, 0));
                let min = facets.min.map_or(natural_min, i128::from).max(natural_min);
                let max = facets.max.map_or(natural_max, i128::from).min(natural_max);
                out.insert("minimum".into(), number(min));
                out.insert("maximum".into(), number(max));
            }
            ParamKind::DateTime => {
                out.insert("type".into(), Value::from("string"));
                out.insert("format".into(), Value::from("date-time"));
            }
            ParamKind::HexBinary => {
                out.insert("type".into(), Value::from("string"));
                out.insert("pattern".into(), Value::from("^([0-9A-Fa-f]{2})*$"));
                if let Some(max) = facets.max_length {
                    out.insert("maxLength".into(), Value::from(max * 2));
                }
            }
            kind => {
                out.insert("type".into(), Value::from("string"));
                if let Some(max) = facets.max_length.or(kind.implied_max_length()) {
                    out.insert("maxLength".into(), Value::from(max));
                }
                if kind == ParamKind::Alias {
                    out.insert("pattern".into(), Value::from("^$|^[A-Za-z]"));
                }
                if !facets.values.is_empty() {
                    out.insert("enum".into(), Value::from(facets.values.to_vec()));
                }
            }
        }
        if let Some(default) = param.default {
            out.insert("default".into(), typed_default(param.kind, default));
        }
    }

    if param.access == Access::ReadOnly {
        out.insert("readOnly".into(), Value::Bool(true));
    }
    describe(&mut out, param.description);
    Value::Object(out)
}

/// JSON number for an integer bound; the type ranges always fit i64 or u64.
fn number(value: i128) -> Value {
    match i64::try_from(value) {
        Ok(v) => Value::from(v),
        Err(_) => u64::try_from(value).map_or(Value::Null, Value::from),
    }
}

fn typed_default(kind: ParamKind, wire: &str) -> Value {
    match kind {
        ParamKind::Boolean => match wire {
            "true" | "1" => Value::Bool(true),
            "false" | "0" => Value::Bool(false),
            _ => Value::from(wire),
        },
        kind if kind.is_integer() => wire
            .parse::<i64>()
            .map(Value::from)
            .or_else(|_| wire.parse::<u64>().map(Value::from))
            .unwrap_or_else(|_| Value::from(wire)),
        _ => Value::from(wire),
    }
}
