//! YAML (or JSON) document -> entity tree.
//!
//! Parsing is lenient: keys the data model does not know are skipped with a
//! warning, and keys missing from the document take the entity defaults.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use tr069_model::{DataObject, ObjectSchema};

#[derive(Debug, thiserror::Error)]
pub enum YamlParseError {
    #[error("YAML deserialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// Parse a YAML string into an entity.
pub fn parse_yaml<T>(yaml: &str) -> Result<T, YamlParseError>
where
    T: DeserializeOwned + DataObject,
{
    if yaml.trim().is_empty() {
        return Err(YamlParseError::InvalidDocument("empty document".into()));
    }
    let value: Value = serde_yaml::from_str(yaml)?;
    if !value.is_mapping() {
        return Err(YamlParseError::InvalidDocument(
            "top level is not a mapping".into(),
        ));
    }

    let doc = T::deserialize(&value)?;
    for key in unknown_keys(&value, doc.schema()) {
        log::warn!("ignoring unknown key '{}'", key);
    }
    Ok(doc)
}

/// Dotted paths (with 1-based row numbers) of every mapping key in `value`
/// that is neither a parameter nor a child object of the schema it sits
/// under.
pub fn unknown_keys(value: &Value, schema: &'static ObjectSchema) -> Vec<String> {
    let mut out = Vec::new();
    collect_unknown(value, schema, "", &mut out);
    out
}

fn collect_unknown(
    value: &Value,
    schema: &'static ObjectSchema,
    path: &str,
    out: &mut Vec<String>,
) {
    let Some(map) = value.as_mapping() else {
        return;
    };
    for (key, child) in map {
        let Some(name) = key.as_str() else {
            out.push(format!("{path}{key:?}"));
            continue;
        };
        if schema.parameter(name).is_some() {
            continue;
        }
        match schema.child(name) {
            Some(c) if c.multi_instance => {
                for (i, row) in child.as_sequence().into_iter().flatten().enumerate() {
                    collect_unknown(row, c.schema, &format!("{path}{name}.{}.", i + 1), out);
                }
            }
            Some(c) => collect_unknown(child, c.schema, &format!("{path}{name}."), out),
            None => out.push(format!("{path}{name}")),
        }
    }
}
