use serde_json::Value;
use tr069_model::ObjectSchema;

use crate::json_schema::json_schema;

/// A validation error with a JSON path and message.
#[derive(Debug, Clone)]
pub struct SchemaError {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Validate a YAML (or JSON) string against the JSON Schema generated for
/// `root`.
///
/// Returns `Ok(())` if valid, or a list of schema validation errors.
pub fn validate_yaml_schema(
    yaml_text: &str,
    root: &'static ObjectSchema,
) -> Result<(), Vec<SchemaError>> {
    let instance: Value = serde_yaml::from_str(yaml_text).map_err(|e| {
        vec![SchemaError {
            path: String::new(),
            message: format!("YAML parse error: {e}"),
        }]
    })?;

    let schema = json_schema(root);
    let validator = jsonschema::draft202012::new(&schema).map_err(|e| {
        vec![SchemaError {
            path: String::new(),
            message: format!("generated schema is invalid: {e}"),
        }]
    })?;

    let errors: Vec<SchemaError> = validator
        .iter_errors(&instance)
        .map(|e| SchemaError {
            path: e.instance_path().to_string(),
            message: e.to_string(),
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
