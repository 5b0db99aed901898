//! Entity tree -> YAML writer.
//!
//! Mapping keys are the data model wire names. Tables become sequences,
//! list parameters comma-delimited strings; unset parameters, absent
//! objects and empty tables are left out.

use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum YamlWriteError {
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Write an entity to a YAML string.
pub fn write_yaml<T: Serialize>(object: &T) -> Result<String, YamlWriteError> {
    let yaml = serde_yaml::to_string(object)?;
    Ok(yaml)
}
