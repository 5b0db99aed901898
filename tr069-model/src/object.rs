//! Generic access to entities by wire name.

use thiserror::Error;

use crate::schema::{ConstraintViolation, ObjectSchema};
use crate::value::{ParamValue, ValueError, split_list};

/// A data model object that can be addressed by wire names.
///
/// Implemented for every entity by `data_object!`. Instance numbers handed
/// out here are positional: row index + 1.
pub trait DataObject: std::fmt::Debug {
    fn schema(&self) -> &'static ObjectSchema;

    /// Current value of a parameter in wire form. `None` when the parameter
    /// is unset or unknown; list parameters always yield a (possibly empty)
    /// string.
    fn parameter(&self, name: &str) -> Option<String>;

    /// Parse `value` and assign it. No facet check is applied.
    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), ModelError>;

    /// Present child objects and table rows, in declaration order.
    fn children(&self) -> Vec<Child<'_>>;

    fn children_mut(&mut self) -> Vec<ChildMut<'_>>;

    /// Create the singleton child `name` if absent. Returns false when this
    /// object has no such singleton child.
    fn ensure_object(&mut self, name: &str) -> bool;

    /// Append a default row to `table`, returning its instance number.
    fn add_instance(&mut self, table: &str) -> Option<usize>;

    /// Remove row `instance` from `table`. Later rows shift down.
    fn delete_instance(&mut self, table: &str, instance: usize) -> bool;
}

#[derive(Debug)]
pub struct Child<'a> {
    pub name: &'static str,
    /// Set for table rows.
    pub instance: Option<usize>,
    pub object: &'a dyn DataObject,
}

#[derive(Debug)]
pub struct ChildMut<'a> {
    pub name: &'static str,
    pub instance: Option<usize>,
    pub object: &'a mut dyn DataObject,
}

/// Path segment of a child below `parent` (which ends in `.`).
pub fn child_path(parent: &str, name: &str, instance: Option<usize>) -> String {
    match instance {
        Some(n) => format!("{parent}{name}.{n}."),
        None => format!("{parent}{name}."),
    }
}

impl Child<'_> {
    pub fn path(&self, parent: &str) -> String {
        child_path(parent, self.name, self.instance)
    }
}

impl ChildMut<'_> {
    pub fn path(&self, parent: &str) -> String {
        child_path(parent, self.name, self.instance)
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),
    #[error("unknown object '{0}'")]
    UnknownObject(String),
    #[error("invalid value for '{name}': {source}")]
    InvalidValue {
        name: String,
        #[source]
        source: ValueError,
    },
    #[error("value for '{name}' violates a constraint: {source}")]
    Constraint {
        name: String,
        #[source]
        source: ConstraintViolation,
    },
    #[error("parameter '{0}' is not writable")]
    NotWritable(String),
    #[error("'{0}' is not a table")]
    NotATable(String),
}

impl ModelError {
    /// CWMP fault code for this error.
    pub fn fault_code(&self) -> u32 {
        match self {
            Self::UnknownParameter(_) | Self::UnknownObject(_) | Self::NotATable(_) => 9005,
            Self::InvalidValue { .. } | Self::Constraint { .. } => 9007,
            Self::NotWritable(_) => 9008,
        }
    }
}

pub fn parse_param<T: ParamValue>(name: &str, value: &str) -> Result<T, ModelError> {
    T::from_wire(value).map_err(|source| ModelError::InvalidValue {
        name: name.to_string(),
        source,
    })
}

pub fn parse_list<T: ParamValue>(name: &str, value: &str) -> Result<Vec<T>, ModelError> {
    split_list(value).map_err(|source| ModelError::InvalidValue {
        name: name.to_string(),
        source,
    })
}
