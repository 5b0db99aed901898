#[macro_use]
mod macros;

pub mod fap;
pub mod igd;
pub mod object;
pub mod paths;
pub mod schema;
pub mod semantic;
pub mod validate;
pub mod value;
pub mod voice;

pub use igd::*;
pub use object::{DataObject, ModelError};
pub use paths::{
    ParameterValue, add_object, delete_object, get_parameter_values, parameter_values,
    refresh_entry_counts, set_parameter_value, set_parameter_values,
};
pub use schema::{Access, Facets, ObjectSchema, ParamKind, ParamSchema};
pub use semantic::{SemanticIssue, Severity, validate_semantics};
pub use validate::{ValidationError, validate_tree};
pub use value::{Alias, HexBinary, IpAddress, ParamValue};
