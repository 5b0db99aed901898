pub mod json_schema;
pub mod parser;
pub mod validator;
pub mod writer;

pub use json_schema::json_schema;
pub use parser::{YamlParseError, parse_yaml, unknown_keys};
pub use validator::{SchemaError, validate_yaml_schema};
pub use writer::{YamlWriteError, write_yaml};
