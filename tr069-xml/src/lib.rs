pub mod dm_compare;
pub mod dm_model;
pub mod dm_parser;
pub mod dm_writer;
pub mod parser;
pub mod writer;

pub use dm_compare::{DmDifference, compare_data_model};
pub use dm_model::DmDocument;
pub use dm_parser::parse_data_model;
pub use dm_writer::{build_data_model, write_data_model};
pub use parser::{XmlParseError, parse_xml};
pub use writer::{XmlWriteError, write_xml};
