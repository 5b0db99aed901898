//! Instance document parser: XML string -> entity tree.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XmlParseError {
    #[error("XML deserialization failed: {0}")]
    XmlError(#[from] quick_xml::DeError),
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// Parse an XML instance document into an entity.
///
/// The root element name is not checked. Unknown elements are skipped and
/// elements missing from the document take the entity's `Default` value.
/// Rows of one table must be contiguous.
pub fn parse_xml<T: DeserializeOwned>(xml: &str) -> Result<T, XmlParseError> {
    if xml.trim().is_empty() {
        return Err(XmlParseError::InvalidDocument("empty input".into()));
    }
    Ok(quick_xml::de::from_str(xml)?)
}
