//! Instance document writer: entity tree -> XML string.
//!
//! Element names are the wire names from the data model. Table rows become
//! repeated elements in instance order, list parameters are written as
//! comma-delimited text and unset parameters are left out.

use serde::Serialize;
use thiserror::Error;
use tr069_model::DataObject;

#[derive(Debug, Error)]
pub enum XmlWriteError {
    #[error("XML serialization failed: {0}")]
    SerError(String),
}

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Write an entity (and everything below it) as an XML document whose root
/// element is the entity's object name.
pub fn write_xml<T>(object: &T) -> Result<String, XmlWriteError>
where
    T: Serialize + DataObject,
{
    let root = object.schema().object_name();
    log::debug!("writing {} as XML", object.schema().path);
    to_document(object, root)
}

/// Serialize any serde value under `root`, indented, with the XML
/// declaration prepended.
pub(crate) fn to_document<T: Serialize + ?Sized>(
    value: &T,
    root: &str,
) -> Result<String, XmlWriteError> {
    let mut body = String::new();
    let mut ser = quick_xml::se::Serializer::with_root(&mut body, Some(root))
        .map_err(|e| XmlWriteError::SerError(e.to_string()))?;
    ser.indent(' ', 2);
    value
        .serialize(ser)
        .map_err(|e| XmlWriteError::SerError(e.to_string()))?;

    Ok(format!("{XML_DECLARATION}{body}\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tr069_model::voice::Trunk;

    #[test]
    fn test_root_element_is_object_name() {
        let xml = write_xml(&Trunk::default().with_name("PSTN")).unwrap();
        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains("<Trunk>"));
        assert!(xml.contains("<Name>PSTN</Name>"));
        assert!(xml.trim_end().ends_with("</Trunk>"));
    }

    #[test]
    fn test_unset_parameters_are_omitted() {
        let xml = write_xml(&Trunk::default()).unwrap();
        assert!(!xml.contains("<Name>"));
        assert!(xml.contains("<Enable>false</Enable>"));
    }
}
