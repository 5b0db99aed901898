//! Data-model definition parser: BBF `cwmp-datamodel` XML -> [`DmDocument`].

use crate::dm_model::DmDocument;
use crate::parser::XmlParseError;

/// Parse a BBF data-model document.
///
/// Only models, objects, parameters and their syntax are read. Every object
/// must have a path ending in `.`, and every access attribute present must be
/// one of the BBF access names.
pub fn parse_data_model(xml: &str) -> Result<DmDocument, XmlParseError> {
    let document: DmDocument = quick_xml::de::from_str(xml)?;

    if document.models.is_empty() {
        return Err(XmlParseError::InvalidDocument("no <model> element".into()));
    }

    for model in &document.models {
        for object in &model.objects {
            let path = object.path();
            if !path.ends_with('.') {
                return Err(XmlParseError::InvalidDocument(format!(
                    "object '{}' in model '{}' does not end in '.'",
                    path, model.name
                )));
            }
            for param in &object.parameters {
                if !param.access.is_empty() && param.access().is_none() {
                    return Err(XmlParseError::InvalidDocument(format!(
                        "{}{}: unknown access '{}'",
                        path,
                        param.parameter_name(),
                        param.access
                    )));
                }
            }
        }
        log::debug!(
            "model '{}': {} objects, {} parameters",
            model.name,
            model.objects.len(),
            model.objects.iter().map(|o| o.parameters.len()).sum::<usize>()
        );
    }

    Ok(document)
}
