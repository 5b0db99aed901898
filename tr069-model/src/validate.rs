use thiserror::Error;

use crate::object::DataObject;
use crate::schema::ConstraintViolation;

/// A parameter whose value breaks its documented constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {violation}")]
pub struct ValidationError {
    /// Full parameter path with instance numbers.
    pub path: String,
    pub violation: ConstraintViolation,
}

/// Check every set parameter in the tree against its facets.
///
/// Assignment never validates; this is the opt-in check.
pub fn validate_tree(root: &dyn DataObject, root_path: &str) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    validate_object(root, root_path, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        log::debug!("{} constraint violations below '{}'", errors.len(), root_path);
        Err(errors)
    }
}

fn validate_object(object: &dyn DataObject, path: &str, errors: &mut Vec<ValidationError>) {
    for param in object.schema().parameters {
        let Some(value) = object.parameter(param.name) else {
            continue;
        };
        if let Err(violation) = param.check(&value) {
            errors.push(ValidationError {
                path: format!("{path}{}", param.name),
                violation,
            });
        }
    }
    for child in object.children() {
        validate_object(child.object, &child.path(path), errors);
    }
}
