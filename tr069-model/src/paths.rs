//! CWMP-style access to a populated tree through full parameter paths.
//!
//! Paths are absolute (`InternetGatewayDevice.Services.VoiceService.1.Trunk.2.Enable`)
//! and are interpreted relative to a root object and its path prefix.
//! Object paths end in `.`; a table path without an instance number
//! (`...VoiceService.1.Trunk.`) names the table itself.
//!
//! Unlike the entity layer, writes through this module behave like a CPE
//! answering `SetParameterValues`: the path is checked against the schema,
//! read-only parameters are refused and values must satisfy their facets.

use crate::object::{DataObject, ModelError};
use crate::schema::{ObjectSchema, ParamKind, ParamSchema};
use crate::value::Alias;

/// One entry of a GetParameterValues response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterValue {
    pub name: String,
    pub value: String,
    pub kind: ParamKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step<'p> {
    Object(&'p str),
    Row(&'p str, usize),
}

impl Step<'_> {
    fn matches(self, name: &str, instance: Option<usize>) -> bool {
        match self {
            Self::Object(object) => object == name && instance.is_none(),
            Self::Row(table, n) => table == name && instance == Some(n),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Target {
    Object,
    Table(&'static str),
    Parameter(&'static ParamSchema),
}

#[derive(Debug)]
struct ParsedPath<'p> {
    steps: Vec<Step<'p>>,
    target: Target,
}

/// Resolve `path` against the static schema below `root`.
fn parse_path<'p>(
    root: &'static ObjectSchema,
    root_path: &str,
    path: &'p str,
) -> Result<ParsedPath<'p>, ModelError> {
    let unknown_object = || ModelError::UnknownObject(path.to_string());
    let rest = if path.is_empty() || path == root_path {
        ""
    } else {
        path.strip_prefix(root_path).ok_or_else(unknown_object)?
    };
    if rest.is_empty() {
        return Ok(ParsedPath {
            steps: Vec::new(),
            target: Target::Object,
        });
    }

    let (body, is_object) = match rest.strip_suffix('.') {
        Some(body) => (body, true),
        None => (rest, false),
    };
    let segments: Vec<&str> = body.split('.').collect();

    let mut schema = root;
    let mut steps = Vec::new();
    let mut i = 0;
    while i < segments.len() {
        let segment = segments[i];
        let last = i + 1 == segments.len();
        if last && !is_object {
            let param = schema
                .parameter(segment)
                .ok_or_else(|| ModelError::UnknownParameter(path.to_string()))?;
            return Ok(ParsedPath {
                steps,
                target: Target::Parameter(param),
            });
        }

        let child = schema.child(segment).ok_or_else(unknown_object)?;
        if child.multi_instance {
            if last {
                return Ok(ParsedPath {
                    steps,
                    target: Target::Table(child.name),
                });
            }
            let instance = segments[i + 1]
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(unknown_object)?;
            steps.push(Step::Row(child.name, instance));
            i += 2;
        } else {
            steps.push(Step::Object(child.name));
            i += 1;
        }
        schema = child.schema;
    }

    // `...VoiceService.1` without the trailing dot is neither an object
    // path nor a parameter.
    if !is_object {
        return Err(ModelError::UnknownParameter(path.to_string()));
    }
    Ok(ParsedPath {
        steps,
        target: Target::Object,
    })
}

fn find_child<'a>(object: &'a dyn DataObject, step: Step<'_>) -> Option<&'a dyn DataObject> {
    object
        .children()
        .into_iter()
        .find(|c| step.matches(c.name, c.instance))
        .map(|c| c.object)
}

fn resolve<'a>(
    root: &'a dyn DataObject,
    steps: &[Step<'_>],
    path: &str,
) -> Result<&'a dyn DataObject, ModelError> {
    let mut current = root;
    for step in steps {
        current =
            find_child(current, *step).ok_or_else(|| ModelError::UnknownObject(path.to_string()))?;
    }
    Ok(current)
}

/// Walk to the object named by `steps`, creating absent singletons.
fn resolve_mut<'a>(
    root: &'a mut dyn DataObject,
    steps: &[Step<'_>],
    path: &str,
) -> Result<&'a mut dyn DataObject, ModelError> {
    let mut current = root;
    for step in steps {
        if let Step::Object(name) = step {
            current.ensure_object(name);
        }
        current = current
            .children_mut()
            .into_iter()
            .find(|c| step.matches(c.name, c.instance))
            .map(|c| c.object)
            .ok_or_else(|| ModelError::UnknownObject(path.to_string()))?;
    }
    Ok(current)
}

/// Check that `steps` can be followed once absent singletons are created:
/// every table row on the way must already exist.
fn check_reachable(root: &dyn DataObject, steps: &[Step<'_>], path: &str) -> Result<(), ModelError> {
    let mut current = Some(root);
    for step in steps {
        current = current.and_then(|object| find_child(object, *step));
        if current.is_none() && matches!(step, Step::Row(..)) {
            return Err(ModelError::UnknownObject(path.to_string()));
        }
    }
    Ok(())
}

fn collect_values(object: &dyn DataObject, prefix: &str, out: &mut Vec<ParameterValue>) {
    for param in object.schema().parameters {
        let Some(value) = object.parameter(param.name) else {
            continue;
        };
        if param.list && value.is_empty() {
            continue;
        }
        out.push(ParameterValue {
            name: format!("{prefix}{}", param.name),
            value,
            kind: param.kind,
        });
    }
    for child in object.children() {
        collect_values(child.object, &child.path(prefix), out);
    }
}

/// Flatten the tree into full parameter paths with their wire values.
///
/// Unset parameters and empty lists are left out.
pub fn parameter_values(root: &dyn DataObject, root_path: &str) -> Vec<ParameterValue> {
    let mut out = Vec::new();
    collect_values(root, root_path, &mut out);
    log::debug!("collected {} parameter values below '{}'", out.len(), root_path);
    out
}

/// Answer a GetParameterValues request.
///
/// Each name is a full parameter path or a partial path ending in `.`,
/// which selects the whole subtree. The empty name selects everything.
/// A named parameter that is unset is reported with an empty value.
pub fn get_parameter_values(
    root: &dyn DataObject,
    root_path: &str,
    names: &[&str],
) -> Result<Vec<ParameterValue>, ModelError> {
    let mut out = Vec::new();
    for name in names {
        let parsed = parse_path(root.schema(), root_path, name)?;
        let object = resolve(root, &parsed.steps, name)?;
        let prefix = if name.is_empty() { root_path } else { *name };
        match parsed.target {
            Target::Object => collect_values(object, prefix, &mut out),
            Target::Table(table) => {
                let parent = prefix.strip_suffix(&format!("{table}.")).unwrap_or(prefix);
                for row in object.children().into_iter().filter(|c| c.name == table) {
                    collect_values(row.object, &row.path(parent), &mut out);
                }
            }
            Target::Parameter(param) => out.push(ParameterValue {
                name: (*name).to_string(),
                value: object.parameter(param.name).unwrap_or_default(),
                kind: param.kind,
            }),
        }
    }
    Ok(out)
}

/// Read a single parameter. `None` when unset.
pub fn get_parameter_value(
    root: &dyn DataObject,
    root_path: &str,
    path: &str,
) -> Result<Option<String>, ModelError> {
    let parsed = parse_path(root.schema(), root_path, path)?;
    let Target::Parameter(param) = parsed.target else {
        return Err(ModelError::UnknownParameter(path.to_string()));
    };
    let object = resolve(root, &parsed.steps, path)?;
    Ok(object.parameter(param.name))
}

/// Everything that can fail for one write, checked without touching the tree.
fn prepare_set<'p>(
    root: &dyn DataObject,
    root_path: &str,
    path: &'p str,
    value: &str,
) -> Result<(Vec<Step<'p>>, &'static ParamSchema), ModelError> {
    let parsed = parse_path(root.schema(), root_path, path)?;
    let Target::Parameter(param) = parsed.target else {
        return Err(ModelError::UnknownParameter(path.to_string()));
    };
    if !param.access.is_writable() {
        return Err(ModelError::NotWritable(path.to_string()));
    }
    param.check(value).map_err(|source| ModelError::Constraint {
        name: path.to_string(),
        source,
    })?;
    check_reachable(root, &parsed.steps, path)?;
    Ok((parsed.steps, param))
}

/// Write one parameter the way a CPE handles SetParameterValues.
///
/// Absent singleton objects on the way are created. Table rows must exist.
pub fn set_parameter_value(
    root: &mut dyn DataObject,
    root_path: &str,
    path: &str,
    value: &str,
) -> Result<(), ModelError> {
    let (steps, param) = prepare_set(root, root_path, path, value)?;
    let object = resolve_mut(root, &steps, path)?;
    object.set_parameter(param.name, value)
}

/// Write several parameters atomically: either every value is applied or,
/// when any of them fails, none is and all failures are returned.
pub fn set_parameter_values(
    root: &mut dyn DataObject,
    root_path: &str,
    values: &[(&str, &str)],
) -> Result<(), Vec<ModelError>> {
    let mut prepared = Vec::with_capacity(values.len());
    let mut errors = Vec::new();
    for (path, value) in values {
        match prepare_set(root, root_path, path, value) {
            Ok((steps, param)) => prepared.push((steps, param, *path, *value)),
            Err(e) => errors.push(e),
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    for (steps, param, path, value) in prepared {
        let applied = resolve_mut(root, &steps, path)
            .and_then(|object| object.set_parameter(param.name, value));
        if let Err(e) = applied {
            // Unreachable after a successful prepare; report rather than panic.
            log::warn!("failed to apply checked value for '{}': {}", path, e);
            errors.push(e);
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn update_entry_count(object: &mut dyn DataObject, table: &str) {
    let count_name = format!("{table}NumberOfEntries");
    if object.schema().parameter(&count_name).is_none() {
        return;
    }
    let count = object
        .children()
        .iter()
        .filter(|c| c.name == table)
        .count();
    if let Err(e) = object.set_parameter(&count_name, &count.to_string()) {
        log::warn!("cannot update {}: {}", count_name, e);
    }
}

/// CPE-assigned alias for a new row: `cpe-<instance>` unless a sibling
/// already carries it, otherwise the smallest free `cpe-N`. Instance numbers
/// shift on delete, so the plain instance number can collide.
fn free_cpe_alias(used: &[String], instance: usize) -> Alias {
    let free = |alias: &Alias| !used.iter().any(|u| u == alias.as_str());
    let preferred = Alias::cpe_assigned(instance);
    if free(&preferred) {
        return preferred;
    }
    (1..=used.len() + 1)
        .map(Alias::cpe_assigned)
        .find(free)
        .unwrap_or(preferred)
}

fn row_aliases(parent: &dyn DataObject, table: &str) -> Vec<String> {
    parent
        .children()
        .into_iter()
        .filter(|c| c.name == table)
        .filter_map(|c| c.object.parameter("Alias"))
        .collect()
}

/// Append a row to the table named by `table_path` (ending in `.`).
///
/// Returns the new instance number. The row gets a CPE-assigned alias when
/// the table has an `Alias` parameter, and the parent's entry count is kept
/// in step.
pub fn add_object(
    root: &mut dyn DataObject,
    root_path: &str,
    table_path: &str,
) -> Result<usize, ModelError> {
    let parsed = parse_path(root.schema(), root_path, table_path)?;
    let Target::Table(table) = parsed.target else {
        return Err(ModelError::NotATable(table_path.to_string()));
    };
    check_reachable(root, &parsed.steps, table_path)?;
    let parent = resolve_mut(root, &parsed.steps, table_path)?;
    let used = row_aliases(&*parent, table);
    let instance = parent
        .add_instance(table)
        .ok_or_else(|| ModelError::NotATable(table_path.to_string()))?;

    if let Some(row) = parent
        .children_mut()
        .into_iter()
        .find(|c| c.name == table && c.instance == Some(instance))
    {
        if row.object.schema().parameter("Alias").is_some() {
            let alias = free_cpe_alias(&used, instance);
            row.object.set_parameter("Alias", alias.as_str())?;
        }
    }
    update_entry_count(parent, table);
    log::debug!("added {}{}.", table_path, instance);
    Ok(instance)
}

/// Delete the table row named by `object_path` (`...Trunk.2.`).
///
/// Rows after it are renumbered, since instance numbers are positional.
pub fn delete_object(
    root: &mut dyn DataObject,
    root_path: &str,
    object_path: &str,
) -> Result<(), ModelError> {
    let mut parsed = parse_path(root.schema(), root_path, object_path)?;
    let (Target::Object, Some(Step::Row(table, instance))) =
        (parsed.target, parsed.steps.pop())
    else {
        return Err(ModelError::NotATable(object_path.to_string()));
    };
    let parent = resolve_mut(root, &parsed.steps, object_path)?;
    if !parent.delete_instance(table, instance) {
        return Err(ModelError::UnknownObject(object_path.to_string()));
    }
    update_entry_count(parent, table);
    log::debug!("deleted {}", object_path);
    Ok(())
}

/// True when `path` names an object or parameter present in the tree.
pub fn object_exists(root: &dyn DataObject, root_path: &str, path: &str) -> bool {
    parse_path(root.schema(), root_path, path)
        .and_then(|parsed| resolve(root, &parsed.steps, path))
        .is_ok()
}

/// Set every `<Table>NumberOfEntries` parameter to the length of `<Table>`,
/// throughout the tree.
pub fn refresh_entry_counts(root: &mut dyn DataObject) {
    let tables: Vec<&'static str> = root
        .schema()
        .children
        .iter()
        .filter(|c| c.multi_instance)
        .map(|c| c.name)
        .collect();
    for table in tables {
        update_entry_count(root, table);
    }
    for child in root.children_mut() {
        refresh_entry_counts(child.object);
    }
}
