//! Cross-object checks that no single parameter facet can express.

use std::collections::BTreeMap;

use crate::igd::InternetGatewayDevice;
use crate::object::DataObject;
use crate::paths::object_exists;

/// Severity of a semantic validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A semantic validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticIssue {
    pub severity: Severity,
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for SemanticIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        if self.path.is_empty() {
            write!(f, "{prefix}: {}", self.message)
        } else {
            write!(f, "{prefix}: {}: {}", self.path, self.message)
        }
    }
}

/// Run all semantic validations on a gateway tree.
///
/// Returns a list of issues (errors and warnings). Empty means valid.
pub fn validate_semantics(root: &InternetGatewayDevice) -> Vec<SemanticIssue> {
    let mut issues = Vec::new();

    walk(root, InternetGatewayDevice::ROOT_PATH, &mut |object, path| {
        check_entry_counts(object, path, &mut issues);
        check_alias_uniqueness(object, path, &mut issues);
        check_references(root, object, path, &mut issues);
    });
    check_trunk_channels(root, &mut issues);
    check_sip_network_ports(root, &mut issues);

    issues
}

fn walk(object: &dyn DataObject, path: &str, visit: &mut dyn FnMut(&dyn DataObject, &str)) {
    visit(object, path);
    for child in object.children() {
        walk(child.object, &child.path(path), visit);
    }
}

/// `XNumberOfEntries` must match the number of `X` rows.
fn check_entry_counts(object: &dyn DataObject, path: &str, issues: &mut Vec<SemanticIssue>) {
    let children = object.children();
    for table in object.schema().children.iter().filter(|c| c.multi_instance) {
        let count_name = format!("{}NumberOfEntries", table.name);
        let Some(declared) = object.parameter(&count_name) else {
            continue;
        };
        let actual = children.iter().filter(|c| c.name == table.name).count();
        if declared.parse::<usize>().ok() != Some(actual) {
            issues.push(SemanticIssue {
                severity: Severity::Warning,
                path: format!("{path}{count_name}"),
                message: format!("is {declared} but the table has {actual} rows"),
            });
        }
    }
}

/// No two rows of one table may share an alias.
fn check_alias_uniqueness(object: &dyn DataObject, path: &str, issues: &mut Vec<SemanticIssue>) {
    let mut seen: BTreeMap<(&str, String), String> = BTreeMap::new();
    for row in object.children().into_iter().filter(|c| c.instance.is_some()) {
        let Some(alias) = row.object.parameter("Alias").filter(|a| !a.is_empty()) else {
            continue;
        };
        let row_path = row.path(path);
        if let Some(prev) = seen.get(&(row.name, alias.clone())) {
            issues.push(SemanticIssue {
                severity: Severity::Error,
                path: row_path,
                message: format!("duplicate alias '{alias}' (already used by {prev})"),
            });
        } else {
            seen.insert((row.name, alias), row_path);
        }
    }
}

/// Replace instance numbers with `{i}` so a concrete path can be compared
/// with a path template.
fn path_template(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_end_matches('.')
        .split('.')
        .map(|s| {
            if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                "{i}"
            } else {
                s
            }
        })
        .collect();
    format!("{}.", segments.join("."))
}

/// Non-empty path references must name an existing object of the right type.
fn check_references(
    root: &InternetGatewayDevice,
    object: &dyn DataObject,
    path: &str,
    issues: &mut Vec<SemanticIssue>,
) {
    for param in object.schema().parameters {
        let Some(target) = param.facets.reference else {
            continue;
        };
        let Some(value) = object.parameter(param.name) else {
            continue;
        };
        let items: Vec<&str> = if param.list {
            value.split(',').map(str::trim).collect()
        } else {
            vec![value.trim()]
        };
        for item in items.into_iter().filter(|i| !i.is_empty()) {
            let reference = if item.ends_with('.') {
                item.to_string()
            } else {
                format!("{item}.")
            };
            let message = if !path_template(&reference).ends_with(target) {
                format!("'{item}' is not a reference to {target}")
            } else if !object_exists(root, InternetGatewayDevice::ROOT_PATH, &reference) {
                format!("'{item}' refers to an object that does not exist")
            } else {
                continue;
            };
            issues.push(SemanticIssue {
                severity: Severity::Error,
                path: format!("{path}{}", param.name),
                message,
            });
        }
    }
}

/// The outbound and inbound channel limits of a trunk must fit within its
/// channel count, unless either is unlimited.
fn check_trunk_channels(root: &InternetGatewayDevice, issues: &mut Vec<SemanticIssue>) {
    for (vi, service) in root.voice_services().iter().enumerate() {
        for (ti, trunk) in service.trunks.iter().enumerate() {
            let (Some(max), Some(outbound), Some(inbound)) = (
                trunk.max_channels,
                trunk.max_outbound_channel_count,
                trunk.max_inbound_channel_count,
            ) else {
                continue;
            };
            if outbound < 0 || inbound < 0 {
                continue;
            }
            let requested = i64::from(outbound) + i64::from(inbound);
            if requested > i64::from(max) {
                issues.push(SemanticIssue {
                    severity: Severity::Error,
                    path: format!(
                        "{}Services.VoiceService.{}.Trunk.{}.",
                        InternetGatewayDevice::ROOT_PATH,
                        vi + 1,
                        ti + 1
                    ),
                    message: format!(
                        "MaxOutboundChannelCount + MaxInboundChannelCount = {requested} exceeds MaxChannels {max}"
                    ),
                });
            }
        }
    }
}

/// A configured server with port 0 is almost certainly a mistake.
fn check_sip_network_ports(root: &InternetGatewayDevice, issues: &mut Vec<SemanticIssue>) {
    for (vi, service) in root.voice_services().iter().enumerate() {
        let Some(sip) = &service.sip else {
            continue;
        };
        for (ni, network) in sip.networks.iter().enumerate() {
            let checks = [
                ("ProxyServer", &network.proxy_server, network.proxy_server_port),
                ("RegistrarServer", &network.registrar_server, network.registrar_server_port),
            ];
            for (name, server, port) in checks {
                let has_server = server.as_deref().is_some_and(|s| !s.is_empty());
                if has_server && port == Some(0) {
                    issues.push(SemanticIssue {
                        severity: Severity::Warning,
                        path: format!(
                            "{}Services.VoiceService.{}.SIP.Network.{}.{name}Port",
                            InternetGatewayDevice::ROOT_PATH,
                            vi + 1,
                            ni + 1
                        ),
                        message: format!("port is 0 while {name} is set"),
                    });
                }
            }
        }
    }
}
