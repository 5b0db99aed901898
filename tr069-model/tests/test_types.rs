use pretty_assertions::assert_eq;
use tr069_model::voice::*;
use tr069_model::*;

#[test]
fn test_trunk_defaults() {
    let trunk = Trunk::default();
    assert_eq!(trunk.enable, Some(false));
    assert_eq!(trunk.status.as_deref(), Some("Disabled"));
    assert_eq!(trunk.origin.as_deref(), Some("Static"));
    assert_eq!(trunk.max_outbound_channel_count, Some(-1));
    assert_eq!(trunk.max_inbound_channel_count, Some(-1));
}

#[test]
fn test_fields_without_default_are_unset() {
    let trunk = Trunk::default();
    assert_eq!(trunk.alias, None);
    assert_eq!(trunk.name, None);
    assert_eq!(trunk.max_channels, None);
    assert_eq!(trunk.provider, None);

    let device = ManageableDevice::default();
    assert_eq!(device.manufacturer_oui, None);
    assert_eq!(device.serial_number, None);
    assert_eq!(device.product_class, None);
    assert!(device.hosts.is_empty());
}

#[test]
fn test_defaults_match_schema() {
    let line = Line::default();
    for param in Line::SCHEMA.parameters {
        assert_eq!(
            line.parameter(param.name).filter(|_| !param.list),
            param.default.map(str::to_string),
            "{}",
            param.name
        );
    }
}

#[test]
fn test_tables_start_empty() {
    let control = CallControl::default();
    assert!(control.lines.is_empty());
    assert!(control.extensions.is_empty());
    assert!(control.groups.is_empty());
    assert!(control.numbering_plans.is_empty());
    assert!(control.calling_features.is_none());

    let service = VoiceService::default();
    assert!(service.trunks.is_empty());
    assert!(service.call_logs.is_empty());
}

#[test]
fn test_call_control_scenario() {
    let control = CallControl::default()
        .with_max_number_of_lines(4)
        .with_line(Line::default().with_directory_number("1001"))
        .with_line(Line::default().with_directory_number("1002"));

    assert_eq!(control.lines.len(), 2);
    assert_eq!(control.max_number_of_lines, Some(4));
    assert_eq!(control.lines[1].directory_number.as_deref(), Some("1002"));
}

#[test]
fn test_fluent_adder_appends_at_end() {
    let mut control = CallControl::default().with_line(Line::default().with_alias("first"));
    let before = control.lines.len();
    control = control.with_line(Line::default().with_alias("second"));
    assert_eq!(control.lines.len(), before + 1);
    assert_eq!(
        control.lines.last().and_then(|l| l.alias.clone()),
        Some(Alias::new("second"))
    );
}

#[test]
fn test_assignment_accepts_out_of_range_values() {
    let mut trunk = Trunk::default();
    trunk.max_outbound_channel_count = Some(-42);
    trunk.status = Some("NotAStatus".into());
    assert_eq!(trunk.max_outbound_channel_count, Some(-42));
    assert_eq!(trunk.status.as_deref(), Some("NotAStatus"));

    let device = ManageableDevice::default().with_manufacturer_oui("0123456789ABCDEF");
    assert_eq!(device.manufacturer_oui.as_deref(), Some("0123456789ABCDEF"));
}

#[test]
fn test_fluent_setters_commute_on_independent_fields() {
    let a = Trunk::default().with_name("PSTN").with_max_channels(8);
    let b = Trunk::default().with_max_channels(8).with_name("PSTN");
    assert_eq!(a, b);
}

#[test]
fn test_list_parameter_adder() {
    let group = Group::default()
        .with_extension("InternetGatewayDevice.Services.VoiceService.1.CallControl.Extension.1.")
        .with_extension("InternetGatewayDevice.Services.VoiceService.1.CallControl.Extension.2.");
    assert_eq!(group.extensions.len(), 2);
    assert_eq!(
        group.parameter("Extensions").as_deref(),
        Some(
            "InternetGatewayDevice.Services.VoiceService.1.CallControl.Extension.1.,\
             InternetGatewayDevice.Services.VoiceService.1.CallControl.Extension.2."
        )
    );
}

#[test]
fn test_ip_address_builder_accepts_std_addr() {
    let addr: std::net::IpAddr = "192.0.2.10".parse().unwrap();
    let contact = SipClientContact::default().with_ip_address(addr);
    assert_eq!(
        contact.ip_address.as_ref().and_then(IpAddress::parse),
        Some(addr)
    );
}

#[test]
fn test_schema_paths_and_shapes() {
    assert_eq!(Trunk::SCHEMA.path, "VoiceService.{i}.Trunk.{i}.");
    assert!(Trunk::SCHEMA.multi_instance);
    assert!(!CallControl::SCHEMA.multi_instance);

    let enable = Trunk::SCHEMA.parameter("Enable").unwrap();
    assert_eq!(enable.kind, ParamKind::Boolean);
    assert_eq!(enable.access, Access::ReadWrite);
    assert_eq!(enable.default, Some("false"));

    let lines = CallControl::SCHEMA.child("Line").unwrap();
    assert!(lines.multi_instance);
    assert_eq!(lines.schema.name, "Line");

    let extensions = Group::SCHEMA.parameter("Extensions").unwrap();
    assert!(extensions.list);
    assert_eq!(
        extensions.facets.reference,
        Some("VoiceService.{i}.CallControl.Extension.{i}.")
    );

    let device = ManagementServer::SCHEMA.child("ManageableDevice").unwrap();
    assert_eq!(
        device.schema.path,
        "InternetGatewayDevice.ManagementServer.ManageableDevice.{i}."
    );
    assert_eq!(device.schema.object_name(), "ManageableDevice");
}

#[test]
fn test_generic_parameter_access() {
    let mut trunk = Trunk::default();
    trunk.set_parameter("MaxChannels", "12").unwrap();
    trunk.set_parameter("Enable", "1").unwrap();
    assert_eq!(trunk.max_channels, Some(12));
    assert_eq!(trunk.parameter("Enable").as_deref(), Some("true"));

    let err = trunk.set_parameter("MaxChannels", "twelve").unwrap_err();
    assert_eq!(err.fault_code(), 9007);
    let err = trunk.set_parameter("Bogus", "1").unwrap_err();
    assert_eq!(err.fault_code(), 9005);
}

#[test]
fn test_children_report_positional_instances() {
    let control = CallControl::default()
        .with_calling_features(CallingFeatures::default())
        .with_line(Line::default())
        .with_line(Line::default());
    let children: Vec<(&str, Option<usize>)> = control
        .children()
        .iter()
        .map(|c| (c.name, c.instance))
        .collect();
    assert_eq!(
        children,
        vec![("CallingFeatures", None), ("Line", Some(1)), ("Line", Some(2))]
    );
}

#[test]
fn test_add_and_delete_instance() {
    let mut sip = Sip::default();
    assert_eq!(sip.add_instance("Network"), Some(1));
    assert_eq!(sip.add_instance("Network"), Some(2));
    assert_eq!(sip.add_instance("Nope"), None);
    assert!(sip.delete_instance("Network", 1));
    assert!(!sip.delete_instance("Network", 5));
    assert_eq!(sip.networks.len(), 1);
}

#[test]
fn test_igd_service_accessors() {
    let igd = InternetGatewayDevice::default();
    assert!(igd.voice_services().is_empty());

    let igd = igd.with_services(
        Services::default()
            .with_voice_service(VoiceService::default())
            .with_fap_service(tr069_model::fap::FapService::default()),
    );
    assert_eq!(igd.voice_services().len(), 1);
    assert_eq!(igd.fap_services().len(), 1);
}

#[test]
fn test_clone_is_structurally_equal() {
    let service = VoiceService::default()
        .with_alias("voice")
        .with_trunk(Trunk::default().with_name("PSTN"))
        .with_call_control(CallControl::default().with_line(Line::default()));
    let copy = service.clone();
    assert_eq!(service, copy);
}

/// Instantiate every singleton child and one row of every table, recursively.
fn populate(object: &mut dyn DataObject) {
    for child in object.schema().children {
        if child.multi_instance {
            assert!(object.add_instance(child.name).is_some(), "{}", child.name);
        } else {
            assert!(object.ensure_object(child.name), "{}", child.name);
        }
    }
    for child in object.children_mut() {
        populate(child.object);
    }
}

fn visit(object: &dyn DataObject, path: &str, f: &mut dyn FnMut(&dyn DataObject, &str)) {
    f(object, path);
    for child in object.children() {
        visit(child.object, &child.path(path), f);
    }
}

fn visit_mut(object: &mut dyn DataObject, path: &str, f: &mut dyn FnMut(&mut dyn DataObject, &str)) {
    f(&mut *object, path);
    for child in object.children_mut() {
        let child_path = child.path(path);
        visit_mut(child.object, &child_path, f);
    }
}

fn full_tree() -> InternetGatewayDevice {
    let mut igd = InternetGatewayDevice::default();
    populate(&mut igd);
    igd
}

/// One wire item of the parameter's type that breaks its facets when the
/// facets allow it. The flag says whether the item is out of facet.
fn out_of_facet_item(param: &ParamSchema) -> (String, bool) {
    let facets = &param.facets;
    match param.kind {
        ParamKind::String if !facets.values.is_empty() => ("NotListed".to_string(), true),
        ParamKind::String => match facets.max_length {
            Some(max) => ("x".repeat(max + 1), true),
            None => ("free text".to_string(), false),
        },
        ParamKind::Alias => ("1st-row".to_string(), true),
        ParamKind::IpAddress => ("300.1.2.3".to_string(), true),
        ParamKind::Boolean => ("true".to_string(), false),
        ParamKind::DateTime => ("1999-12-31T23:59:59Z".to_string(), false),
        ParamKind::HexBinary => match facets.max_length {
            Some(max) => ("ab".repeat(max + 1), true),
            None => ("00ff".to_string(), false),
        },
        kind => {
            let (lo, hi) = kind.natural_range().unwrap();
            if let Some(min) = facets.min.map(i128::from).filter(|m| m - 1 >= lo) {
                ((min - 1).to_string(), true)
            } else if let Some(max) = facets.max.map(i128::from).filter(|m| m + 1 <= hi) {
                ((max + 1).to_string(), true)
            } else {
                (hi.to_string(), false)
            }
        }
    }
}

fn out_of_facet_value(param: &ParamSchema) -> (String, bool) {
    let (item, violates) = out_of_facet_item(param);
    if !param.list {
        return (item, violates);
    }
    match param.facets.list_max_length {
        Some(max) => {
            let count = max / (item.len() + 1) + 2;
            (vec![item; count].join(","), true)
        }
        None => (format!("{item},{item}"), violates),
    }
}

#[test]
fn test_populated_tree_has_every_object() {
    let igd = full_tree();
    let mut templates = 0;
    schema::walk_objects(InternetGatewayDevice::SCHEMA, InternetGatewayDevice::ROOT_PATH, &mut |_, _| {
        templates += 1;
    });
    let mut objects = 0;
    visit(&igd, InternetGatewayDevice::ROOT_PATH, &mut |_, _| objects += 1);
    assert_eq!(objects, templates);
}

#[test]
fn test_every_entity_default_matches_schema() {
    let igd = full_tree();
    let mut checked = 0;
    visit(&igd, InternetGatewayDevice::ROOT_PATH, &mut |object, path| {
        for param in object.schema().parameters {
            let expected = if param.list {
                Some(String::new())
            } else {
                param.default.map(str::to_string)
            };
            assert_eq!(object.parameter(param.name), expected, "{path}{}", param.name);
            checked += 1;
        }
    });
    assert_eq!(
        checked,
        schema::parameter_paths(InternetGatewayDevice::SCHEMA, InternetGatewayDevice::ROOT_PATH).len()
    );
}

#[test]
fn test_every_parameter_reads_back_out_of_facet_values() {
    let mut igd = full_tree();
    let mut violating = 0;
    visit_mut(&mut igd, InternetGatewayDevice::ROOT_PATH, &mut |object, path| {
        for param in object.schema().parameters {
            let (value, violates) = out_of_facet_value(param);
            if violates {
                assert!(param.check(&value).is_err(), "{path}{} accepts {value}", param.name);
                violating += 1;
            }
            object.set_parameter(param.name, &value).unwrap();
            assert_eq!(
                object.parameter(param.name).as_deref(),
                Some(value.as_str()),
                "{path}{}",
                param.name
            );
        }
    });
    assert!(violating > 0);

    // The stored out-of-facet values are exactly what the tree validator flags.
    let errors = validate_tree(&igd, InternetGatewayDevice::ROOT_PATH).unwrap_err();
    assert_eq!(errors.len(), violating);
}

#[test]
fn test_every_entity_is_described() {
    let trunk = schema::description_text(Trunk::SCHEMA.description);
    assert!(trunk.starts_with("A trunk: a group of channels"));
    assert_eq!(
        schema::description_text(Trunk::SCHEMA.parameter("Enable").unwrap().description),
        "Enables or disables this trunk."
    );

    let root = InternetGatewayDevice::ROOT_PATH;
    schema::walk_objects(InternetGatewayDevice::SCHEMA, root, &mut |path, object| {
        assert!(!object.description.trim().is_empty(), "{path} has no description");
    });
    schema::walk_parameters(InternetGatewayDevice::SCHEMA, root, &mut |entry| {
        assert!(!entry.param.description.trim().is_empty(), "{} has no description", entry.path);
    });
}
