use pretty_assertions::assert_eq;
use tr069_model::paths::{get_parameter_value, object_exists};
use tr069_model::voice::*;
use tr069_model::*;

const ROOT: &str = InternetGatewayDevice::ROOT_PATH;

fn sample() -> InternetGatewayDevice {
    InternetGatewayDevice::default()
        .with_device_info(
            DeviceInfo::default()
                .with_manufacturer("Acme")
                .with_serial_number("SN-0001"),
        )
        .with_services(
            Services::default().with_voice_service(
                VoiceService::default()
                    .with_alias("voice")
                    .with_trunk(Trunk::default().with_name("PSTN").with_max_channels(8))
                    .with_call_control(
                        CallControl::default()
                            .with_max_number_of_lines(4)
                            .with_line(Line::default().with_directory_number("1001"))
                            .with_line(Line::default().with_directory_number("1002")),
                    ),
            ),
        )
}

#[test]
fn test_parameter_values_use_full_paths() {
    let igd = sample();
    let values = parameter_values(&igd, ROOT);
    let find = |name: &str| {
        values
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value.as_str())
    };
    assert_eq!(find("InternetGatewayDevice.DeviceInfo.Manufacturer"), Some("Acme"));
    assert_eq!(
        find("InternetGatewayDevice.Services.VoiceService.1.CallControl.Line.2.DirectoryNumber"),
        Some("1002")
    );
    assert_eq!(
        find("InternetGatewayDevice.Services.VoiceService.1.Trunk.1.MaxOutboundChannelCount"),
        Some("-1")
    );
    // Unset parameters are left out.
    assert_eq!(find("InternetGatewayDevice.DeviceInfo.ModelName"), None);
}

#[test]
fn test_get_parameter_values_partial_path() {
    let igd = sample();
    let values = get_parameter_values(
        &igd,
        ROOT,
        &["InternetGatewayDevice.Services.VoiceService.1.CallControl.Line."],
    )
    .unwrap();
    assert!(!values.is_empty());
    assert!(values.iter().all(|v| {
        v.name
            .starts_with("InternetGatewayDevice.Services.VoiceService.1.CallControl.Line.")
    }));
    assert!(values.iter().any(|v| v.name.ends_with("Line.1.DirectoryNumber")));
    assert!(values.iter().any(|v| v.name.ends_with("Line.2.DirectoryNumber")));
}

#[test]
fn test_get_parameter_values_unset_parameter_is_empty() {
    let igd = sample();
    let values =
        get_parameter_values(&igd, ROOT, &["InternetGatewayDevice.DeviceInfo.ModelName"]).unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].value, "");
    assert_eq!(values[0].kind.xsd_type(), "xsd:string");
}

#[test]
fn test_get_parameter_values_unknown_name() {
    let igd = sample();
    let err = get_parameter_values(&igd, ROOT, &["InternetGatewayDevice.DeviceInfo.Bogus"])
        .unwrap_err();
    assert_eq!(err.fault_code(), 9005);
}

#[test]
fn test_set_parameter_value_creates_singletons() {
    let mut igd = InternetGatewayDevice::default();
    set_parameter_value(
        &mut igd,
        ROOT,
        "InternetGatewayDevice.ManagementServer.PeriodicInformInterval",
        "300",
    )
    .unwrap();
    assert_eq!(
        igd.management_server
            .as_ref()
            .and_then(|m| m.periodic_inform_interval),
        Some(300)
    );
}

#[test]
fn test_set_parameter_value_rejects_read_only() {
    let mut igd = sample();
    let err = set_parameter_value(
        &mut igd,
        ROOT,
        "InternetGatewayDevice.DeviceInfo.Manufacturer",
        "Other",
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::NotWritable(_)));
    assert_eq!(err.fault_code(), 9008);
}

#[test]
fn test_set_parameter_value_rejects_bad_values() {
    let mut igd = sample();
    let path = "InternetGatewayDevice.Services.VoiceService.1.Trunk.1.MaxOutboundChannelCount";
    let err = set_parameter_value(&mut igd, ROOT, path, "-5").unwrap_err();
    assert_eq!(err.fault_code(), 9007);
    let err = set_parameter_value(&mut igd, ROOT, path, "many").unwrap_err();
    assert_eq!(err.fault_code(), 9007);

    set_parameter_value(&mut igd, ROOT, path, "3").unwrap();
    assert_eq!(get_parameter_value(&igd, ROOT, path).unwrap().as_deref(), Some("3"));
}

#[test]
fn test_set_parameter_value_missing_row() {
    let mut igd = sample();
    let err = set_parameter_value(
        &mut igd,
        ROOT,
        "InternetGatewayDevice.Services.VoiceService.1.Trunk.7.Enable",
        "true",
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::UnknownObject(_)));
}

#[test]
fn test_set_parameter_values_is_atomic() {
    let mut igd = sample();
    let before = igd.clone();
    let errors = set_parameter_values(
        &mut igd,
        ROOT,
        &[
            ("InternetGatewayDevice.Services.VoiceService.1.Trunk.1.Enable", "true"),
            ("InternetGatewayDevice.DeviceInfo.SerialNumber", "SN-0002"),
        ],
    )
    .unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(igd, before);

    set_parameter_values(
        &mut igd,
        ROOT,
        &[
            ("InternetGatewayDevice.Services.VoiceService.1.Trunk.1.Enable", "true"),
            ("InternetGatewayDevice.DeviceInfo.ProvisioningCode", "ABC"),
        ],
    )
    .unwrap();
    assert_eq!(igd.voice_services()[0].trunks[0].enable, Some(true));
}

#[test]
fn test_add_object_assigns_instance_and_alias() {
    let mut igd = sample();
    let table = "InternetGatewayDevice.Services.VoiceService.1.Trunk.";
    assert_eq!(add_object(&mut igd, ROOT, table).unwrap(), 2);

    let service = &igd.voice_services()[0];
    assert_eq!(service.trunks.len(), 2);
    assert_eq!(service.trunks[1].alias, Some(Alias::cpe_assigned(2)));
    assert_eq!(service.trunks[1].status.as_deref(), Some("Disabled"));
    assert_eq!(service.trunk_number_of_entries, Some(2));
}

#[test]
fn test_add_object_after_delete_keeps_aliases_unique() {
    let mut igd = sample();
    let table = "InternetGatewayDevice.Services.VoiceService.1.Trunk.";
    add_object(&mut igd, ROOT, table).unwrap();
    add_object(&mut igd, ROOT, table).unwrap();
    delete_object(
        &mut igd,
        ROOT,
        "InternetGatewayDevice.Services.VoiceService.1.Trunk.1.",
    )
    .unwrap();
    assert_eq!(add_object(&mut igd, ROOT, table).unwrap(), 3);

    let aliases: Vec<Option<Alias>> = igd.voice_services()[0]
        .trunks
        .iter()
        .map(|t| t.alias.clone())
        .collect();
    assert_eq!(
        aliases,
        vec![
            Some(Alias::cpe_assigned(2)),
            Some(Alias::cpe_assigned(3)),
            Some(Alias::cpe_assigned(1)),
        ]
    );

    let errors: Vec<SemanticIssue> = validate_semantics(&igd)
        .into_iter()
        .filter(|i| i.severity == Severity::Error)
        .collect();
    assert!(errors.is_empty(), "{errors:?}");
}

#[test]
fn test_get_parameter_values_row_without_trailing_dot() {
    let igd = sample();
    let err = get_parameter_values(
        &igd,
        ROOT,
        &["InternetGatewayDevice.Services.VoiceService.1"],
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::UnknownParameter(_)));
    assert_eq!(err.fault_code(), 9005);
}

#[test]
fn test_add_object_rejects_non_tables() {
    let mut igd = sample();
    let err = add_object(
        &mut igd,
        ROOT,
        "InternetGatewayDevice.Services.VoiceService.1.CallControl.",
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::NotATable(_)));
}

#[test]
fn test_delete_object_renumbers() {
    let mut igd = sample();
    delete_object(
        &mut igd,
        ROOT,
        "InternetGatewayDevice.Services.VoiceService.1.CallControl.Line.1.",
    )
    .unwrap();

    let control = igd.voice_services()[0].call_control.as_ref().unwrap();
    assert_eq!(control.lines.len(), 1);
    assert_eq!(control.line_number_of_entries, Some(1));
    assert_eq!(
        get_parameter_value(
            &igd,
            ROOT,
            "InternetGatewayDevice.Services.VoiceService.1.CallControl.Line.1.DirectoryNumber"
        )
        .unwrap()
        .as_deref(),
        Some("1002")
    );
    assert!(!object_exists(
        &igd,
        ROOT,
        "InternetGatewayDevice.Services.VoiceService.1.CallControl.Line.2."
    ));
}

#[test]
fn test_delete_object_missing_row() {
    let mut igd = sample();
    let err = delete_object(
        &mut igd,
        ROOT,
        "InternetGatewayDevice.Services.VoiceService.1.Trunk.9.",
    )
    .unwrap_err();
    assert_eq!(err.fault_code(), 9005);
}

#[test]
fn test_refresh_entry_counts() {
    let mut igd = sample();
    refresh_entry_counts(&mut igd);

    let services = igd.services.as_ref().unwrap();
    assert_eq!(services.voice_service_number_of_entries, Some(1));
    assert_eq!(services.fap_service_number_of_entries, Some(0));
    let service = &services.voice_services[0];
    assert_eq!(service.trunk_number_of_entries, Some(1));
    assert_eq!(service.call_log_number_of_entries, Some(0));
    assert_eq!(
        service.call_control.as_ref().unwrap().line_number_of_entries,
        Some(2)
    );
}
