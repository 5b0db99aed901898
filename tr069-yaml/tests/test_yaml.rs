use pretty_assertions::assert_eq;
use tr069_model::voice::*;
use tr069_model::*;
use tr069_yaml::{parse_yaml, write_yaml};

const GATEWAY: &str = include_str!("../../test-fixtures/yaml/gateway.yaml");

#[test]
fn test_parse_gateway_fixture() {
    let igd: InternetGatewayDevice = parse_yaml(GATEWAY).unwrap();

    let info = igd.device_info.as_ref().unwrap();
    assert_eq!(info.spec_version.as_deref(), Some("1.0"));
    assert_eq!(info.vendor_config_files[0].version.as_deref(), Some("7"));

    let service = &igd.voice_services()[0];
    assert_eq!(service.trunks[0].max_outbound_channel_count, Some(4));
    let lines = &service.call_control.as_ref().unwrap().lines;
    assert_eq!(lines[0].directory_number.as_deref(), Some("+4930555012"));
    assert_eq!(
        service.codec_profiles[1].packetization_period,
        vec!["10-30".to_string()]
    );
    assert_eq!(
        service.call_logs[0].sessions[0].session_id.as_ref().map(|h| h.0.len()),
        Some(6)
    );
}

#[test]
fn test_gateway_fixture_is_valid() {
    let igd: InternetGatewayDevice = parse_yaml(GATEWAY).unwrap();
    assert!(validate_tree(&igd, InternetGatewayDevice::ROOT_PATH).is_ok());
    assert!(validate_semantics(&igd).is_empty());
}

#[test]
fn test_round_trip() {
    let igd: InternetGatewayDevice = parse_yaml(GATEWAY).unwrap();
    let yaml = write_yaml(&igd).unwrap();
    let back: InternetGatewayDevice = parse_yaml(&yaml).unwrap();
    assert_eq!(igd, back);
}

#[test]
fn test_written_keys_are_wire_names() {
    let control = CallControl::default()
        .with_max_number_of_lines(4)
        .with_line(Line::default().with_directory_number("1001"))
        .with_line(Line::default().with_directory_number("1002"));
    let yaml = write_yaml(&control).unwrap();

    assert!(yaml.contains("MaxNumberOfLines: 4"));
    assert!(yaml.contains("DirectoryNumber: '1001'"));
    assert!(yaml.contains("Line:\n- Enable: false"));
    assert!(!yaml.contains("Extension"));
}

#[test]
fn test_json_input_is_accepted() {
    let json = r#"{"Name": "PSTN", "MaxChannels": 8, "Enable": true}"#;
    let trunk: Trunk = parse_yaml(json).unwrap();
    assert_eq!(trunk.name.as_deref(), Some("PSTN"));
    assert_eq!(trunk.max_channels, Some(8));
    assert_eq!(trunk.enable, Some(true));
}
