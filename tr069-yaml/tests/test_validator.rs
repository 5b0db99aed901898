use tr069_model::{InternetGatewayDevice, validate_tree};
use tr069_model::voice::Trunk;
use tr069_yaml::{json_schema, parse_yaml, validate_yaml_schema, write_yaml};

const GATEWAY: &str = include_str!("../../test-fixtures/yaml/gateway.yaml");
const INVALID: &str = include_str!("../../test-fixtures/yaml/invalid.yaml");

#[test]
fn test_gateway_fixture_passes_schema() {
    let result = validate_yaml_schema(GATEWAY, InternetGatewayDevice::SCHEMA);
    assert!(result.is_ok(), "gateway fixture should pass: {:?}", result.err());
}

#[test]
fn test_written_default_tree_passes_schema() {
    let yaml = write_yaml(&Trunk::default()).unwrap();
    assert!(validate_yaml_schema(&yaml, Trunk::SCHEMA).is_ok());
}

#[test]
fn test_invalid_fixture_reports_each_violation() {
    let errors = validate_yaml_schema(INVALID, InternetGatewayDevice::SCHEMA).unwrap_err();
    let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();

    for expected in [
        "/DeviceInfo/ManufacturerOUI",
        "/Services/VoiceService/0",
        "/Services/VoiceService/0/SIP/Network/0/DSCPMark",
        "/Services/VoiceService/0/Trunk/0/Status",
        "/Services/VoiceService/0/Trunk/0/MaxOutboundChannelCount",
    ] {
        assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
    }
}

#[test]
fn test_unknown_property_message() {
    let errors = validate_yaml_schema("Name: PSTN\nColour: red\n", Trunk::SCHEMA).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].path.is_empty());
    assert!(errors[0].message.contains("Colour"), "{}", errors[0].message);
}

#[test]
fn test_wrong_type_is_reported() {
    let errors = validate_yaml_schema("Enable: maybe\n", Trunk::SCHEMA).unwrap_err();
    assert_eq!(errors[0].path, "/Enable");
    assert!(errors[0].to_string().starts_with("/Enable: "));
}

#[test]
fn test_yaml_syntax_error() {
    let errors = validate_yaml_schema("Name: [unclosed\n", Trunk::SCHEMA).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.starts_with("YAML parse error"));
}

#[test]
fn test_schema_is_serializable() {
    let schema = json_schema(InternetGatewayDevice::SCHEMA);
    let text = serde_json::to_string(&schema).unwrap();
    assert!(text.contains("\"InternetGatewayDevice\""));
}

#[test]
fn test_alias_rules_agree_with_facet_check() {
    let empty = "Services:\n  VoiceService:\n    - Alias: ''\n";
    assert!(validate_yaml_schema(empty, InternetGatewayDevice::SCHEMA).is_ok());
    let igd: InternetGatewayDevice = parse_yaml(empty).unwrap();
    assert!(validate_tree(&igd, InternetGatewayDevice::ROOT_PATH).is_ok());

    let digit = "Services:\n  VoiceService:\n    - Alias: '1st'\n";
    let errors = validate_yaml_schema(digit, InternetGatewayDevice::SCHEMA).unwrap_err();
    assert_eq!(errors[0].path, "/Services/VoiceService/0/Alias");
    let igd: InternetGatewayDevice = parse_yaml(digit).unwrap();
    assert!(validate_tree(&igd, InternetGatewayDevice::ROOT_PATH).is_err());
}
