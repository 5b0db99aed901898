use pretty_assertions::assert_eq;
use tr069_model::schema::parameter_paths;
use tr069_model::voice::Trunk;
use tr069_model::{Access, InternetGatewayDevice};
use tr069_xml::{DmDifference, compare_data_model, parse_data_model, write_data_model};

const ROOT: &str = InternetGatewayDevice::ROOT_PATH;
const VOICE_TRUNK: &str = include_str!("../../test-fixtures/dm/voice-trunk.xml");

#[test]
fn test_write_data_model_document_header() {
    let xml = write_data_model(InternetGatewayDevice::SCHEMA, ROOT, "InternetGatewayDevice:1.4").unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<dm:document"));
    assert!(xml.contains("xmlns:dm=\"urn:broadband-forum-org:cwmp:datamodel-1-8\""));
    assert!(xml.contains("<model name=\"InternetGatewayDevice:1.4\">"));
    assert!(xml.contains(
        "name=\"InternetGatewayDevice.Services.VoiceService.{i}.CallControl.Line.{i}.\""
    ));
    assert!(xml.contains("numEntriesParameter=\"LineNumberOfEntries\""));
}

#[test]
fn test_written_data_model_parses_back_without_differences() {
    let xml = write_data_model(InternetGatewayDevice::SCHEMA, ROOT, "InternetGatewayDevice:1.4").unwrap();
    let doc = parse_data_model(&xml).unwrap();
    assert_eq!(doc.models.len(), 1);

    let params: usize = doc.models[0].objects.iter().map(|o| o.parameters.len()).sum();
    assert_eq!(params, parameter_paths(InternetGatewayDevice::SCHEMA, ROOT).len());

    let diffs = compare_data_model(&doc, InternetGatewayDevice::SCHEMA, ROOT);
    assert!(diffs.is_empty(), "{diffs:?}");
}

#[test]
fn test_written_syntax_round_trips() {
    let xml = write_data_model(Trunk::SCHEMA, "Trunk.{i}.", "Test:1.0").unwrap();
    let doc = parse_data_model(&xml).unwrap();
    let trunk = &doc.models[0].objects[0];
    assert!(trunk.is_table());

    let status = trunk.parameters.iter().find(|p| p.name == "Status").unwrap();
    let values: Vec<&str> = status
        .syntax
        .string
        .as_ref()
        .unwrap()
        .enumerations
        .iter()
        .map(|e| e.value.as_str())
        .collect();
    assert_eq!(values, vec!["Up", "Error", "Testing", "Quiescent", "Disabled"]);

    let provider = trunk.parameters.iter().find(|p| p.name == "Provider").unwrap();
    let string = provider.syntax.string_facets().unwrap();
    assert_eq!(string.size.as_ref().and_then(|s| s.max_length), Some(256));
    assert_eq!(
        string.path_ref.as_ref().and_then(|r| r.target_parent.as_deref()),
        Some("VoiceService.{i}.SIP.Client.")
    );
}

#[test]
fn test_compare_vendor_document() {
    let doc = parse_data_model(VOICE_TRUNK).unwrap();
    assert_eq!(doc.models[0].name, "AcmeVoice:1.0");

    let root = "Device.Services.VoiceService.{i}.Trunk.{i}.";
    let diffs = compare_data_model(&doc, Trunk::SCHEMA, root);
    assert_eq!(
        diffs,
        vec![
            DmDifference::MissingParameter(format!("{root}LineObjectCreation")),
            DmDifference::AccessMismatch {
                path: format!("{root}MaxChannels"),
                expected: Access::ReadOnly,
                found: Access::ReadWrite,
            },
            DmDifference::ExtraParameter(format!("{root}X_ACME_Priority")),
            DmDifference::ExtraObject(format!("{root}Stats.")),
        ]
    );
}

#[test]
fn test_compare_reports_missing_objects() {
    let doc = parse_data_model(VOICE_TRUNK).unwrap();
    let diffs = compare_data_model(&doc, InternetGatewayDevice::SCHEMA, ROOT);
    assert!(diffs.contains(&DmDifference::MissingObject(ROOT.to_string())));
    assert!(
        diffs
            .iter()
            .any(|d| matches!(d, DmDifference::ExtraObject(p) if p.starts_with("Device.")))
    );
}
