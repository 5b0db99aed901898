use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use tr069_model::fap::{FapControl, FapService, LteControl, LteGateway};
use tr069_model::voice::*;
use tr069_model::*;
use tr069_xml::{parse_xml, write_xml};

const GATEWAY: &str = include_str!("../../test-fixtures/xml/gateway.xml");

fn gateway() -> InternetGatewayDevice {
    parse_xml(GATEWAY).unwrap()
}

#[test]
fn test_parse_gateway_fixture() {
    let igd = gateway();

    let info = igd.device_info.as_ref().unwrap();
    assert_eq!(info.manufacturer.as_deref(), Some("Acme Networks"));
    assert_eq!(info.up_time, Some(86400));
    assert_eq!(
        info.first_use_date,
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 15, 0).unwrap())
    );
    assert_eq!(
        info.additional_software_version,
        vec!["boot-1.2".to_string(), "dsp-3.4".to_string()]
    );
    assert_eq!(info.vendor_config_files.len(), 1);

    let ms = igd.management_server.as_ref().unwrap();
    assert_eq!(ms.periodic_inform_enable, Some(true));
    assert_eq!(ms.manageable_devices.len(), 2);
    assert_eq!(ms.manageable_devices[0].hosts.len(), 1);
    assert!(ms.manageable_devices[1].hosts.is_empty());

    let service = &igd.voice_services()[0];
    assert_eq!(service.alias, Some(Alias::new("voice")));
    let control = service.call_control.as_ref().unwrap();
    assert_eq!(control.lines.len(), 2);
    assert_eq!(control.lines[1].directory_number.as_deref(), Some("+4930555013"));
    // Not in the document, so the declared default applies.
    assert_eq!(control.lines[1].status.as_deref(), Some("Disabled"));

    let session = &service.call_logs[0].sessions[0];
    assert_eq!(
        session.session_id,
        Some(HexBinary(vec![0x0a, 0x1b, 0x2c, 0x3d, 0x4e, 0x5f]))
    );
    let network = &service.sip.as_ref().unwrap().networks[0];
    assert_eq!(network.codec_list.len(), 2);
    assert!(igd.fap_services().is_empty());
}

#[test]
fn test_gateway_fixture_is_valid() {
    let igd = gateway();
    assert!(validate_tree(&igd, InternetGatewayDevice::ROOT_PATH).is_ok());
    let issues = validate_semantics(&igd);
    assert!(issues.is_empty(), "{issues:?}");
}

#[test]
fn test_gateway_round_trip() {
    let igd = gateway();
    let xml = write_xml(&igd).unwrap();
    let back: InternetGatewayDevice = parse_xml(&xml).unwrap();
    assert_eq!(igd, back);
}

#[test]
fn test_written_document_shape() {
    let session = CallLogSession::default()
        .with_stream_type("Audio")
        .with_start(Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap())
        .with_session_id(HexBinary(vec![0xde, 0xad, 0xbe, 0xef]));
    let igd = InternetGatewayDevice::default().with_services(
        Services::default().with_voice_service(
            VoiceService::default()
                .with_call_log(CallLog::default().with_session(session))
                .with_trunk(Trunk::default().with_name("A"))
                .with_trunk(Trunk::default().with_name("B")),
        ),
    );

    let xml = write_xml(&igd).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<InternetGatewayDevice>"));
    assert!(xml.contains("<SessionID>deadbeef</SessionID>"));
    assert!(xml.contains("<Start>2024-05-01T12:30:00Z</Start>"));
    assert_eq!(xml.matches("<Trunk>").count(), 2);
    assert!(xml.find("<Name>A</Name>") < xml.find("<Name>B</Name>"));
    // Empty tables and unset objects produce no elements.
    assert!(!xml.contains("<CallControl"));
    assert!(!xml.contains("<FAPService"));
}

#[test]
fn test_fap_service_round_trip() {
    let fap = FapService::default().with_alias("femto").with_fap_control(
        FapControl::default().with_lte(
            LteControl::default().with_admin_state(true).with_gateway(
                LteGateway::default()
                    .with_sec_gw_server1("segw.example.net")
                    .with_s1_sig_link_server("mme1.example.net")
                    .with_s1_sig_link_server("mme2.example.net"),
            ),
        ),
    );

    let xml = write_xml(&fap).unwrap();
    assert!(xml.contains("<FAPService>"));
    assert!(xml.contains(
        "<S1SigLinkServerList>mme1.example.net,mme2.example.net</S1SigLinkServerList>"
    ));
    let back: FapService = parse_xml(&xml).unwrap();
    assert_eq!(fap, back);
}

#[test]
fn test_unknown_elements_are_ignored() {
    let xml = "<Trunk><Name>PSTN</Name><X_ACME_Colour>blue</X_ACME_Colour></Trunk>";
    let trunk: Trunk = parse_xml(xml).unwrap();
    assert_eq!(trunk.name.as_deref(), Some("PSTN"));
}
