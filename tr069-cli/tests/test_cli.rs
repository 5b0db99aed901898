use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::process::{Command, Output};

use tr069_model::InternetGatewayDevice;

fn fixture(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../test-fixtures")
        .join(rel)
}

fn tr069(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tr069"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run tr069")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn gateway_xml() -> String {
    fixture("xml/gateway.xml").display().to_string()
}

fn parse_fixture_xml() -> InternetGatewayDevice {
    let text = std::fs::read_to_string(fixture("xml/gateway.xml")).unwrap();
    tr069_xml::parse_xml(&text).unwrap()
}

#[test]
fn test_xml_and_yaml_fixtures_describe_the_same_device() {
    let yaml = std::fs::read_to_string(fixture("yaml/gateway.yaml")).unwrap();
    let from_yaml: InternetGatewayDevice = tr069_yaml::parse_yaml(&yaml).unwrap();
    assert_eq!(from_yaml, parse_fixture_xml());
}

#[test]
fn test_convert_xml_to_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("gateway.yaml");

    let out = tr069(&["convert", &gateway_xml(), "-o", output.to_str().unwrap()]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).starts_with("Converted "));

    let text = std::fs::read_to_string(&output).unwrap();
    let igd: InternetGatewayDevice = tr069_yaml::parse_yaml(&text).unwrap();
    assert_eq!(igd, parse_fixture_xml());
}

#[test]
fn test_convert_xml_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("gateway.json");

    let out = tr069(&["convert", &gateway_xml(), "-o", output.to_str().unwrap()]);
    assert!(out.status.success(), "{}", stderr(&out));

    let text = std::fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["DeviceInfo"]["Manufacturer"], "Acme Networks");
}

#[test]
fn test_convert_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("gateway.yaml");

    let out = tr069(&[
        "convert",
        &gateway_xml(),
        "-o",
        output.to_str().unwrap(),
        "--dry-run",
    ]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).starts_with("dry run: would write "));
    assert!(!output.exists());
}

#[test]
fn test_convert_same_format_needs_refresh_counts() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("copy.xml");

    let out = tr069(&["convert", &gateway_xml(), "-o", output.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("Nothing to convert"));

    let out = tr069(&[
        "convert",
        &gateway_xml(),
        "-o",
        output.to_str().unwrap(),
        "--refresh-counts",
    ]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(output.exists());
}

#[test]
fn test_validate_fixtures() {
    let yaml = fixture("yaml/gateway.yaml").display().to_string();
    let out = tr069(&["validate", &gateway_xml(), &yaml]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out).matches(": valid").count(), 2);
}

#[test]
fn test_validate_invalid_document_fails() {
    let invalid = fixture("yaml/invalid.yaml").display().to_string();
    let out = tr069(&["validate", &invalid]);
    assert!(!out.status.success());

    let err = stderr(&out);
    assert!(err.contains("ManufacturerOUI"), "{err}");
    assert!(err.contains("DSCPMark"), "{err}");
    assert!(err.contains("1 of 1 file failed validation"), "{err}");
}

#[test]
fn test_validate_summary_only_prints_counts() {
    let invalid = fixture("yaml/invalid.yaml").display().to_string();
    let out = tr069(&["validate", "--summary", &invalid]);
    assert!(!out.status.success());
    assert!(stdout(&out).contains("validation error"));
    assert!(!stderr(&out).contains("schema:"));
}

#[test]
fn test_info() {
    let out = tr069(&["info", &gateway_xml()]);
    assert!(out.status.success(), "{}", stderr(&out));

    let text = stdout(&out);
    assert!(text.contains("Format:        XML"));
    assert!(text.contains("Manufacturer:  Acme Networks"));
    assert!(text.contains("Model:         HG-4000"));
    assert!(text.contains("Lines:         2"));
    assert!(text.contains("Devices:       2"));
}

#[test]
fn test_params_partial_path() {
    let out = tr069(&["params", &gateway_xml(), "InternetGatewayDevice.DeviceInfo."]);
    assert!(out.status.success(), "{}", stderr(&out));

    let text = stdout(&out);
    assert!(text.contains("InternetGatewayDevice.DeviceInfo.Manufacturer = Acme Networks"));
    assert!(text.contains("InternetGatewayDevice.DeviceInfo.UpTime = 86400"));
    assert!(text.lines().all(|l| l.starts_with("InternetGatewayDevice.DeviceInfo.")));
}

#[test]
fn test_params_unknown_path_reports_fault() {
    let out = tr069(&["params", &gateway_xml(), "InternetGatewayDevice.NoSuchThing"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("fault 9005"), "{}", stderr(&out));
}

#[test]
fn test_set_read_only_parameter_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.xml");

    let out = tr069(&[
        "set",
        &gateway_xml(),
        "InternetGatewayDevice.DeviceInfo.UpTime",
        "1",
        "-o",
        output.to_str().unwrap(),
    ]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("fault 9008"), "{}", stderr(&out));
    assert!(!output.exists());
}

#[test]
fn test_set_writable_parameter() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.yaml");
    let path = "InternetGatewayDevice.ManagementServer.PeriodicInformInterval";

    let out = tr069(&["set", &gateway_xml(), path, "600", "-o", output.to_str().unwrap()]);
    assert!(out.status.success(), "{}", stderr(&out));

    let text = std::fs::read_to_string(&output).unwrap();
    let igd: InternetGatewayDevice = tr069_yaml::parse_yaml(&text).unwrap();
    let ms = igd.management_server.unwrap();
    assert_eq!(ms.periodic_inform_interval, Some(600));
}

#[test]
fn test_set_rejects_constraint_violation() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.yaml");
    let path = "InternetGatewayDevice.ManagementServer.PeriodicInformInterval";

    let out = tr069(&["set", &gateway_xml(), path, "0", "-o", output.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("fault 9007"), "{}", stderr(&out));
}

#[test]
fn test_schema_text_lists_parameter_templates() {
    let out = tr069(&["schema"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains(
        "InternetGatewayDevice.Services.VoiceService.{i}.CallControl.Line.{i}.Enable"
    ));
}

#[test]
fn test_schema_json_is_a_json_schema() {
    let out = tr069(&["schema", "--format", "json"]);
    assert!(out.status.success(), "{}", stderr(&out));

    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["$schema"], "https://json-schema.org/draft/2020-12/schema");
    assert_eq!(value["type"], "object");
}

#[test]
fn test_schema_dm_round_trips_through_check_dm() {
    let out = tr069(&["schema", "--format", "dm"]);
    assert!(out.status.success(), "{}", stderr(&out));

    let dir = tempfile::tempdir().unwrap();
    let dm = dir.path().join("igd.xml");
    std::fs::write(&dm, &out.stdout).unwrap();

    let out = tr069(&["check-dm", dm.to_str().unwrap()]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("matches the built-in data model"));
}

#[test]
fn test_check_dm_reports_differences() {
    let dm = fixture("dm/voice-trunk.xml").display().to_string();
    let out = tr069(&["check-dm", &dm]);
    assert!(!out.status.success());

    let text = stdout(&out);
    assert!(text.contains("InternetGatewayDevice."), "{text}");
    assert!(stderr(&out).contains("differences between"));
}

#[test]
fn test_unknown_extension_is_rejected() {
    let out = tr069(&["info", "device.odx"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("Unknown file extension: .odx"));
}
