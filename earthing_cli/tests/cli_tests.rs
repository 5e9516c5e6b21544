//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PIPE_REQUEST: &str = r#"{
    "earth_resistivity": 100.0,
    "fault_current": 10000.0,
    "fault_clearing_time": 1.0,
    "earthing_type": "pipe",
    "rod_diameter_mm": 15.0,
    "rod_radius_m": 0.0075,
    "rod_length_m": 3.0,
    "number_of_pits": 2,
    "strip_width_mm": 50.0,
    "strip_thickness_mm": 6.0,
    "number_of_strips": 1,
    "strip_length_m": 10.0,
    "strip_material": "CU"
}"#;

const PASSING_PLATE_REQUEST: &str = r#"{
    "earth_resistivity": 10.0,
    "fault_current": 1000.0,
    "fault_clearing_time": 1.0,
    "earthing_type": "plate",
    "plate_length_mm": 1200.0,
    "plate_width_mm": 1200.0,
    "plate_thickness_mm": 6.0,
    "number_of_pits": 4,
    "strip_width_mm": 50.0,
    "strip_thickness_mm": 6.0,
    "number_of_strips": 2,
    "strip_length_m": 50.0,
    "strip_material": "GI"
}"#;

fn earthing_cli() -> Command {
    cargo_bin_cmd!("earthing")
}

/// Write `contents` to a file in a fresh temp dir. Keep the dir alive for the test.
fn write_temp(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_cli_help() {
    let mut cmd = earthing_cli();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("IS 3043"));
}

#[test]
fn test_cli_version() {
    let mut cmd = earthing_cli();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_calculate_json_from_file() {
    let (_dir, path) = write_temp("pipe.json", PIPE_REQUEST);
    let mut cmd = earthing_cli();

    cmd.arg("calculate").arg(&path).arg("--format").arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["standard"], "IS 3043:2018");
    assert_eq!(json["earthing_type"], "pipe");
    assert_eq!(json["overall_status"], "FAIL");
    assert_eq!(json["summary"][0]["result"], 1.4);
    assert_eq!(json["summary"][1]["result"], 48.78);
    assert_eq!(json["summary"][2]["result"], 6.38);
    assert_eq!(json["summary"][2]["remarks"], "Not Acceptable");
}

#[test]
fn test_calculate_from_stdin() {
    let mut cmd = earthing_cli();

    cmd.arg("calculate").arg("--format").arg("json").write_stdin(PIPE_REQUEST);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"overall_status\":\"FAIL\""));
}

#[test]
fn test_calculate_human_output() {
    let (_dir, path) = write_temp("pipe.json", PIPE_REQUEST);
    let mut cmd = earthing_cli();

    cmd.arg("calculate").arg(&path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Pipe Earthing"))
        .stdout(predicate::str::contains("Net Earthing Resistance"))
        .stdout(predicate::str::contains("Overall status: FAIL"));
}

#[test]
fn test_fail_on_fail_sets_exit_code() {
    let mut cmd = earthing_cli();

    cmd.arg("calculate").arg("--fail-on-fail").write_stdin(PIPE_REQUEST);

    cmd.assert().code(1);
}

#[test]
fn test_fail_on_fail_passing_design() {
    let mut cmd = earthing_cli();

    cmd.arg("calculate")
        .arg("--fail-on-fail")
        .arg("--format")
        .arg("json")
        .write_stdin(PASSING_PLATE_REQUEST);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"overall_status\":\"PASS\""))
        .stdout(predicate::str::contains("Not Acceptable").not());
}

#[test]
fn test_invalid_electrode_type_rejected() {
    let request = PIPE_REQUEST.replace("\"pipe\"", "\"rod\"");
    let mut cmd = earthing_cli();

    cmd.arg("calculate").write_stdin(request);

    let output = cmd.assert().code(2).get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["error"]["type"], "InvalidElectrodeType");
    assert!(json["detail"].as_str().unwrap().contains("rod"));
    assert!(json.get("summary").is_none());
}

#[test]
fn test_unknown_material_rejected() {
    let request = PIPE_REQUEST.replace("\"CU\"", "\"FE\"");
    let mut cmd = earthing_cli();

    cmd.arg("calculate").write_stdin(request);

    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("UnknownMaterial"))
        .stdout(predicate::str::contains("FE"));
}

#[test]
fn test_non_positive_input_rejected() {
    let request = PIPE_REQUEST.replace("\"earth_resistivity\": 100.0", "\"earth_resistivity\": 0.0");
    let mut cmd = earthing_cli();

    cmd.arg("calculate").write_stdin(request);

    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("InvalidInput"))
        .stdout(predicate::str::contains("earth_resistivity"));
}

#[test]
fn test_pipe_shorter_than_half_diameter_rejected() {
    // ln(2L/D) would be negative and the net resistance with it
    let request = PIPE_REQUEST
        .replace("\"rod_length_m\": 3.0", "\"rod_length_m\": 0.005")
        .replace("\"strip_length_m\": 10.0", "\"strip_length_m\": 0.01");
    let mut cmd = earthing_cli();

    cmd.arg("calculate").write_stdin(request);

    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("InvalidInput"))
        .stdout(predicate::str::contains("rod_length_m"))
        .stdout(predicate::str::contains("PASS").not());
}

#[test]
fn test_breakdown_json() {
    let mut cmd = earthing_cli();

    cmd.arg("calculate")
        .arg("--format")
        .arg("json")
        .arg("--breakdown")
        .write_stdin(PIPE_REQUEST);

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["overall_status"], "FAIL");
    assert_eq!(json["breakdown"]["selected_strip_area_mm2"], 300.0);
    assert_eq!(json["breakdown"]["k_constant"], 205.0);

    let groups = json["equations_by_category"].as_array().unwrap();
    assert_eq!(groups.len(), 4);
    assert_eq!(groups[3]["category"], "Design Checks");
    assert_eq!(groups[3]["equations"].as_array().unwrap().len(), 3);
}

#[test]
fn test_breakdown_human() {
    let mut cmd = earthing_cli();

    cmd.arg("calculate").arg("--breakdown").write_stdin(PIPE_REQUEST);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Equations applied:"))
        .stdout(predicate::str::contains("Pipe Electrode Resistance"))
        .stdout(predicate::str::contains("Design Checks"));
}

#[test]
fn test_json_without_breakdown_has_no_extra_keys() {
    let mut cmd = earthing_cli();

    cmd.arg("calculate").arg("--format").arg("json").write_stdin(PIPE_REQUEST);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("breakdown").not());
}

#[test]
fn test_malformed_json_rejected() {
    let mut cmd = earthing_cli();

    cmd.arg("calculate").write_stdin("{ not json");

    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("SerializationError"));
}

#[test]
fn test_missing_file() {
    let mut cmd = earthing_cli();

    cmd.arg("calculate").arg("/nonexistent/request.json");

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read request file"));
}

#[test]
fn test_config_file_sets_output() {
    let (_dir, config) = write_temp("earthing.toml", "output = \"json\"\npretty = true\n");
    let mut cmd = earthing_cli();

    cmd.arg("--config")
        .arg(&config)
        .arg("calculate")
        .write_stdin(PIPE_REQUEST);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"overall_status\": \"FAIL\""));
}

#[test]
fn test_flag_overrides_config() {
    let (_dir, config) = write_temp("earthing.toml", "output = \"json\"\n");
    let mut cmd = earthing_cli();

    cmd.arg("--config")
        .arg(&config)
        .arg("calculate")
        .arg("--format")
        .arg("human")
        .write_stdin(PIPE_REQUEST);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Overall status: FAIL"));
}

#[test]
fn test_materials_listing() {
    let mut cmd = earthing_cli();

    cmd.arg("materials");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("CU"))
        .stdout(predicate::str::contains("Galvanized Iron"))
        .stdout(predicate::str::contains("205"));
}

#[test]
fn test_materials_json() {
    let mut cmd = earthing_cli();

    cmd.arg("materials").arg("--format").arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[2]["code"], "GI");
    assert_eq!(json[2]["k_constant"], 80.0);
}

#[test]
fn test_equations_markdown() {
    let mut cmd = earthing_cli();

    cmd.arg("equations");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("# Earthing Equations Reference"))
        .stdout(predicate::str::contains("**Total Equations:** 15"));
}
