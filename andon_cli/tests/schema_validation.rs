use andon_api::types::Payload;
use andon_api::{PassResult, ReportRequest, StatusColor, StatusUpdateRequest};
use serde_json::Value;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_schema(name: &str) -> Value {
    let path = workspace_root().join("schema").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

fn report_payload(request: &ReportRequest) -> Value {
    serde_json::to_value(Payload::new("Demo", request)).unwrap()
}

fn status_payload(request: &StatusUpdateRequest) -> Value {
    serde_json::to_value(Payload::new("Demo", request)).unwrap()
}

// ---------------------------------------------------------------------------
// Positive validation: generated bodies conform to their schemas
// ---------------------------------------------------------------------------

#[test]
fn test_report_payload_conforms_to_schema() {
    let schema = load_schema("report.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("report schema compiles");

    let minimal = report_payload(&ReportRequest::new("line 1", "station 1", PassResult::Pass, 120));
    if let Err(e) = validator.validate(&minimal) {
        panic!("minimal report failed validation: {e}");
    }

    let full = report_payload(
        &ReportRequest::new("line 1", "station 1", PassResult::Fail, 120)
            .with_fail_reason("Test Failure")
            .with_fail_notes("notes"),
    );
    if let Err(e) = validator.validate(&full) {
        panic!("full report failed validation: {e}");
    }
}

#[test]
fn test_status_payload_conforms_to_schema() {
    let schema = load_schema("status_update.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("status schema compiles");

    for color in [StatusColor::Green, StatusColor::Yellow, StatusColor::Red] {
        let payload = status_payload(
            &StatusUpdateRequest::new("line 1", "station 1", color)
                .with_status_reason("Missing parts"),
        );
        if let Err(e) = validator.validate(&payload) {
            panic!("{color} status update failed validation: {e}");
        }
    }
}

// ---------------------------------------------------------------------------
// Negative validation: schemas reject bodies the API would refuse
// ---------------------------------------------------------------------------

#[test]
fn test_report_schema_rejects_unknown_pass_result() {
    let schema = load_schema("report.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("report schema compiles");

    let payload = report_payload(&ReportRequest::new("line 1", "station 1", "MAYBE", 120));
    assert!(validator.validate(&payload).is_err());
}

#[test]
fn test_report_schema_rejects_missing_org_name() {
    let schema = load_schema("report.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("report schema compiles");

    let mut payload = report_payload(&ReportRequest::new("line 1", "station 1", PassResult::Pass, 1));
    payload.as_object_mut().unwrap().remove("orgName");
    assert!(validator.validate(&payload).is_err());
}

#[test]
fn test_status_schema_rejects_unknown_color() {
    let schema = load_schema("status_update.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("status schema compiles");

    let payload = status_payload(&StatusUpdateRequest::new("line 1", "station 1", "BLUE"));
    assert!(validator.validate(&payload).is_err());
}
