use andon_api::types::Payload;
use andon_api::{PassResult, ReportRequest, StatusColor, StatusUpdateRequest};
use serde_json::{json, Value};

fn keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .expect("payload is an object")
        .keys()
        .map(String::as_str)
        .collect()
}

#[test]
fn report_payload_with_all_fields() {
    let request = ReportRequest::new("line 1", "station 1", PassResult::Fail, 120)
        .with_fail_reason("Test Failure")
        .with_fail_notes("notes");
    let value = serde_json::to_value(Payload::new("Demo", &request)).unwrap();

    assert_eq!(
        value,
        json!({
            "orgName": "Demo",
            "lineName": "line 1",
            "stationName": "station 1",
            "passResult": "FAIL",
            "processTimeSeconds": 120,
            "failReason": "Test Failure",
            "failNotes": "notes"
        })
    );
}

#[test]
fn report_payload_uses_null_for_omitted_fields() {
    let request = ReportRequest::new("line 1", "station 1", PassResult::Pass, 100);
    let value = serde_json::to_value(Payload::new("Demo", &request)).unwrap();

    let mut got = keys(&value);
    got.sort_unstable();
    assert_eq!(
        got,
        vec![
            "failNotes",
            "failReason",
            "lineName",
            "orgName",
            "passResult",
            "processTimeSeconds",
            "stationName",
        ]
    );
    assert!(value["failReason"].is_null());
    assert!(value["failNotes"].is_null());
}

#[test]
fn org_name_is_serialized_first() {
    let request = StatusUpdateRequest::new("line 1", "station 1", StatusColor::Red);
    let text = serde_json::to_string(&Payload::new("Demo", &request)).unwrap();
    assert!(text.starts_with(r#"{"orgName":"Demo","lineName":"line 1""#));
}

#[test]
fn status_payload_uses_null_for_omitted_fields() {
    let request = StatusUpdateRequest::new("line 1", "station 1", StatusColor::Green);
    let value = serde_json::to_value(Payload::new("Demo", &request)).unwrap();

    assert_eq!(
        value,
        json!({
            "orgName": "Demo",
            "lineName": "line 1",
            "stationName": "station 1",
            "statusColor": "GREEN",
            "statusReason": null,
            "statusNotes": null
        })
    );
}

#[test]
fn unlisted_values_are_sent_as_given() {
    let request = ReportRequest::new("", "station 1", "MAYBE", 0);
    let value = serde_json::to_value(Payload::new("Demo", &request)).unwrap();
    assert_eq!(value["passResult"], "MAYBE");
    assert_eq!(value["lineName"], "");

    let request = StatusUpdateRequest::new("line 1", "station 1", "purple");
    let value = serde_json::to_value(Payload::new("Demo", &request)).unwrap();
    assert_eq!(value["statusColor"], "purple");
}

#[test]
fn cleared_names_are_sent_as_null() {
    let mut request = ReportRequest::new("line 1", "station 1", PassResult::Pass, 100);
    request.line_name = None;
    let value = serde_json::to_value(Payload::new("Demo", &request)).unwrap();
    assert!(value["lineName"].is_null());
    assert_eq!(value["stationName"], "station 1");

    let mut request = StatusUpdateRequest::new("line 1", "station 1", StatusColor::Red);
    request.station_name = None;
    let value = serde_json::to_value(Payload::new("Demo", &request)).unwrap();
    assert!(value["stationName"].is_null());
    assert_eq!(value["lineName"], "line 1");
}
