//! Tests for wire types and view state

use super::*;

#[test]
fn test_default_gw_response_parses() {
    let response: DefaultGwResponse =
        serde_json::from_str(r#"{"default_gw": "eth0"}"#).unwrap();
    assert_eq!(response.default_gw, "eth0");

    let state = GatewayState::from(response);
    assert_eq!(state.default_gateway.as_deref(), Some("eth0"));
}

#[test]
fn test_default_gw_response_requires_field() {
    // `/set_default_gw` answering `{"result": "OK"}` is not a gateway body
    let result = serde_json::from_str::<DefaultGwResponse>(r#"{"result": "OK"}"#);
    assert!(result.is_err());
}

#[test]
fn test_interface_status_maps_if_name() {
    let body = r#"{
        "interfaceStatus": [
            {"ifName": "wan0", "status": "up"},
            {"ifName": "wan1", "status": "down", "lastCheckedAt": "Thu Oct 15 10:00:00 2026\n"}
        ]
    }"#;
    let response: InterfaceStatusResponse = serde_json::from_str(body).unwrap();
    let list = InterfaceStatusList::from(response);

    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0), Some(&InterfaceStatusEntry::new("wan0", "up")));
    assert_eq!(list.get(1).unwrap().name, "wan1");
    assert_eq!(list.get(1).unwrap().status, "down");
    assert!(list.get(1).unwrap().last_checked_at.is_some());
    assert!(list.get(2).is_none());
}

#[test]
fn test_interface_status_missing_list_is_empty() {
    let response: InterfaceStatusResponse = serde_json::from_str("{}").unwrap();
    let list = InterfaceStatusList::from(response);
    assert!(list.is_empty());
}

#[test]
fn test_interface_status_missing_status_is_empty_string() {
    let response: InterfaceStatusResponse =
        serde_json::from_str(r#"{"interfaceStatus": [{"ifName": "usb0"}]}"#).unwrap();
    assert_eq!(response.interface_status[0].status, "");
}

#[test]
fn test_interface_status_preserves_response_order() {
    let body = r#"{"interfaceStatus": [
        {"ifName": "eth1", "status": "HEALTHY"},
        {"ifName": "usb0", "status": "UNKNOWN"},
        {"ifName": "eth0", "status": "UNHEALTHY"}
    ]}"#;
    let response: InterfaceStatusResponse = serde_json::from_str(body).unwrap();
    let list = InterfaceStatusList::from(response);
    let names: Vec<&str> = list.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["eth1", "usb0", "eth0"]);
}

#[test]
fn test_entry_serializes_wire_names() {
    let entry = InterfaceStatusEntry::new("eth0", "up");
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json, serde_json::json!({"ifName": "eth0", "status": "up"}));
}
