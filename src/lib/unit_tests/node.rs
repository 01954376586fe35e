// SPDX-License-Identifier: Apache-2.0

use serde_json::Value;

use super::{init_logger, DeviceCall, FakeDeviceClient};
use crate::{DevicePath, ErrorKind, LbstateResource, Node, PropertyMap};

fn node_properties() -> PropertyMap {
    serde_yaml::from_str(
        r#"
        address: 192.168.200.10
        state: user-up
        session: user-enabled
        "#,
    )
    .unwrap()
}

#[test]
fn test_plain_node_stores_address_as_given() {
    let node =
        Node::new("192.168.200.10", "Common", &node_properties()).unwrap();
    assert_eq!(node.address(), Some("192.168.200.10"));
    assert_eq!(
        node.properties().get("state"),
        Some(&Value::String("user-up".to_string()))
    );
}

#[test]
fn test_api_node_is_named_by_canonical_address() {
    let node = Node::new_api("Common", 0, &node_properties()).unwrap();
    assert_eq!(node.name(), "192.168.200.10%0");
    assert_eq!(node.address(), Some("192.168.200.10%0"));
    assert_eq!(node.partition(), "Common");
}

#[test]
fn test_api_node_ipv6_name() {
    let properties: PropertyMap =
        serde_yaml::from_str("address: \"2001:DB8::1\"\n").unwrap();
    let node = Node::new_api("Common", 2, &properties).unwrap();
    assert_eq!(node.name(), "2001:db8::1%2");
}

#[test]
fn test_api_node_requires_address() {
    let result = Node::new_api("Common", 0, &PropertyMap::new());
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_api_node_rejects_invalid_address() {
    let properties: PropertyMap =
        serde_yaml::from_str("address: node-1\n").unwrap();
    let result = Node::new_api("Common", 0, &properties);
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidAddressFormat);
    }
}

// The device leaves the route domain out when it matches the partition
// default, the live state must still compare equal to the declared one.
#[test]
fn test_api_and_icr_node_converge() {
    let api = Node::new_api("Common", 0, &node_properties()).unwrap();
    let icr = Node::new_icr(
        "192.168.200.10%0",
        "Common",
        0,
        &node_properties(),
    )
    .unwrap();
    assert_eq!(api, icr);
}

#[test]
fn test_icr_node_keeps_explicit_route_domain() {
    let properties: PropertyMap =
        serde_yaml::from_str("address: 192.168.200.10%3\n").unwrap();
    let node =
        Node::new_icr("192.168.200.10%3", "Common", 0, &properties).unwrap();
    assert_eq!(node.address(), Some("192.168.200.10%3"));
}

#[test]
fn test_node_unknown_property_fails_construction() {
    let properties: PropertyMap = serde_yaml::from_str(
        r#"
        address: 192.168.200.10
        monitor: default
        "#,
    )
    .unwrap();
    let result = Node::new("n1", "Common", &properties);
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::SchemaViolation);
    }
}

#[test]
fn test_node_update_excludes_address() {
    init_logger();
    let node = Node::new_api("Common", 0, &node_properties()).unwrap();
    let mut client = FakeDeviceClient::default();
    node.update(&mut client, None, true).unwrap();
    assert_eq!(client.calls.len(), 1);
    if let Some(DeviceCall::Modify {
        path,
        name,
        properties,
        ..
    }) = client.calls.first()
    {
        assert_eq!(*path, DevicePath::LtmNode);
        assert_eq!(name, "192.168.200.10%0");
        assert!(!properties.contains_key("address"));
        assert_eq!(
            properties.keys().collect::<Vec<_>>(),
            ["session", "state"]
        );
    } else {
        panic!("Expecting a modify call, got {:?}", client.calls);
    }
}

#[test]
fn test_node_update_with_data_excludes_address() {
    init_logger();
    let node = Node::new_api("Common", 0, &node_properties()).unwrap();
    let data: PropertyMap = serde_yaml::from_str(
        r#"
        address: 192.168.200.10%0
        state: user-down
        session: user-disabled
        "#,
    )
    .unwrap();
    let mut client = FakeDeviceClient::default();
    node.update(&mut client, Some(&data), false).unwrap();
    if let Some(DeviceCall::Update { properties, .. }) = client.calls.first()
    {
        assert!(!properties.contains_key("address"));
        assert_eq!(
            properties.get("state"),
            Some(&Value::String("user-down".to_string()))
        );
    } else {
        panic!("Expecting an update call, got {:?}", client.calls);
    }
}

#[test]
fn test_node_full_update_excludes_address() {
    init_logger();
    let node = Node::new_api("Common", 0, &node_properties()).unwrap();
    let mut client = FakeDeviceClient::default();
    node.update(&mut client, None, false).unwrap();
    if let Some(DeviceCall::Update { properties, .. }) = client.calls.first()
    {
        assert_eq!(
            properties.keys().collect::<Vec<_>>(),
            ["session", "state"]
        );
    } else {
        panic!("Expecting an update call, got {:?}", client.calls);
    }
}

#[test]
fn test_node_modify_with_data_excludes_address() {
    init_logger();
    let node = Node::new_api("Common", 0, &node_properties()).unwrap();
    let data: PropertyMap = serde_yaml::from_str(
        r#"
        address: 192.168.200.10%0
        session: user-disabled
        "#,
    )
    .unwrap();
    let mut client = FakeDeviceClient::default();
    node.update(&mut client, Some(&data), true).unwrap();
    if let Some(DeviceCall::Modify { properties, .. }) = client.calls.first()
    {
        assert!(!properties.contains_key("address"));
        assert_eq!(
            properties.get("session"),
            Some(&Value::String("user-disabled".to_string()))
        );
        assert_eq!(properties.len(), 1);
    } else {
        panic!("Expecting a modify call, got {:?}", client.calls);
    }
}

#[test]
fn test_node_state_change_is_unequal() {
    let up = Node::new_api("Common", 0, &node_properties()).unwrap();
    let down_properties: PropertyMap = serde_yaml::from_str(
        r#"
        address: 192.168.200.10
        state: user-down
        session: user-disabled
        "#,
    )
    .unwrap();
    let down = Node::new_api("Common", 0, &down_properties).unwrap();
    assert_ne!(up, down);
}
