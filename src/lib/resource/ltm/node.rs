// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;
use serde_json::Value;

use super::normalized_address_property;
use crate::{
    resource::validate_identity, DevicePath, ErrorKind, LbstateError,
    LbstateResource, PropertyDefault, PropertyMap, ResourceSchema,
};

static SCHEMA: ResourceSchema = ResourceSchema::new(
    "node",
    &[
        ("address", PropertyDefault::Null),
        ("state", PropertyDefault::Null),
        ("session", PropertyDefault::Null),
    ],
);

const IMMUTABLE_PROPERTIES: &[&str] = &["address"];

/// Node resource in the `ltm` module of the device.
///
/// Like the virtual address, the node address is immutable on the
/// device and is left out of every update payload.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    name: String,
    partition: String,
    #[serde(flatten)]
    properties: PropertyMap,
}

impl Node {
    /// Build a node from the supplied properties, filling schema
    /// defaults. The address is stored as given.
    pub fn new(
        name: &str,
        partition: &str,
        properties: &PropertyMap,
    ) -> Result<Self, LbstateError> {
        validate_identity(name, partition)?;
        Ok(Self {
            name: name.to_string(),
            partition: partition.to_string(),
            properties: Self::schema().build(properties)?,
        })
    }

    /// Build a node from declared desired state. Nodes are named by
    /// their canonical address on the device, so the name is derived
    /// from the `address` property and that property is stored in
    /// canonical form. The properties must carry a string address.
    pub fn new_api(
        partition: &str,
        default_route_domain: u16,
        properties: &PropertyMap,
    ) -> Result<Self, LbstateError> {
        let mut data = Self::schema().build(properties)?;
        let canonical =
            normalized_address_property(&data, default_route_domain)?
                .ok_or_else(|| {
                    LbstateError::new(
                        ErrorKind::InvalidArgument,
                        "Node requires an address property".to_string(),
                    )
                })?;
        data.insert("address".to_string(), Value::String(canonical.clone()));
        validate_identity(&canonical, partition)?;
        Ok(Self {
            name: canonical,
            partition: partition.to_string(),
            properties: data,
        })
    }

    /// Build a node from device state. The device leaves the route
    /// domain out of an address matching the partition default, so the
    /// `address` property is brought back to canonical form.
    pub fn new_icr(
        name: &str,
        partition: &str,
        default_route_domain: u16,
        properties: &PropertyMap,
    ) -> Result<Self, LbstateError> {
        validate_identity(name, partition)?;
        let mut data = Self::schema().build(properties)?;
        if let Some(canonical) =
            normalized_address_property(&data, default_route_domain)?
        {
            data.insert("address".to_string(), Value::String(canonical));
        }
        Ok(Self {
            name: name.to_string(),
            partition: partition.to_string(),
            properties: data,
        })
    }

    /// Canonical address, or None when not declared.
    pub fn address(&self) -> Option<&str> {
        self.properties.get("address").and_then(Value::as_str)
    }
}

impl LbstateResource for Node {
    fn schema() -> &'static ResourceSchema {
        &SCHEMA
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn partition(&self) -> &str {
        self.partition.as_str()
    }

    fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    fn device_path(&self) -> DevicePath {
        DevicePath::LtmNode
    }

    fn immutable_properties(&self) -> &'static [&'static str] {
        IMMUTABLE_PROPERTIES
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.properties_eq(other)
    }
}
