// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;
use serde_json::Value;

use super::normalized_address_property;
use crate::{
    resource::validate_identity, DevicePath, LbstateError, LbstateResource,
    PropertyDefault, PropertyMap, ResourceSchema,
};

static SCHEMA: ResourceSchema = ResourceSchema::new(
    "virtual-address",
    &[
        ("address", PropertyDefault::Null),
        ("autoDelete", PropertyDefault::Str("false")),
        ("enabled", PropertyDefault::Null),
        ("description", PropertyDefault::Null),
        ("trafficGroup", PropertyDefault::Str("/Common/traffic-group-1")),
    ],
);

const IMMUTABLE_PROPERTIES: &[&str] = &["address"];

/// Virtual address resource in the `ltm` module of the device.
///
/// The address is stored in its canonical `ip%route-domain` form from
/// construction on and never changes afterwards. The device treats the
/// address as immutable, so it is left out of every update payload.
#[derive(Debug, Clone, Serialize)]
pub struct VirtualAddress {
    name: String,
    partition: String,
    #[serde(flatten)]
    properties: PropertyMap,
}

impl VirtualAddress {
    /// Build a virtual address from the supplied properties, filling
    /// schema defaults for left out keys. A non-null `address` must be
    /// a JSON string and is replaced by its canonical form. A property
    /// key outside the schema fails the whole construction.
    pub fn new(
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

impl LbstateResource for VirtualAddress {
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
        DevicePath::LtmVirtualAddress
    }

    fn immutable_properties(&self) -> &'static [&'static str] {
        IMMUTABLE_PROPERTIES
    }
}

impl PartialEq for VirtualAddress {
    fn eq(&self, other: &Self) -> bool {
        self.properties_eq(other)
    }
}
