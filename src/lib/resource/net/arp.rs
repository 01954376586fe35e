// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

use crate::{
    resource::validate_identity, DevicePath, LbstateError, LbstateResource,
    PropertyDefault, PropertyMap, ResourceSchema,
};

static SCHEMA: ResourceSchema = ResourceSchema::new(
    "arp",
    &[
        ("ipAddress", PropertyDefault::Null),
        ("macAddress", PropertyDefault::Null),
    ],
);

/// Static ARP entry in the `net` module of the device.
#[derive(Debug, Clone, Serialize)]
pub struct Arp {
    name: String,
    partition: String,
    #[serde(flatten)]
    properties: PropertyMap,
}

impl Arp {
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
}

impl LbstateResource for Arp {
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
        DevicePath::NetArp
    }
}

impl PartialEq for Arp {
    fn eq(&self, other: &Self) -> bool {
        self.properties_eq(other)
    }
}
