// SPDX-License-Identifier: Apache-2.0

use crate::{LbstateError, PropertyMap};

/// Organizing collection a resource kind lives in on the managed device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DevicePath {
    LtmVirtualAddress,
    LtmNode,
    NetArp,
}

impl DevicePath {
    /// REST URI of the collection holding this resource kind.
    pub fn uri(&self) -> &'static str {
        match self {
            DevicePath::LtmVirtualAddress => "/mgmt/tm/ltm/virtual-address",
            DevicePath::LtmNode => "/mgmt/tm/ltm/node",
            DevicePath::NetArp => "/mgmt/tm/net/arp",
        }
    }
}

impl std::fmt::Display for DevicePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uri())
    }
}

/// Session to a managed device.
///
/// Implementations own the transport: authentication, timeout and retry
/// policy live behind this trait. Resource operations perform exactly one
/// call per invocation and propagate any `Err` unchanged, so errors
/// raised here reach the caller without extra wrapping.
pub trait DeviceClient {
    /// Create a new resource in the `path` collection. The payload holds
    /// the identity (`name`, `partition`) along with every declared
    /// property.
    fn create(
        &mut self,
        path: DevicePath,
        properties: &PropertyMap,
    ) -> Result<(), LbstateError>;

    /// Replace the whole named resource with `properties`. Properties
    /// absent from the payload fall back to device defaults.
    fn update(
        &mut self,
        path: DevicePath,
        name: &str,
        partition: &str,
        properties: &PropertyMap,
    ) -> Result<(), LbstateError>;

    /// Patch only the properties present in `properties`, leaving the
    /// rest of the named resource untouched.
    fn modify(
        &mut self,
        path: DevicePath,
        name: &str,
        partition: &str,
        properties: &PropertyMap,
    ) -> Result<(), LbstateError>;

    /// Remove the named resource from the device.
    fn delete(
        &mut self,
        path: DevicePath,
        name: &str,
        partition: &str,
    ) -> Result<(), LbstateError>;
}
