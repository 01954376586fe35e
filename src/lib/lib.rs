// SPDX-License-Identifier: Apache-2.0

mod client;
mod error;
mod merge;
mod resource;
mod route_domain;

#[cfg(test)]
mod unit_tests;

pub use self::client::{DeviceClient, DevicePath};
pub use self::error::{ErrorKind, LbstateError};
pub use self::merge::merge_resource;
pub use self::resource::{
    Arp, LbstateResource, Node, PropertyDefault, PropertyMap, Resource,
    ResourceSchema, VirtualAddress,
};
pub use self::route_domain::{
    normalize_address_with_route_domain, split_ip_with_route_domain,
};
