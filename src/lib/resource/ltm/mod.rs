// SPDX-License-Identifier: Apache-2.0

mod node;
mod virtual_address;

pub use self::node::Node;
pub use self::virtual_address::VirtualAddress;

use serde_json::Value;

use crate::{
    normalize_address_with_route_domain, ErrorKind, LbstateError, PropertyMap,
};

// Canonical form of the `address` property, or None when the property
// is absent or null. Any other non-string value is rejected.
pub(crate) fn normalized_address_property(
    properties: &PropertyMap,
    default_route_domain: u16,
) -> Result<Option<String>, LbstateError> {
    match properties.get("address") {
        Some(Value::String(address)) => Ok(Some(
            normalize_address_with_route_domain(address, default_route_domain)?
                .0,
        )),
        Some(Value::Null) | None => Ok(None),
        Some(value) => Err(LbstateError::new(
            ErrorKind::InvalidAddressFormat,
            format!("Invalid address {value}, expecting a string"),
        )),
    }
}
