// SPDX-License-Identifier: Apache-2.0

use std::net::IpAddr;
use std::str::FromStr;

use crate::{ErrorKind, LbstateError};

/// Split an `address%route-domain` string into the bare IP address and the
/// optional route domain id.
pub fn split_ip_with_route_domain(
    address: &str,
) -> Result<(IpAddr, Option<u16>), LbstateError> {
    let (ip_str, route_domain) = match address.rsplit_once('%') {
        Some((ip_str, rd_str)) => {
            let rd = rd_str.parse::<u16>().map_err(|e| {
                LbstateError::new(
                    ErrorKind::InvalidAddressFormat,
                    format!(
                        "Invalid route domain id '{rd_str}' in address \
                         '{address}': {e}"
                    ),
                )
            })?;
            (ip_str, Some(rd))
        }
        None => (address, None),
    };
    let ip = IpAddr::from_str(ip_str).map_err(|e| {
        LbstateError::new(
            ErrorKind::InvalidAddressFormat,
            format!("Invalid IP address '{ip_str}' in '{address}': {e}"),
        )
    })?;
    Ok((ip, route_domain))
}

/// Canonical `address%route-domain` form of `address`.
///
/// An address carrying no route domain takes `default_route_domain`. The
/// IP part is canonicalized by the std parser round trip, so equivalent
/// spellings (IPv6 case, zero compression) converge to one form. The
/// function is pure and idempotent on its own output.
pub fn normalize_address_with_route_domain(
    address: &str,
    default_route_domain: u16,
) -> Result<(String, u16), LbstateError> {
    let (ip, route_domain) = split_ip_with_route_domain(address)?;
    let route_domain = route_domain.unwrap_or(default_route_domain);
    Ok((format!("{ip}%{route_domain}"), route_domain))
}
