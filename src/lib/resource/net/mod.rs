// SPDX-License-Identifier: Apache-2.0

mod arp;

pub use self::arp::Arp;
