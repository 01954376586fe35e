// SPDX-License-Identifier: Apache-2.0

mod ltm;
mod net;
mod schema;
mod value;

pub use self::ltm::{Node, VirtualAddress};
pub use self::net::Arp;
pub use self::schema::{PropertyDefault, ResourceSchema};

pub(crate) use self::value::properties_match;

use serde::Serialize;
use serde_json::Value;

use crate::{DeviceClient, DevicePath, ErrorKind, LbstateError};

/// Property storage of a resource: a JSON object keyed by property name.
pub type PropertyMap = serde_json::Map<String, Value>;

pub(crate) fn validate_identity(
    name: &str,
    partition: &str,
) -> Result<(), LbstateError> {
    if name.is_empty() {
        return Err(LbstateError::new(
            ErrorKind::InvalidArgument,
            "Resource name cannot be empty".to_string(),
        ));
    }
    if partition.is_empty() {
        return Err(LbstateError::new(
            ErrorKind::InvalidArgument,
            "Resource partition cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Trait implemented by all resource kinds.
///
/// A resource is identified by its name and partition, owns a full
/// property map built from its type schema and knows the device
/// collection it belongs to. The provided `create()`, `update()` and
/// `delete()` each perform exactly one device call.
pub trait LbstateResource: std::fmt::Debug + Serialize {
    /// Declared property schema of this resource kind.
    fn schema() -> &'static ResourceSchema
    where
        Self: Sized;

    fn name(&self) -> &str;

    fn partition(&self) -> &str;

    /// Full property map, one entry per schema key.
    fn properties(&self) -> &PropertyMap;

    /// Collection on the device holding this resource kind.
    fn device_path(&self) -> DevicePath;

    /// Property keys the device refuses to change after creation.
    /// These are removed from every update payload. Default is none.
    fn immutable_properties(&self) -> &'static [&'static str] {
        &[]
    }

    fn full_path(&self) -> String {
        format!("/{}/{}", self.partition(), self.name())
    }

    /// Whether `other` declares the same device state: same name, same
    /// partition and matching properties. List-valued properties compare
    /// without regard to element order, but dropping or repeating an
    /// element is a difference.
    fn properties_eq(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.name() == other.name()
            && self.partition() == other.partition()
            && properties_match(self.properties(), other.properties())
    }

    /// Create this resource on the device. The payload carries the
    /// identity along with every declared property.
    fn create(
        &self,
        client: &mut dyn DeviceClient,
    ) -> Result<(), LbstateError> {
        let mut payload = self.properties().clone();
        payload.insert(
            "name".to_string(),
            Value::String(self.name().to_string()),
        );
        payload.insert(
            "partition".to_string(),
            Value::String(self.partition().to_string()),
        );
        log::debug!("Creating {} {}", self.device_path(), self.full_path());
        client.create(self.device_path(), &payload)
    }

    /// Push this resource's state to the device.
    ///
    /// The payload is a copy of `data` when given, otherwise of the
    /// stored properties. Immutable property keys are removed from the
    /// payload in either case, no option re-enables sending them. With
    /// `modify` the device patches only the payload keys, otherwise it
    /// replaces the whole resource.
    fn update(
        &self,
        client: &mut dyn DeviceClient,
        data: Option<&PropertyMap>,
        modify: bool,
    ) -> Result<(), LbstateError> {
        let mut payload = match data {
            Some(d) => d.clone(),
            None => self.properties().clone(),
        };
        for key in self.immutable_properties() {
            payload.remove(*key);
        }
        log::debug!(
            "Updating {} {} modify {}",
            self.device_path(),
            self.full_path(),
            modify
        );
        if modify {
            client.modify(
                self.device_path(),
                self.name(),
                self.partition(),
                &payload,
            )
        } else {
            client.update(
                self.device_path(),
                self.name(),
                self.partition(),
                &payload,
            )
        }
    }

    /// Remove this resource from the device.
    fn delete(
        &self,
        client: &mut dyn DeviceClient,
    ) -> Result<(), LbstateError> {
        log::debug!("Deleting {} {}", self.device_path(), self.full_path());
        client.delete(self.device_path(), self.name(), self.partition())
    }
}

/// Represent a configuration resource of the device.
///
/// Each kind appears three times: plain, read back from the device
/// (`Icr` prefix, iControl REST) and built from declared desired state
/// (`Api` prefix). The provenance variants carry no extra data but
/// never compare equal to each other or to the plain kind, so a
/// reconciliation pass cannot mistake one side of a diff for the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum Resource {
    VirtualAddress(Box<VirtualAddress>),
    /// Virtual address read back from the device.
    IcrVirtualAddress(Box<VirtualAddress>),
    /// Virtual address built from declared state.
    ApiVirtualAddress(Box<VirtualAddress>),
    Node(Box<Node>),
    /// Node read back from the device.
    IcrNode(Box<Node>),
    /// Node built from declared state.
    ApiNode(Box<Node>),
    Arp(Box<Arp>),
    /// ARP entry read back from the device.
    IcrArp(Box<Arp>),
    /// ARP entry built from declared state.
    ApiArp(Box<Arp>),
}

macro_rules! gen_resource_no_arg {
    ( $self:ident, $func:ident, $($variant:path,)+ ) => {
        match $self {
            $(
                $variant(r) => r.$func(),
            )+
        }
    };
}

macro_rules! gen_resource_client_func {
    ( $self:ident, $func:ident, $client:ident, $($variant:path,)+ ) => {
        match $self {
            $(
                $variant(r) => r.$func($client),
            )+
        }
    };
}

macro_rules! gen_resource_update {
    ( $self:ident, $client:ident, $data:ident, $modify:ident,
      $($variant:path,)+ ) => {
        match $self {
            $(
                $variant(r) => r.update($client, $data, $modify),
            )+
        }
    };
}

macro_rules! gen_resource_accessors {
    ( $(($func:ident, $return:ty),)+ ) => {
        $(
            pub fn $func(&self) -> $return {
                gen_resource_no_arg!(
                    self,
                    $func,
                    Self::VirtualAddress,
                    Self::IcrVirtualAddress,
                    Self::ApiVirtualAddress,
                    Self::Node,
                    Self::IcrNode,
                    Self::ApiNode,
                    Self::Arp,
                    Self::IcrArp,
                    Self::ApiArp,
                )
            }
        )+
    }
}

impl Resource {
    gen_resource_accessors!(
        (name, &str),
        (partition, &str),
        (full_path, String),
        (device_path, DevicePath),
        (properties, &PropertyMap),
        (immutable_properties, &'static [&'static str]),
    );

    pub fn create(
        &self,
        client: &mut dyn DeviceClient,
    ) -> Result<(), LbstateError> {
        gen_resource_client_func!(
            self,
            create,
            client,
            Resource::VirtualAddress,
            Resource::IcrVirtualAddress,
            Resource::ApiVirtualAddress,
            Resource::Node,
            Resource::IcrNode,
            Resource::ApiNode,
            Resource::Arp,
            Resource::IcrArp,
            Resource::ApiArp,
        )
    }

    pub fn update(
        &self,
        client: &mut dyn DeviceClient,
        data: Option<&PropertyMap>,
        modify: bool,
    ) -> Result<(), LbstateError> {
        gen_resource_update!(
            self,
            client,
            data,
            modify,
            Resource::VirtualAddress,
            Resource::IcrVirtualAddress,
            Resource::ApiVirtualAddress,
            Resource::Node,
            Resource::IcrNode,
            Resource::ApiNode,
            Resource::Arp,
            Resource::IcrArp,
            Resource::ApiArp,
        )
    }

    pub fn delete(
        &self,
        client: &mut dyn DeviceClient,
    ) -> Result<(), LbstateError> {
        gen_resource_client_func!(
            self,
            delete,
            client,
            Resource::VirtualAddress,
            Resource::IcrVirtualAddress,
            Resource::ApiVirtualAddress,
            Resource::Node,
            Resource::IcrNode,
            Resource::ApiNode,
            Resource::Arp,
            Resource::IcrArp,
            Resource::ApiArp,
        )
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(&self) {
            Ok(s) => write!(f, "{s}"),
            Err(e) => {
                log::error!("BUG: Failed to convert {self:?} into JSON: {e}");
                write!(f, "{self:?}")
            }
        }
    }
}
