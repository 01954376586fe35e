// SPDX-License-Identifier: Apache-2.0

mod node;

use crate::{DeviceClient, DevicePath, LbstateError, PropertyMap};

// Allow log output to show up if a test fails.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DeviceCall {
    Create {
        path: DevicePath,
        properties: PropertyMap,
    },
    Update {
        path: DevicePath,
        name: String,
        partition: String,
        properties: PropertyMap,
    },
    Modify {
        path: DevicePath,
        name: String,
        partition: String,
        properties: PropertyMap,
    },
    Delete {
        path: DevicePath,
        name: String,
        partition: String,
    },
}

/// Device client recording every call, optionally failing them all.
#[derive(Debug, Default)]
pub(crate) struct FakeDeviceClient {
    pub(crate) calls: Vec<DeviceCall>,
    pub(crate) fail_with: Option<LbstateError>,
}

impl FakeDeviceClient {
    pub(crate) fn failing(error: LbstateError) -> Self {
        Self {
            calls: Vec::new(),
            fail_with: Some(error),
        }
    }

    fn check_failure(&self) -> Result<(), LbstateError> {
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

impl DeviceClient for FakeDeviceClient {
    fn create(
        &mut self,
        path: DevicePath,
        properties: &PropertyMap,
    ) -> Result<(), LbstateError> {
        self.check_failure()?;
        self.calls.push(DeviceCall::Create {
            path,
            properties: properties.clone(),
        });
        Ok(())
    }

    fn update(
        &mut self,
        path: DevicePath,
        name: &str,
        partition: &str,
        properties: &PropertyMap,
    ) -> Result<(), LbstateError> {
        self.check_failure()?;
        self.calls.push(DeviceCall::Update {
            path,
            name: name.to_string(),
            partition: partition.to_string(),
            properties: properties.clone(),
        });
        Ok(())
    }

    fn modify(
        &mut self,
        path: DevicePath,
        name: &str,
        partition: &str,
        properties: &PropertyMap,
    ) -> Result<(), LbstateError> {
        self.check_failure()?;
        self.calls.push(DeviceCall::Modify {
            path,
            name: name.to_string(),
            partition: partition.to_string(),
            properties: properties.clone(),
        });
        Ok(())
    }

    fn delete(
        &mut self,
        path: DevicePath,
        name: &str,
        partition: &str,
    ) -> Result<(), LbstateError> {
        self.check_failure()?;
        self.calls.push(DeviceCall::Delete {
            path,
            name: name.to_string(),
            partition: partition.to_string(),
        });
        Ok(())
    }
}
