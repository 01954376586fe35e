// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Please report this as bug to upstream
    Bug,
    /// Invalid argument
    InvalidArgument,
    /// Property key outside the declared resource schema
    SchemaViolation,
    /// Address not in `ip` or `ip%route-domain` form
    InvalidAddressFormat,
    /// Resource already exists on the device
    ResourceConflict,
    /// Resource not found on the device
    ResourceNotFound,
    /// Device rejected or failed a create/update/modify/delete request
    DeviceSyncFailure,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ErrorKind::Bug => "bug",
                ErrorKind::InvalidArgument => "invalid-argument",
                ErrorKind::SchemaViolation => "schema-violation",
                ErrorKind::InvalidAddressFormat => "invalid-address-format",
                ErrorKind::ResourceConflict => "resource-conflict",
                ErrorKind::ResourceNotFound => "resource-not-found",
                ErrorKind::DeviceSyncFailure => "device-sync-failure",
            }
        )
    }
}

// Try not implement From for LbstateError here unless you are sure the
// source error should always convert to certain type of ErrorKind. Device
// client implementations and construction sites know better which kind a
// failure belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct LbstateError {
    pub kind: ErrorKind,
    pub msg: String,
}

impl LbstateError {
    pub fn new(kind: ErrorKind, msg: String) -> Self {
        Self { kind, msg }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }
}

impl std::fmt::Display for LbstateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl std::error::Error for LbstateError {}

impl From<serde_json::Error> for LbstateError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(ErrorKind::Bug, format!("serde_json::Error: {e}"))
    }
}
