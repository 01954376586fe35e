// SPDX-License-Identifier: Apache-2.0

use serde_json::Value;

use crate::{ErrorKind, LbstateError, PropertyMap};

/// Default value a schema assigns to a property the caller left out.
///
/// Const-constructible so per-type schemas can live in `static` tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyDefault {
    Null,
    Bool(bool),
    Uint(u64),
    Str(&'static str),
    EmptyList,
    EmptyMap,
}

impl PropertyDefault {
    pub fn to_value(&self) -> Value {
        match self {
            PropertyDefault::Null => Value::Null,
            PropertyDefault::Bool(b) => Value::Bool(*b),
            PropertyDefault::Uint(u) => Value::from(*u),
            PropertyDefault::Str(s) => Value::String(s.to_string()),
            PropertyDefault::EmptyList => Value::Array(Vec::new()),
            PropertyDefault::EmptyMap => Value::Object(PropertyMap::new()),
        }
    }
}

/// Declared property set of a resource kind.
///
/// The schema is an immutable per-type constant. It decides which property
/// keys a resource carries and what each one holds when the caller does
/// not supply it. Nothing at the type level is ever mutated, so resources
/// built from the same schema always carry the same key set.
#[derive(Debug, Clone, Copy)]
pub struct ResourceSchema {
    kind: &'static str,
    properties: &'static [(&'static str, PropertyDefault)],
}

impl ResourceSchema {
    pub const fn new(
        kind: &'static str,
        properties: &'static [(&'static str, PropertyDefault)],
    ) -> Self {
        Self { kind, properties }
    }

    /// Resource kind this schema belongs to, e.g. `virtual-address`.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn contains(&self, key: &str) -> bool {
        self.properties.iter().any(|(k, _)| *k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties.iter().map(|(k, _)| *k)
    }

    /// Full property map of this schema's defaults with `supplied` values
    /// overriding per key. A supplied key outside the schema fails the
    /// whole build with [ErrorKind::SchemaViolation].
    pub fn build(
        &self,
        supplied: &PropertyMap,
    ) -> Result<PropertyMap, LbstateError> {
        for key in supplied.keys() {
            if !self.contains(key) {
                return Err(LbstateError::new(
                    ErrorKind::SchemaViolation,
                    format!(
                        "Property '{key}' is not defined in the schema of \
                         {} resource",
                        self.kind
                    ),
                ));
            }
        }
        let mut ret = PropertyMap::new();
        for (key, default) in self.properties {
            let value = match supplied.get(*key) {
                Some(v) => v.clone(),
                None => default.to_value(),
            };
            ret.insert(key.to_string(), value);
        }
        Ok(ret)
    }
}
