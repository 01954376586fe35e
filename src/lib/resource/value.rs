// SPDX-License-Identifier: Apache-2.0

use serde_json::Value;

use crate::PropertyMap;

// Canonical form used for comparison only. Arrays are sorted by the
// compact JSON text of their elements, nested containers canonicalized
// first. Sorting keeps duplicated elements, hence a repeated element
// still counts as a difference.
fn comparable_value(value: &Value) -> Value {
    match value {
        Value::Array(items) => {
            let mut ret: Vec<Value> =
                items.iter().map(comparable_value).collect();
            ret.sort_by_cached_key(|v| v.to_string());
            Value::Array(ret)
        }
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, v)| (key.clone(), comparable_value(v)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Whether two property maps declare the same device state.
///
/// Values compare by JSON equality except arrays, which compare as
/// multisets: element order carries no meaning but every occurrence
/// must be matched. The same rules apply recursively to values nested
/// inside arrays and maps. Never fails, regardless of input shape.
pub(crate) fn properties_match(a: &PropertyMap, b: &PropertyMap) -> bool {
    a.len() == b.len()
        && a.iter().all(|(key, value)| {
            b.get(key).map_or(false, |other| {
                comparable_value(value) == comparable_value(other)
            })
        })
}
