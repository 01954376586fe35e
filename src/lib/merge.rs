// SPDX-License-Identifier: Apache-2.0

use serde_json::Value;

/// Merge two declarations of the same resource, `src` taking
/// precedence.
///
/// Maps merge per key recursively. Lists follow the shape of their
/// first destination element: lists of maps merge record-wise by the
/// `name` value, lists of lists concatenate `src` before `dst`, scalar
/// lists keep all of `src` followed by the `dst` values not already in
/// `src`. Values of differing JSON types are replaced by `src`. Never
/// fails.
pub fn merge_resource(dst: &Value, src: &Value) -> Value {
    log::debug!("Merging source {src}");
    log::debug!("Merging destination {dst}");
    let ret = match (dst, src) {
        (Value::Object(dst_map), Value::Object(src_map)) => {
            let mut ret = dst_map.clone();
            for (key, src_value) in src_map {
                let merged = match dst_map.get(key) {
                    Some(dst_value) => merge_resource(dst_value, src_value),
                    None => src_value.clone(),
                };
                ret.insert(key.clone(), merged);
            }
            Value::Object(ret)
        }
        (Value::Array(dst_items), Value::Array(src_items)) => {
            Value::Array(merge_list(dst_items, src_items))
        }
        // Differing types and scalars: src wins either way.
        _ => src.clone(),
    };
    log::debug!("Merged result {ret}");
    ret
}

fn merge_list(dst: &[Value], src: &[Value]) -> Vec<Value> {
    match dst.first() {
        None => src.to_vec(),
        Some(Value::Object(_)) => merge_list_of_maps_by_name(dst, src),
        // No merging for lists of lists, only src before dst. This can
        // duplicate entries, there is no identity to dedup on.
        Some(Value::Array(_)) => {
            let mut ret = src.to_vec();
            ret.extend(dst.iter().cloned());
            ret
        }
        Some(_) => merge_list_of_scalars(dst, src),
    }
}

// Records are identified by their `name` value. All of src is kept,
// followed by the dst records whose name does not appear in src. A
// record without a name is never merged over, it is kept as is.
fn merge_list_of_maps_by_name(dst: &[Value], src: &[Value]) -> Vec<Value> {
    let src_names: Vec<&Value> =
        src.iter().filter_map(|record| record.get("name")).collect();
    let mut ret = src.to_vec();
    for record in dst {
        match record.get("name") {
            Some(name) if src_names.contains(&name) => (),
            _ => ret.push(record.clone()),
        }
    }
    ret
}

// All of src, followed by each dst value not present in src. Checking
// against src instead of the growing result keeps duplicates already
// present within dst.
fn merge_list_of_scalars(dst: &[Value], src: &[Value]) -> Vec<Value> {
    let mut ret = src.to_vec();
    for value in dst {
        if !src.contains(value) {
            ret.push(value.clone());
        }
    }
    ret
}
