//! Recursive merge of a partial-update document onto a base document.

use serde_json::Value;

/// Apply `update` onto `base` in place.
///
/// Object-into-object recurses per key. Any other pairing overwrites:
/// scalar over object, object over scalar, array over anything, and new
/// keys are added. There is no deletion -- keys present in the base but
/// absent from the update are left untouched.
pub fn deep_merge(base: &mut Value, update: Value) {
    match (base, update) {
        (Value::Object(base_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                match base_map.get_mut(&key) {
                    Some(existing) if existing.is_object() && value.is_object() => {
                        deep_merge(existing, value);
                    }
                    Some(existing) => *existing = value,
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, update) => *base = update,
    }
}
