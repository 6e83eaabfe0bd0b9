/*
 * SPDX-License-Identifier: MIT
 *
 * Permission is hereby granted, free of charge, to any person obtaining a
 * copy of this software and associated documentation files (the "Software"),
 * to deal in the Software without restriction, including without limitation
 * the rights to use, copy, modify, merge, publish, distribute, sublicense,
 * and/or sell copies of the Software, and to permit persons to whom the
 * Software is furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in
 * all copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL
 * THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
 * FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
 * DEALINGS IN THE SOFTWARE.
 */

// jsonmap.rs
// Helper functions for digging typed values out of the free-form `settings`
// documents that COM stores per category, and for the merge step of the
// fetch-merge-write update path.

use std::any::type_name;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ComError;

// JsonMap abstracts over serde_json::Map and HashMap so the extraction
// helpers work with both.
pub trait JsonMap {
    fn get_value(&self, key: &str) -> Option<&Value>;

    fn remove_value(&mut self, key: &str) -> Option<Value>;
}

impl JsonMap for serde_json::Map<String, Value> {
    fn get_value(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn remove_value(&mut self, key: &str) -> Option<Value> {
        self.remove(key)
    }
}

impl JsonMap for HashMap<String, Value> {
    fn get_value(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn remove_value(&mut self, key: &str) -> Option<Value> {
        self.remove(key)
    }
}

fn missing_key_error(key: &str, context: &str) -> ComError {
    ComError::MissingKey {
        key: key.to_string(),
        context: context.to_string(),
    }
}

fn invalid_type_error(key: &str, expected_type: &str, context: &str) -> ComError {
    ComError::InvalidKeyType {
        key: key.to_string(),
        expected_type: expected_type.to_string(),
        context: context.to_string(),
    }
}

// get_typed extracts the value under `key` and deserializes it into T.
// `context` names the setting being read, for error messages.
pub fn get_typed<M, T>(map: &M, key: &str, context: &str) -> Result<T, ComError>
where
    M: JsonMap,
    T: DeserializeOwned,
{
    let value = map
        .get_value(key)
        .ok_or_else(|| missing_key_error(key, context))?;
    serde_json::from_value(value.clone())
        .map_err(|_| invalid_type_error(key, type_name::<T>(), context))
}

// as_object views a settings document as a JSON object, or reports which
// setting carried the malformed document.
pub fn as_object<'a>(
    value: &'a Value,
    key: &str,
    context: &str,
) -> Result<&'a serde_json::Map<String, Value>, ComError> {
    value
        .as_object()
        .ok_or_else(|| invalid_type_error(key, "object", context))
}

// merge applies `patch` onto `base` with JSON merge-patch (RFC 7386)
// semantics: objects merge key-wise, null deletes, everything else replaces.
pub fn merge(base: &mut Value, patch: &Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                if patch_value.is_null() {
                    base_map.remove_value(key);
                } else {
                    merge(
                        base_map.entry(key.clone()).or_insert(Value::Null),
                        patch_value,
                    );
                }
            }
        }
        (base_slot, patch_value) => *base_slot = patch_value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_typed_reads_nested_documents() {
        let doc = json!({"DEFAULT": {"redfishData": {"Attributes": {"Sriov": "Enabled"}}}});
        let root = doc.as_object().unwrap();
        let default: serde_json::Map<String, Value> =
            get_typed(root, "DEFAULT", "unit-test").unwrap();
        let redfish: serde_json::Map<String, Value> =
            get_typed(&default, "redfishData", "unit-test").unwrap();
        let attrs: HashMap<String, String> = get_typed(&redfish, "Attributes", "unit-test").unwrap();
        assert_eq!(attrs["Sriov"], "Enabled");
    }

    #[test]
    fn get_typed_reports_missing_and_mistyped_keys() {
        let doc = json!({"Port": "not-a-number"});
        let root = doc.as_object().unwrap();
        match get_typed::<_, u16>(root, "Gone", "web-bios") {
            Err(ComError::MissingKey { key, context }) => {
                assert_eq!(key, "Gone");
                assert_eq!(context, "web-bios");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            get_typed::<_, u16>(root, "Port", "web-bios"),
            Err(ComError::InvalidKeyType { .. })
        ));
    }

    #[test]
    fn merge_overrides_only_patched_keys() {
        let mut base = json!({
            "Default": {
                "NetworkProtocol": {
                    "SSH": {"ProtocolEnabled": true, "Port": 22},
                    "IPMI": {"ProtocolEnabled": false}
                }
            }
        });
        let patch = json!({
            "Default": {"NetworkProtocol": {"SSH": {"Port": 2222}}}
        });
        merge(&mut base, &patch);
        assert_eq!(
            base,
            json!({
                "Default": {
                    "NetworkProtocol": {
                        "SSH": {"ProtocolEnabled": true, "Port": 2222},
                        "IPMI": {"ProtocolEnabled": false}
                    }
                }
            })
        );
    }

    #[test]
    fn merge_null_deletes_and_arrays_replace() {
        let mut base = json!({"volumes": [{"raidType": "RAID1"}], "note": "keep"});
        let patch = json!({"volumes": [{"raidType": "RAID5"}, {"raidType": "RAID0"}], "note": null});
        merge(&mut base, &patch);
        assert_eq!(
            base,
            json!({"volumes": [{"raidType": "RAID5"}, {"raidType": "RAID0"}]})
        );
    }
}
