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
use serde::{Deserialize, Serialize};

use crate::model::EnabledDisabled;

/// Wire shape of a BIOS template's `settings` document:
/// `DEFAULT.redfishData.Attributes.{AttributeName}`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BiosSettings {
    #[serde(rename = "DEFAULT")]
    pub default: BiosDefault,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BiosDefault {
    #[serde(rename = "redfishData")]
    pub redfish_data: RedfishData,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RedfishData {
    #[serde(rename = "Attributes")]
    pub attributes: BiosAttributes,
}

impl BiosSettings {
    pub fn new(attributes: BiosAttributes) -> Self {
        BiosSettings {
            default: BiosDefault {
                redfish_data: RedfishData { attributes },
            },
        }
    }
}

/// The commonly managed iLO/UEFI BIOS attributes, by their Redfish attribute
/// names. Anything not covered goes through `other` verbatim.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct BiosAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sriov: Option<EnabledDisabled>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proc_virtualization: Option<EnabledDisabled>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proc_turbo: Option<EnabledDisabled>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proc_hyperthreading: Option<EnabledDisabled>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_regulator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermal_config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asr_status: Option<EnabledDisabled>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asr_timeout_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usb_boot: Option<EnabledDisabled>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_f1_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedded_serial_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_serial_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_console_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_console_baud_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_console_emulation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tpm_visibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tpm2_operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_boot_status: Option<EnabledDisabled>,
    /// Pass-through for attributes without a typed field.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_attributes_stay_out_of_the_payload() {
        let attributes = BiosAttributes {
            workload_profile: Some("Virtualization-MaxPerformance".to_string()),
            sriov: Some(EnabledDisabled::Enabled),
            ..Default::default()
        };
        let doc = serde_json::to_value(BiosSettings::new(attributes)).unwrap();
        assert_eq!(
            doc,
            json!({
                "DEFAULT": {
                    "redfishData": {
                        "Attributes": {
                            "WorkloadProfile": "Virtualization-MaxPerformance",
                            "Sriov": "Enabled"
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn unknown_attributes_flow_through_other() {
        let mut attributes = BiosAttributes::default();
        attributes
            .other
            .insert("CustomPostMessage".to_string(), json!("hello"));
        let doc = serde_json::to_value(BiosSettings::new(attributes)).unwrap();
        assert_eq!(
            doc["DEFAULT"]["redfishData"]["Attributes"]["CustomPostMessage"],
            json!("hello")
        );
    }
}
