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

/// Wire shape of an OS image configuration's `settings` document.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OsSettings {
    #[serde(rename = "DEFAULT")]
    pub default: OsImage,
}

impl OsSettings {
    pub fn new(image: OsImage) -> Self {
        OsSettings { default: image }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OsImage {
    /// HTTPS URI of the bootable image. Optional on the wire so updates can
    /// leave it untouched; creation requires it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_image_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_type: Option<String>,
    /// Keyword the installer prints on the console once the unattended
    /// installation finished, used to detect completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_keyword: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn image_fields_live_under_default() {
        let settings = OsSettings::new(OsImage {
            os_image_uri: Some("https://images.example.com/esxi8.iso".to_string()),
            os_type: Some("VMWARE_ESXI".to_string()),
            activation_keyword: None,
        });
        assert_eq!(
            serde_json::to_value(settings).unwrap(),
            json!({
                "DEFAULT": {
                    "osImageUri": "https://images.example.com/esxi8.iso",
                    "osType": "VMWARE_ESXI"
                }
            })
        );
    }
}
