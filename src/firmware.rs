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
use crate::model::firmware::FirmwareSettings;
use crate::model::{Setting, SettingCategory, SettingResult};
use crate::settings::{to_settings_value, SettingsClient};
use crate::ComError;

/// Parameters of a new firmware baseline.
#[derive(Debug, Default, Clone)]
pub struct FirmwareTemplate {
    pub name: String,
    pub description: Option<String>,
    pub baselines: FirmwareSettings,
}

impl FirmwareTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        FirmwareTemplate {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Changes to an existing firmware baseline. Generations left unset keep
/// their stored bundle pin.
#[derive(Debug, Default, Clone)]
pub struct FirmwareUpdate {
    pub description: Option<String>,
    pub baselines: FirmwareSettings,
}

impl SettingsClient {
    pub(crate) async fn create_firmware(
        &self,
        template: FirmwareTemplate,
    ) -> Result<SettingResult, ComError> {
        let settings = to_settings_value(&template.baselines)?;
        self.create_setting(
            &template.name,
            SettingCategory::Firmware,
            template.description,
            settings,
        )
        .await
    }

    pub(crate) async fn update_firmware(
        &self,
        name: &str,
        update: FirmwareUpdate,
    ) -> Result<SettingResult, ComError> {
        let partial = to_settings_value(&update.baselines)?;
        self.update_setting(name, SettingCategory::Firmware, update.description, partial)
            .await
    }
}

impl Setting {
    /// Typed view of a firmware baseline's per-generation bundle pins.
    pub fn firmware_baselines(&self) -> Result<FirmwareSettings, ComError> {
        serde_json::from_value(self.settings.clone()).map_err(|_| ComError::InvalidKeyType {
            key: "settings".to_string(),
            expected_type: "firmware baseline document".to_string(),
            context: self.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::firmware::BundleRef;
    use serde_json::json;

    #[test]
    fn stored_baseline_reads_back_typed() {
        let setting: Setting = serde_json::from_value(json!({
            "id": "fw-3",
            "name": "prod-baseline",
            "category": "FIRMWARE",
            "settings": {"GEN10": {"id": "2023.10.00.00"}, "GEN11": {"id": "2024.04.00.01"}}
        }))
        .unwrap();
        let baselines = setting.firmware_baselines().unwrap();
        assert_eq!(baselines.gen10, Some(BundleRef::new("2023.10.00.00")));
        assert_eq!(baselines.gen12, None);
    }
}
