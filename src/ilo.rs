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
use crate::jsonmap;
use crate::model::ilo::{IloDefault, IloSettings};
use crate::model::{Setting, SettingCategory, SettingResult};
use crate::settings::{to_settings_value, SettingsClient};
use crate::ComError;

/// Parameters of a new iLO settings template.
#[derive(Debug, Default, Clone)]
pub struct IloTemplate {
    pub name: String,
    pub description: Option<String>,
    pub settings: IloDefault,
}

impl IloTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        IloTemplate {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Changes to an existing iLO settings template. Protocols and account
/// service fields left unset keep their stored values.
#[derive(Debug, Default, Clone)]
pub struct IloUpdate {
    pub description: Option<String>,
    pub settings: IloDefault,
}

impl SettingsClient {
    pub(crate) async fn create_ilo(&self, template: IloTemplate) -> Result<SettingResult, ComError> {
        let settings = to_settings_value(&IloSettings::new(template.settings))?;
        self.create_setting(
            &template.name,
            SettingCategory::IloSettings,
            template.description,
            settings,
        )
        .await
    }

    pub(crate) async fn update_ilo(
        &self,
        name: &str,
        update: IloUpdate,
    ) -> Result<SettingResult, ComError> {
        let partial = to_settings_value(&IloSettings::new(update.settings))?;
        self.update_setting(
            name,
            SettingCategory::IloSettings,
            update.description,
            partial,
        )
        .await
    }
}

impl Setting {
    /// Typed view of an iLO template's `Default` document.
    pub fn ilo_settings(&self) -> Result<IloDefault, ComError> {
        let root = jsonmap::as_object(&self.settings, "settings", &self.name)?;
        jsonmap::get_typed(root, "Default", &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ilo::ProtocolSetting;
    use serde_json::json;

    #[test]
    fn stored_protocol_table_reads_back_typed() {
        let setting: Setting = serde_json::from_value(json!({
            "id": "ilo-9",
            "name": "locked-down-ilo",
            "category": "ILO_SETTINGS",
            "settings": {
                "Default": {
                    "NetworkProtocol": {
                        "IPMI": {"ProtocolEnabled": false},
                        "SSH": {"ProtocolEnabled": true, "Port": 22}
                    }
                }
            }
        }))
        .unwrap();
        let ilo = setting.ilo_settings().unwrap();
        let protocols = ilo.network_protocol.unwrap();
        assert_eq!(
            protocols.ipmi,
            Some(ProtocolSetting {
                protocol_enabled: Some(false),
                port: None
            })
        );
        assert_eq!(protocols.ssh.unwrap().port, Some(22));
    }
}
