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
use crate::model::bios::{BiosAttributes, BiosSettings};
use crate::model::{Setting, SettingCategory, SettingResult};
use crate::settings::{to_settings_value, SettingsClient};
use crate::ComError;

/// Parameters of a new BIOS configuration template.
#[derive(Debug, Default, Clone)]
pub struct BiosTemplate {
    pub name: String,
    pub description: Option<String>,
    pub attributes: BiosAttributes,
}

impl BiosTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        BiosTemplate {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Changes to an existing BIOS template. Unset attributes keep their stored
/// values.
#[derive(Debug, Default, Clone)]
pub struct BiosUpdate {
    pub description: Option<String>,
    pub attributes: BiosAttributes,
}

impl SettingsClient {
    pub(crate) async fn create_bios(
        &self,
        template: BiosTemplate,
    ) -> Result<SettingResult, ComError> {
        let settings = to_settings_value(&BiosSettings::new(template.attributes))?;
        self.create_setting(
            &template.name,
            SettingCategory::Bios,
            template.description,
            settings,
        )
        .await
    }

    pub(crate) async fn update_bios(
        &self,
        name: &str,
        update: BiosUpdate,
    ) -> Result<SettingResult, ComError> {
        let partial = to_settings_value(&BiosSettings::new(update.attributes))?;
        self.update_setting(name, SettingCategory::Bios, update.description, partial)
            .await
    }
}

impl Setting {
    /// Typed view of a BIOS template's attribute table.
    pub fn bios_attributes(&self) -> Result<BiosAttributes, ComError> {
        let root = jsonmap::as_object(&self.settings, "settings", &self.name)?;
        let default: serde_json::Map<String, serde_json::Value> =
            jsonmap::get_typed(root, "DEFAULT", &self.name)?;
        let redfish: serde_json::Map<String, serde_json::Value> =
            jsonmap::get_typed(&default, "redfishData", &self.name)?;
        jsonmap::get_typed(&redfish, "Attributes", &self.name)
    }
}
