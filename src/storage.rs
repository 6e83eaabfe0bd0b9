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
use crate::model::storage::{StorageDefault, StorageSettings, Volume};
use crate::model::{Setting, SettingCategory, SettingResult};
use crate::settings::{to_settings_value, SettingsClient};
use crate::ComError;

/// Parameters of a new storage (RAID volume) template.
#[derive(Debug, Default, Clone)]
pub struct StorageTemplate {
    pub name: String,
    pub description: Option<String>,
    pub volumes: Vec<Volume>,
}

impl StorageTemplate {
    pub fn new(name: impl Into<String>, volumes: Vec<Volume>) -> Self {
        StorageTemplate {
            name: name.into(),
            description: None,
            volumes,
        }
    }
}

/// Changes to an existing storage template. `volumes` replaces the stored
/// volume list wholesale when set (merge-patch replaces arrays).
#[derive(Debug, Default, Clone)]
pub struct StorageUpdate {
    pub description: Option<String>,
    pub volumes: Option<Vec<Volume>>,
}

impl SettingsClient {
    pub(crate) async fn create_storage(
        &self,
        template: StorageTemplate,
    ) -> Result<SettingResult, ComError> {
        let settings = to_settings_value(&StorageSettings::new(template.volumes))?;
        self.create_setting(
            &template.name,
            SettingCategory::Storage,
            template.description,
            settings,
        )
        .await
    }

    pub(crate) async fn update_storage(
        &self,
        name: &str,
        update: StorageUpdate,
    ) -> Result<SettingResult, ComError> {
        let partial = match update.volumes {
            Some(volumes) => to_settings_value(&StorageSettings::new(volumes))?,
            None => serde_json::json!({}),
        };
        self.update_setting(name, SettingCategory::Storage, update.description, partial)
            .await
    }
}

impl Setting {
    /// Typed view of a storage template's volume list.
    pub fn volumes(&self) -> Result<Vec<Volume>, ComError> {
        let root = jsonmap::as_object(&self.settings, "settings", &self.name)?;
        let default: StorageDefault = jsonmap::get_typed(root, "DEFAULT", &self.name)?;
        Ok(default.volumes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::storage::RaidType;
    use serde_json::json;

    #[test]
    fn stored_volumes_read_back_typed() {
        let setting: Setting = serde_json::from_value(json!({
            "id": "st-2",
            "name": "db-raid",
            "category": "STORAGE",
            "settings": {"DEFAULT": {"volumes": [
                {"raidType": "RAID10", "driveCount": 4, "spareDrive": true}
            ]}}
        }))
        .unwrap();
        let volumes = setting.volumes().unwrap();
        assert_eq!(volumes.len(), 1);
        assert_eq!(volumes[0].raid_type, RaidType::Raid10);
        assert_eq!(volumes[0].spare_drive, Some(true));
    }
}
