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
use serde::Serialize;
use tracing::debug;

use crate::bios::{BiosTemplate, BiosUpdate};
use crate::firmware::{FirmwareTemplate, FirmwareUpdate};
use crate::ilo::{IloTemplate, IloUpdate};
use crate::jsonmap;
use crate::model::{Setting, SettingCategory, SettingResult, SettingsPage};
use crate::network::ComHttpClient;
use crate::os_image::{OsTemplate, OsUpdate};
use crate::storage::{StorageTemplate, StorageUpdate};
use crate::{ComError, ComSettings};

const SETTINGS_API: &str = "settings";

// Single quotes delimit string literals in the filter grammar and are
// escaped by doubling. Category names come from a fixed enum and never
// need this; setting names are caller input.
fn filter_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Serializes a category-shaped settings document into the JSON value the
/// generic create/update paths work with.
pub(crate) fn to_settings_value<T>(doc: &T) -> Result<serde_json::Value, ComError>
where
    T: Serialize + ::std::fmt::Debug,
{
    serde_json::to_value(doc).map_err(|e| ComError::JsonSerializeError {
        url: SETTINGS_API.to_string(),
        object_debug: format!("{doc:?}"),
        source: e,
    })
}

/// POST body for a new settings resource.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewSetting {
    pub name: String,
    pub category: SettingCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub settings: serde_json::Value,
}

/// PATCH body for an existing settings resource. `settings` is the stored
/// document with the caller's changes merged in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateSetting {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub settings: serde_json::Value,
}

/// The settings operations of one region, all going through the shared
/// request helper in `network`.
pub struct SettingsClient {
    pub(crate) client: ComHttpClient,
    region: String,
}

impl SettingsClient {
    pub fn new(client: ComHttpClient, region: &str) -> Self {
        SettingsClient {
            client,
            region: region.to_string(),
        }
    }

    pub(crate) fn region_name(&self) -> &str {
        &self.region
    }

    /// Walks the paged collection until `total` is reached.
    pub(crate) async fn list(
        &self,
        category: Option<SettingCategory>,
    ) -> Result<Vec<Setting>, ComError> {
        let mut items = Vec::new();
        let mut offset: u64 = 0;
        loop {
            let mut query: Vec<(&str, String)> = vec![("offset", offset.to_string())];
            if let Some(category) = category {
                query.push(("filter", format!("category eq '{category}'")));
            }
            let (_status, page): (_, SettingsPage) = self.client.get(SETTINGS_API, &query).await?;
            let count = page.count;
            items.extend(page.items);
            offset += count;
            if count == 0 || offset >= page.total {
                break;
            }
        }
        Ok(items)
    }

    pub(crate) async fn find_by_name(&self, name: &str) -> Result<Option<Setting>, ComError> {
        let query = vec![("filter", format!("name eq '{}'", filter_literal(name)))];
        let (_status, page): (_, SettingsPage) = self.client.get(SETTINGS_API, &query).await?;
        // The filter is exact-match, but don't trust the server blindly.
        Ok(page.items.into_iter().find(|s| s.name == name))
    }

    /// Check-if-exists, then POST. An existing name is a warning, not an
    /// API call.
    pub(crate) async fn create_setting(
        &self,
        name: &str,
        category: SettingCategory,
        description: Option<String>,
        settings: serde_json::Value,
    ) -> Result<SettingResult, ComError> {
        if self.find_by_name(name).await?.is_some() {
            debug!("{category} setting {name} already present in {}", self.region);
            return Ok(SettingResult::warning(
                name,
                &self.region,
                format!("{category} setting already exists in region, nothing changed"),
            ));
        }
        let payload = NewSetting {
            name: name.to_string(),
            category,
            description,
            settings,
        };
        match self.client.post(SETTINGS_API, payload).await {
            Ok(_status) => Ok(SettingResult::complete(
                name,
                &self.region,
                format!("{category} setting created"),
            )),
            Err(e @ ComError::ApiError { .. }) => Ok(SettingResult::failed(
                name,
                &self.region,
                format!("{category} setting could not be created"),
                Some(e.to_string()),
            )),
            Err(e) => Err(e),
        }
    }

    /// Fetch-merge-write: unset parameters fall back to the stored values,
    /// then the merged document is PATCHed.
    pub(crate) async fn update_setting(
        &self,
        name: &str,
        category: SettingCategory,
        description: Option<String>,
        partial: serde_json::Value,
    ) -> Result<SettingResult, ComError> {
        let current = match self.find_by_name(name).await? {
            Some(setting) => setting,
            None => {
                return Ok(SettingResult::failed(
                    name,
                    &self.region,
                    "no setting with this name in the region",
                    None,
                ));
            }
        };
        if current.category != category {
            let err = ComError::CategoryMismatch {
                name: name.to_string(),
                expected: category.to_string(),
                actual: current.category.to_string(),
            };
            return Ok(SettingResult::failed(
                name,
                &self.region,
                format!("{category} setting could not be updated"),
                Some(err.to_string()),
            ));
        }
        let mut merged = current.settings.clone();
        jsonmap::merge(&mut merged, &partial);
        let body = UpdateSetting {
            name: name.to_string(),
            description: description.or(current.description),
            settings: merged,
        };
        let api = format!("{SETTINGS_API}/{}", current.id);
        match self.client.patch(&api, body).await {
            Ok(_status) => Ok(SettingResult::complete(
                name,
                &self.region,
                format!("{category} setting updated"),
            )),
            Err(e @ ComError::ApiError { .. }) => Ok(SettingResult::failed(
                name,
                &self.region,
                format!("{category} setting could not be updated"),
                Some(e.to_string()),
            )),
            Err(e) => Err(e),
        }
    }

    pub(crate) async fn remove(&self, name: &str) -> Result<SettingResult, ComError> {
        let current = match self.find_by_name(name).await? {
            Some(setting) => setting,
            None => {
                return Ok(SettingResult::failed(
                    name,
                    &self.region,
                    "no setting with this name in the region",
                    None,
                ));
            }
        };
        let api = format!("{SETTINGS_API}/{}", current.id);
        match self.client.delete(&api).await {
            Ok(_status) => Ok(SettingResult::complete(
                name,
                &self.region,
                format!("{} setting deleted", current.category),
            )),
            Err(e @ ComError::ApiError { .. }) => Ok(SettingResult::failed(
                name,
                &self.region,
                format!("{} setting could not be deleted", current.category),
                Some(e.to_string()),
            )),
            Err(e) => Err(e),
        }
    }
}

#[async_trait::async_trait]
impl ComSettings for SettingsClient {
    fn region(&self) -> &str {
        self.region_name()
    }

    async fn get_settings(
        &self,
        category: Option<SettingCategory>,
    ) -> Result<Vec<Setting>, ComError> {
        self.list(category).await
    }

    async fn get_setting(&self, name: &str) -> Result<Setting, ComError> {
        self.find_by_name(name)
            .await?
            .ok_or_else(|| ComError::SettingNotFound(name.to_string()))
    }

    async fn delete_setting(&self, name: &str) -> Result<SettingResult, ComError> {
        self.remove(name).await
    }

    async fn new_bios_setting(&self, template: BiosTemplate) -> Result<SettingResult, ComError> {
        self.create_bios(template).await
    }

    async fn set_bios_setting(
        &self,
        name: &str,
        update: BiosUpdate,
    ) -> Result<SettingResult, ComError> {
        self.update_bios(name, update).await
    }

    async fn new_ilo_setting(&self, template: IloTemplate) -> Result<SettingResult, ComError> {
        self.create_ilo(template).await
    }

    async fn set_ilo_setting(
        &self,
        name: &str,
        update: IloUpdate,
    ) -> Result<SettingResult, ComError> {
        self.update_ilo(name, update).await
    }

    async fn new_firmware_setting(
        &self,
        template: FirmwareTemplate,
    ) -> Result<SettingResult, ComError> {
        self.create_firmware(template).await
    }

    async fn set_firmware_setting(
        &self,
        name: &str,
        update: FirmwareUpdate,
    ) -> Result<SettingResult, ComError> {
        self.update_firmware(name, update).await
    }

    async fn new_os_setting(&self, template: OsTemplate) -> Result<SettingResult, ComError> {
        self.create_os(template).await
    }

    async fn set_os_setting(
        &self,
        name: &str,
        update: OsUpdate,
    ) -> Result<SettingResult, ComError> {
        self.update_os(name, update).await
    }

    async fn new_storage_setting(
        &self,
        template: StorageTemplate,
    ) -> Result<SettingResult, ComError> {
        self.create_storage(template).await
    }

    async fn set_storage_setting(
        &self,
        name: &str,
        update: StorageUpdate,
    ) -> Result<SettingResult, ComError> {
        self.update_storage(name, update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_literal_doubles_single_quotes() {
        assert_eq!(filter_literal("web-bios"), "web-bios");
        assert_eq!(filter_literal("o'brien's bios"), "o''brien''s bios");
    }
}
