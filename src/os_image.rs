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
use crate::model::os::{OsImage, OsSettings};
use crate::model::{Setting, SettingCategory, SettingResult};
use crate::settings::{to_settings_value, SettingsClient};
use crate::ComError;

/// Parameters of a new OS image configuration.
#[derive(Debug, Clone)]
pub struct OsTemplate {
    pub name: String,
    pub description: Option<String>,
    pub image: OsImage,
}

impl OsTemplate {
    pub fn new(name: impl Into<String>, os_image_uri: impl Into<String>) -> Self {
        OsTemplate {
            name: name.into(),
            description: None,
            image: OsImage {
                os_image_uri: Some(os_image_uri.into()),
                ..Default::default()
            },
        }
    }
}

/// Changes to an existing OS image configuration.
#[derive(Debug, Default, Clone)]
pub struct OsUpdate {
    pub description: Option<String>,
    pub image: OsImage,
}

impl SettingsClient {
    pub(crate) async fn create_os(&self, template: OsTemplate) -> Result<SettingResult, ComError> {
        let settings = to_settings_value(&OsSettings::new(template.image))?;
        self.create_setting(
            &template.name,
            SettingCategory::Os,
            template.description,
            settings,
        )
        .await
    }

    pub(crate) async fn update_os(
        &self,
        name: &str,
        update: OsUpdate,
    ) -> Result<SettingResult, ComError> {
        let partial = to_settings_value(&OsSettings::new(update.image))?;
        self.update_setting(name, SettingCategory::Os, update.description, partial)
            .await
    }
}

impl Setting {
    /// Typed view of an OS configuration's image document.
    pub fn os_image(&self) -> Result<OsImage, ComError> {
        let root = jsonmap::as_object(&self.settings, "settings", &self.name)?;
        jsonmap::get_typed(root, "DEFAULT", &self.name)
    }
}
