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
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub mod bios;
pub mod firmware;
pub mod ilo;
pub mod os;
pub mod storage;

/// The settings categories COM stores under the shared `settings` collection.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
pub enum SettingCategory {
    #[serde(rename = "BIOS")]
    Bios,
    #[serde(rename = "FIRMWARE")]
    Firmware,
    #[serde(rename = "OS")]
    Os,
    #[serde(rename = "STORAGE")]
    Storage,
    #[serde(rename = "ILO_SETTINGS")]
    IloSettings,
}

impl SettingCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SettingCategory::Bios => "BIOS",
            SettingCategory::Firmware => "FIRMWARE",
            SettingCategory::Os => "OS",
            SettingCategory::Storage => "STORAGE",
            SettingCategory::IloSettings => "ILO_SETTINGS",
        }
    }
}

impl fmt::Display for SettingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BIOS" => Ok(SettingCategory::Bios),
            "FIRMWARE" => Ok(SettingCategory::Firmware),
            "OS" => Ok(SettingCategory::Os),
            "STORAGE" => Ok(SettingCategory::Storage),
            "ILO_SETTINGS" => Ok(SettingCategory::IloSettings),
            other => Err(format!("unknown setting category {other}")),
        }
    }
}

/// One server-settings resource as COM returns it. The `settings` document is
/// category-shaped; the typed accessors live next to each category's
/// operations (`Setting::bios_attributes` etc).
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub id: String,
    pub name: String,
    pub category: SettingCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub settings: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// One page of the settings collection.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPage {
    pub offset: u64,
    pub count: u64,
    pub total: u64,
    pub items: Vec<Setting>,
}

/// Body COM sends with non-2xx responses.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub error_code: Option<String>,
}

impl ApiErrorBody {
    pub fn into_message(self) -> Option<String> {
        match (self.message, self.error_code) {
            (Some(m), Some(c)) => Some(format!("{m} ({c})")),
            (Some(m), None) => Some(m),
            (None, Some(c)) => Some(c),
            (None, None) => None,
        }
    }
}

/// Two-state setting values, written as "Enabled"/"Disabled" on the wire.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
pub enum EnabledDisabled {
    Enabled,
    Disabled,
}

impl EnabledDisabled {
    pub fn is_enabled(self) -> bool {
        self == EnabledDisabled::Enabled
    }

    /// The iLO NetworkProtocol documents want booleans where the template
    /// parameters speak Enabled/Disabled.
    pub fn as_bool(self) -> bool {
        self.is_enabled()
    }
}

impl From<bool> for EnabledDisabled {
    fn from(enabled: bool) -> Self {
        if enabled {
            EnabledDisabled::Enabled
        } else {
            EnabledDisabled::Disabled
        }
    }
}

impl fmt::Display for EnabledDisabled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Outcome of one mutating operation.
#[derive(Debug, Serialize, Copy, Clone, Eq, PartialEq)]
pub enum OpStatus {
    Complete,
    Failed,
    Warning,
}

impl fmt::Display for OpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Uniform status object returned by every create/update/delete operation.
#[derive(Debug, Serialize, Clone)]
pub struct SettingResult {
    pub name: String,
    pub region: String,
    pub status: OpStatus,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
}

impl SettingResult {
    pub fn complete(name: &str, region: &str, details: impl Into<String>) -> Self {
        SettingResult {
            name: name.to_string(),
            region: region.to_string(),
            status: OpStatus::Complete,
            details: details.into(),
            exception: None,
        }
    }

    pub fn warning(name: &str, region: &str, details: impl Into<String>) -> Self {
        SettingResult {
            name: name.to_string(),
            region: region.to_string(),
            status: OpStatus::Warning,
            details: details.into(),
            exception: None,
        }
    }

    pub fn failed(
        name: &str,
        region: &str,
        details: impl Into<String>,
        exception: Option<String>,
    ) -> Self {
        SettingResult {
            name: name.to_string(),
            region: region.to_string(),
            status: OpStatus::Failed,
            details: details.into(),
            exception,
        }
    }
}

impl fmt::Display for SettingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.name, self.region, self.status, self.details
        )?;
        if let Some(exception) = &self.exception {
            write!(f, " ({exception})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_roundtrips_through_wire_names() {
        for (category, wire) in [
            (SettingCategory::Bios, "\"BIOS\""),
            (SettingCategory::Firmware, "\"FIRMWARE\""),
            (SettingCategory::Os, "\"OS\""),
            (SettingCategory::Storage, "\"STORAGE\""),
            (SettingCategory::IloSettings, "\"ILO_SETTINGS\""),
        ] {
            assert_eq!(serde_json::to_string(&category).unwrap(), wire);
            assert_eq!(category.as_str().parse::<SettingCategory>().unwrap(), category);
        }
    }

    #[test]
    fn enabled_disabled_maps_to_bool_and_back() {
        assert!(EnabledDisabled::Enabled.as_bool());
        assert!(!EnabledDisabled::Disabled.as_bool());
        assert_eq!(EnabledDisabled::from(true), EnabledDisabled::Enabled);
        assert_eq!(
            serde_json::to_string(&EnabledDisabled::Disabled).unwrap(),
            "\"Disabled\""
        );
    }

    #[test]
    fn setting_parses_collection_item() {
        let body = r#"{
            "offset": 0, "count": 1, "total": 1,
            "items": [{
                "id": "b0e1-77",
                "name": "web-bios",
                "category": "BIOS",
                "description": "web tier",
                "settings": {"DEFAULT": {"redfishData": {"Attributes": {}}}},
                "resourceUri": "/compute-ops-mgmt/v1/settings/b0e1-77",
                "updatedAt": "2024-05-02T10:11:12Z"
            }]
        }"#;
        let page: SettingsPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.total, 1);
        let setting = &page.items[0];
        assert_eq!(setting.category, SettingCategory::Bios);
        assert_eq!(setting.resource_uri.as_deref(), Some("/compute-ops-mgmt/v1/settings/b0e1-77"));
    }

    #[test]
    fn result_display_carries_exception_text() {
        let result = SettingResult::failed("fw-prod", "us-west", "update rejected", Some("HTTP 400".into()));
        assert_eq!(
            result.to_string(),
            "fw-prod [us-west] Failed: update rejected (HTTP 400)"
        );
    }
}
