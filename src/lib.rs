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

//! Client library for the HPE Compute Ops Management (COM) server-settings
//! API: BIOS configuration templates, firmware baselines, OS image
//! configurations, storage/RAID templates and iLO settings templates.
//!
//! Build a [`ComClientPool`] with the session token and the provisioned
//! regions, then get a per-region [`ComSettings`] client from it.

pub mod model;

mod bios;
mod error;
mod firmware;
mod ilo;
mod jsonmap;
mod network;
mod os_image;
mod settings;
mod storage;

pub use bios::{BiosTemplate, BiosUpdate};
pub use error::ComError;
pub use firmware::{FirmwareTemplate, FirmwareUpdate};
pub use ilo::{IloTemplate, IloUpdate};
pub use model::{EnabledDisabled, OpStatus, Setting, SettingCategory, SettingResult};
pub use network::{ComClientPool, ComClientPoolBuilder, ComHttpClient, COM_ENDPOINT};
pub use os_image::{OsTemplate, OsUpdate};
pub use settings::SettingsClient;
pub use storage::{StorageTemplate, StorageUpdate};

/// Interface to the settings resources of one COM region. All calls include
/// one or more HTTPS network calls.
///
/// Every mutating call returns a uniform [`SettingResult`]; API-level
/// rejections and precondition misses land there as `Failed`/`Warning`,
/// while transport and (de)serialization faults stay `Err`.
#[async_trait::async_trait]
pub trait ComSettings: Send + Sync + 'static {
    /// The region code this client is bound to.
    fn region(&self) -> &str;

    /// List settings, optionally restricted to one category. Follows
    /// collection pages until exhaustion.
    async fn get_settings(
        &self,
        category: Option<SettingCategory>,
    ) -> Result<Vec<Setting>, ComError>;

    /// Fetch one setting by name.
    async fn get_setting(&self, name: &str) -> Result<Setting, ComError>;

    /// Delete a setting by name.
    async fn delete_setting(&self, name: &str) -> Result<SettingResult, ComError>;

    /// Create a BIOS configuration template.
    async fn new_bios_setting(&self, template: BiosTemplate) -> Result<SettingResult, ComError>;

    /// Update a BIOS template. Attributes left unset keep their stored values.
    async fn set_bios_setting(
        &self,
        name: &str,
        update: BiosUpdate,
    ) -> Result<SettingResult, ComError>;

    /// Create an iLO settings template.
    async fn new_ilo_setting(&self, template: IloTemplate) -> Result<SettingResult, ComError>;

    /// Update an iLO settings template.
    async fn set_ilo_setting(
        &self,
        name: &str,
        update: IloUpdate,
    ) -> Result<SettingResult, ComError>;

    /// Create a firmware baseline.
    async fn new_firmware_setting(
        &self,
        template: FirmwareTemplate,
    ) -> Result<SettingResult, ComError>;

    /// Update a firmware baseline.
    async fn set_firmware_setting(
        &self,
        name: &str,
        update: FirmwareUpdate,
    ) -> Result<SettingResult, ComError>;

    /// Create an OS image configuration.
    async fn new_os_setting(&self, template: OsTemplate) -> Result<SettingResult, ComError>;

    /// Update an OS image configuration.
    async fn set_os_setting(&self, name: &str, update: OsUpdate)
        -> Result<SettingResult, ComError>;

    /// Create a storage (RAID volume) template.
    async fn new_storage_setting(
        &self,
        template: StorageTemplate,
    ) -> Result<SettingResult, ComError>;

    /// Update a storage template.
    async fn set_storage_setting(
        &self,
        name: &str,
        update: StorageUpdate,
    ) -> Result<SettingResult, ComError>;
}
