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
use std::fmt;

use serde::{Deserialize, Serialize};

/// Wire shape of a storage template's `settings` document: the RAID volumes
/// the onboard controller should carve out.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageSettings {
    #[serde(rename = "DEFAULT")]
    pub default: StorageDefault,
}

impl StorageSettings {
    pub fn new(volumes: Vec<Volume>) -> Self {
        StorageSettings {
            default: StorageDefault { volumes },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StorageDefault {
    pub volumes: Vec<Volume>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub raid_type: RaidType,
    pub drive_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_technology: Option<DriveTechnology>,
    /// Volume size. Mutually exclusive with `entire_disk` on the API side.
    #[serde(rename = "capacityInGiB", skip_serializing_if = "Option::is_none")]
    pub capacity_in_gib: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entire_disk: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spare_drive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub io_perf_mode_enabled: Option<bool>,
}

impl Volume {
    pub fn new(raid_type: RaidType, drive_count: u32) -> Self {
        Volume {
            name: None,
            raid_type,
            drive_count,
            drive_technology: None,
            capacity_in_gib: None,
            entire_disk: None,
            spare_drive: None,
            io_perf_mode_enabled: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
pub enum RaidType {
    #[serde(rename = "RAID0")]
    Raid0,
    #[serde(rename = "RAID1")]
    Raid1,
    #[serde(rename = "RAID5")]
    Raid5,
    #[serde(rename = "RAID6")]
    Raid6,
    #[serde(rename = "RAID10")]
    Raid10,
}

impl fmt::Display for RaidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RaidType::Raid0 => "RAID0",
            RaidType::Raid1 => "RAID1",
            RaidType::Raid5 => "RAID5",
            RaidType::Raid6 => "RAID6",
            RaidType::Raid10 => "RAID10",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriveTechnology {
    SasHdd,
    SataHdd,
    SasSsd,
    SataSsd,
    NvmeSsd,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn volume_serializes_with_api_field_names() {
        let mut volume = Volume::new(RaidType::Raid5, 4);
        volume.name = Some("data".to_string());
        volume.drive_technology = Some(DriveTechnology::NvmeSsd);
        volume.capacity_in_gib = Some(1024);
        volume.io_perf_mode_enabled = Some(true);
        assert_eq!(
            serde_json::to_value(StorageSettings::new(vec![volume])).unwrap(),
            json!({
                "DEFAULT": {
                    "volumes": [{
                        "name": "data",
                        "raidType": "RAID5",
                        "driveCount": 4,
                        "driveTechnology": "NVME_SSD",
                        "capacityInGiB": 1024,
                        "ioPerfModeEnabled": true
                    }]
                }
            })
        );
    }
}
