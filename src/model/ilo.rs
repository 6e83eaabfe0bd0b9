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

use crate::model::EnabledDisabled;

/// Wire shape of an iLO settings template's `settings` document:
/// `Default.NetworkProtocol.{Protocol}.ProtocolEnabled/Port` plus the
/// `Default.AccountService` security knobs.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IloSettings {
    #[serde(rename = "Default")]
    pub default: IloDefault,
}

impl IloSettings {
    pub fn new(default: IloDefault) -> Self {
        IloSettings { default }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct IloDefault {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_protocol: Option<NetworkProtocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_service: Option<AccountService>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct NetworkProtocol {
    #[serde(rename = "HTTPS", skip_serializing_if = "Option::is_none")]
    pub https: Option<ProtocolSetting>,
    #[serde(rename = "SSH", skip_serializing_if = "Option::is_none")]
    pub ssh: Option<ProtocolSetting>,
    #[serde(rename = "IPMI", skip_serializing_if = "Option::is_none")]
    pub ipmi: Option<ProtocolSetting>,
    #[serde(rename = "SNMP", skip_serializing_if = "Option::is_none")]
    pub snmp: Option<ProtocolSetting>,
    #[serde(rename = "KVMIP", skip_serializing_if = "Option::is_none")]
    pub kvm_ip: Option<ProtocolSetting>,
    #[serde(rename = "VirtualMedia", skip_serializing_if = "Option::is_none")]
    pub virtual_media: Option<ProtocolSetting>,
    #[serde(rename = "WebServer", skip_serializing_if = "Option::is_none")]
    pub web_server: Option<ProtocolSetting>,
}

/// One protocol row. `ProtocolEnabled` is a wire boolean; the template
/// parameters speak Enabled/Disabled, hence the constructors below.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProtocolSetting {
    #[serde(rename = "ProtocolEnabled", skip_serializing_if = "Option::is_none")]
    pub protocol_enabled: Option<bool>,
    #[serde(rename = "Port", skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl ProtocolSetting {
    pub fn state(state: EnabledDisabled) -> Self {
        ProtocolSetting {
            protocol_enabled: Some(state.as_bool()),
            port: None,
        }
    }

    pub fn with_port(state: EnabledDisabled, port: u16) -> Self {
        ProtocolSetting {
            protocol_enabled: Some(state.as_bool()),
            port: Some(port),
        }
    }

    pub fn port_only(port: u16) -> Self {
        ProtocolSetting {
            protocol_enabled: None,
            port: Some(port),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct AccountService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_password_length: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_failure_delay_time_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_failure_logging_threshold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_failures_before_delay: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce_password_complexity: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn protocol_rows_serialize_under_their_wire_names() {
        let default = IloDefault {
            network_protocol: Some(NetworkProtocol {
                ssh: Some(ProtocolSetting::with_port(EnabledDisabled::Enabled, 22)),
                ipmi: Some(ProtocolSetting::state(EnabledDisabled::Disabled)),
                web_server: Some(ProtocolSetting::state(EnabledDisabled::Enabled)),
                ..Default::default()
            }),
            account_service: None,
        };
        let doc = serde_json::to_value(IloSettings::new(default)).unwrap();
        assert_eq!(
            doc,
            json!({
                "Default": {
                    "NetworkProtocol": {
                        "SSH": {"ProtocolEnabled": true, "Port": 22},
                        "IPMI": {"ProtocolEnabled": false},
                        "WebServer": {"ProtocolEnabled": true}
                    }
                }
            })
        );
    }

    #[test]
    fn account_service_uses_pascal_case_fields() {
        let default = IloDefault {
            network_protocol: None,
            account_service: Some(AccountService {
                enforce_password_complexity: Some(true),
                min_password_length: Some(12),
                ..Default::default()
            }),
        };
        let doc = serde_json::to_value(IloSettings::new(default)).unwrap();
        assert_eq!(
            doc,
            json!({
                "Default": {
                    "AccountService": {
                        "MinPasswordLength": 12,
                        "EnforcePasswordComplexity": true
                    }
                }
            })
        );
    }
}
