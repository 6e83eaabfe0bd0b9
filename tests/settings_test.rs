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
//! End-to-end tests against a mock COM API. The mock server checks paths,
//! auth headers and request bodies, so these cover URL construction, the
//! check-if-exists and fetch-merge-write flows, and the status repackaging.

use anyhow::Error;
use libhpecom::model::bios::BiosAttributes;
use libhpecom::model::firmware::{BundleRef, FirmwareSettings};
use libhpecom::model::ilo::{IloDefault, NetworkProtocol, ProtocolSetting};
use libhpecom::{
    BiosTemplate, ComClientPool, ComError, ComSettings, EnabledDisabled, FirmwareTemplate,
    IloUpdate, OpStatus, SettingCategory,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SETTINGS_PATH: &str = "/compute-ops-mgmt/v1/settings";
const TOKEN_HEADER: &str = "Bearer test-token";

async fn client_for(server: &MockServer) -> Box<dyn ComSettings> {
    let pool = ComClientPool::builder()
        .token("test-token")
        .provisioned_regions(["us-west", "eu-central"])
        .api_root(server.uri())
        .build()
        .expect("pool");
    pool.client("us-west").expect("client")
}

fn empty_page() -> serde_json::Value {
    json!({"offset": 0, "count": 0, "total": 0, "items": []})
}

fn one_item_page(item: serde_json::Value) -> serde_json::Value {
    json!({"offset": 0, "count": 1, "total": 1, "items": [item]})
}

#[tokio::test]
async fn get_setting_by_name() -> Result<(), Error> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SETTINGS_PATH))
        .and(query_param("filter", "name eq 'web-bios'"))
        .and(header("authorization", TOKEN_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(one_item_page(json!({
            "id": "b0e1-77",
            "name": "web-bios",
            "category": "BIOS",
            "settings": {"DEFAULT": {"redfishData": {"Attributes": {"Sriov": "Enabled"}}}}
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let com = client_for(&server).await;
    let setting = com.get_setting("web-bios").await?;
    assert_eq!(setting.category, SettingCategory::Bios);
    let attrs = setting.bios_attributes()?;
    assert_eq!(attrs.sriov, Some(EnabledDisabled::Enabled));
    Ok(())
}

#[tokio::test]
async fn quoted_name_is_escaped_in_the_filter() -> Result<(), Error> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SETTINGS_PATH))
        .and(query_param("filter", "name eq 'o''brien-bios'"))
        .respond_with(ResponseTemplate::new(200).set_body_json(one_item_page(json!({
            "id": "b0e1-78",
            "name": "o'brien-bios",
            "category": "BIOS",
            "settings": {}
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let com = client_for(&server).await;
    let setting = com.get_setting("o'brien-bios").await?;
    assert_eq!(setting.id, "b0e1-78");
    Ok(())
}

#[tokio::test]
async fn get_setting_missing_is_a_typed_error() -> Result<(), Error> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SETTINGS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .mount(&server)
        .await;

    let com = client_for(&server).await;
    match com.get_setting("gone").await {
        Err(ComError::SettingNotFound(name)) => assert_eq!(name, "gone"),
        other => panic!("unexpected {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn listing_follows_pages() -> Result<(), Error> {
    let server = MockServer::start().await;
    let item = |id: &str, name: &str| {
        json!({"id": id, "name": name, "category": "FIRMWARE", "settings": {}})
    };
    Mock::given(method("GET"))
        .and(path(SETTINGS_PATH))
        .and(query_param("offset", "0"))
        .and(query_param("filter", "category eq 'FIRMWARE'"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0, "count": 2, "total": 3,
            "items": [item("f-1", "base-a"), item("f-2", "base-b")]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(SETTINGS_PATH))
        .and(query_param("offset", "2"))
        .and(query_param("filter", "category eq 'FIRMWARE'"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 2, "count": 1, "total": 3,
            "items": [item("f-3", "base-c")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let com = client_for(&server).await;
    let settings = com.get_settings(Some(SettingCategory::Firmware)).await?;
    assert_eq!(settings.len(), 3);
    assert_eq!(settings[2].name, "base-c");
    Ok(())
}

#[tokio::test]
async fn create_bios_posts_the_nested_payload() -> Result<(), Error> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SETTINGS_PATH))
        .and(query_param("filter", "name eq 'web-bios'"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(SETTINGS_PATH))
        .and(header("authorization", TOKEN_HEADER))
        .and(body_json(json!({
            "name": "web-bios",
            "category": "BIOS",
            "description": "web tier",
            "settings": {
                "DEFAULT": {"redfishData": {"Attributes": {
                    "WorkloadProfile": "Virtualization-MaxPerformance",
                    "Sriov": "Enabled"
                }}}
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "b0e1-77", "name": "web-bios", "category": "BIOS", "settings": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let com = client_for(&server).await;
    let mut template = BiosTemplate::new("web-bios");
    template.description = Some("web tier".to_string());
    template.attributes = BiosAttributes {
        workload_profile: Some("Virtualization-MaxPerformance".to_string()),
        sriov: Some(EnabledDisabled::Enabled),
        ..Default::default()
    };
    let result = com.new_bios_setting(template).await?;
    assert_eq!(result.status, OpStatus::Complete);
    assert_eq!(result.region, "us-west");
    Ok(())
}

#[tokio::test]
async fn create_existing_name_warns_without_posting() -> Result<(), Error> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SETTINGS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(one_item_page(json!({
            "id": "b0e1-77", "name": "web-bios", "category": "BIOS", "settings": {}
        }))))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(SETTINGS_PATH))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let com = client_for(&server).await;
    let result = com.new_bios_setting(BiosTemplate::new("web-bios")).await?;
    assert_eq!(result.status, OpStatus::Warning);
    assert!(result.details.contains("already exists"));
    Ok(())
}

#[tokio::test]
async fn update_ilo_merges_unset_fields_from_the_stored_document() -> Result<(), Error> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SETTINGS_PATH))
        .and(query_param("filter", "name eq 'locked-down-ilo'"))
        .respond_with(ResponseTemplate::new(200).set_body_json(one_item_page(json!({
            "id": "ilo-9",
            "name": "locked-down-ilo",
            "category": "ILO_SETTINGS",
            "description": "baseline lockdown",
            "settings": {"Default": {"NetworkProtocol": {
                "SSH": {"ProtocolEnabled": true, "Port": 22},
                "IPMI": {"ProtocolEnabled": true}
            }}}
        }))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(format!("{SETTINGS_PATH}/ilo-9")))
        .and(header("content-type", "application/merge-patch+json"))
        .and(body_json(json!({
            "name": "locked-down-ilo",
            "description": "baseline lockdown",
            "settings": {"Default": {"NetworkProtocol": {
                "SSH": {"ProtocolEnabled": true, "Port": 22},
                "IPMI": {"ProtocolEnabled": false}
            }}}
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let com = client_for(&server).await;
    let update = IloUpdate {
        description: None,
        settings: IloDefault {
            network_protocol: Some(NetworkProtocol {
                ipmi: Some(ProtocolSetting::state(EnabledDisabled::Disabled)),
                ..Default::default()
            }),
            account_service: None,
        },
    };
    let result = com.set_ilo_setting("locked-down-ilo", update).await?;
    assert_eq!(result.status, OpStatus::Complete);
    Ok(())
}

#[tokio::test]
async fn update_missing_setting_fails_without_patching() -> Result<(), Error> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SETTINGS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .mount(&server)
        .await;

    let com = client_for(&server).await;
    let result = com.set_ilo_setting("gone", IloUpdate::default()).await?;
    assert_eq!(result.status, OpStatus::Failed);
    assert!(result.details.contains("no setting with this name"));
    Ok(())
}

#[tokio::test]
async fn delete_resolves_name_to_id() -> Result<(), Error> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SETTINGS_PATH))
        .and(query_param("filter", "name eq 'db-raid'"))
        .respond_with(ResponseTemplate::new(200).set_body_json(one_item_page(json!({
            "id": "st-2", "name": "db-raid", "category": "STORAGE", "settings": {}
        }))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{SETTINGS_PATH}/st-2")))
        .and(header("authorization", TOKEN_HEADER))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let com = client_for(&server).await;
    let result = com.delete_setting("db-raid").await?;
    assert_eq!(result.status, OpStatus::Complete);
    assert!(result.details.contains("STORAGE"));
    Ok(())
}

#[tokio::test]
async fn api_rejection_repackages_into_a_failed_result() -> Result<(), Error> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SETTINGS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(SETTINGS_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "firmware bundle not found",
            "errorCode": "HPE_GL_COM_BUNDLE_NOT_FOUND"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let com = client_for(&server).await;
    let template = FirmwareTemplate {
        name: "prod-baseline".to_string(),
        description: None,
        baselines: FirmwareSettings {
            gen11: Some(BundleRef::new("not-a-bundle")),
            ..Default::default()
        },
    };
    let result = com.new_firmware_setting(template).await?;
    assert_eq!(result.status, OpStatus::Failed);
    let exception = result.exception.expect("exception text");
    assert!(exception.contains("firmware bundle not found"));
    assert!(exception.contains("HPE_GL_COM_BUNDLE_NOT_FOUND"));
    Ok(())
}
