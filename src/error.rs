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
use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum ComError {
    #[error("Network error talking to COM at {url}. {source}")]
    NetworkError { url: String, source: reqwest::Error },

    #[error("COM API rejected the request at {url} with HTTP {status_code}: {message}")]
    ApiError {
        url: String,
        status_code: StatusCode,
        message: String,
    },

    #[error("HTTP {status_code} at {url}. See debug logs for details.")]
    HTTPErrorCode {
        url: String,
        status_code: StatusCode,
    },

    #[error("Could not deserialize response from {url}. Body: {body}. {source}")]
    JsonDeserializeError {
        url: String,
        body: String,
        source: serde_json::Error,
    },

    #[error("Could not serialize request body for {url}. Obj: {object_debug}. {source}")]
    JsonSerializeError {
        url: String,
        object_debug: String,
        source: serde_json::Error,
    },

    #[error("Remote returned empty body")]
    NoContent,

    #[error("Region {region} is not provisioned in this workspace. Provisioned regions: {provisioned}")]
    UnprovisionedRegion { region: String, provisioned: String },

    #[error("No setting named {0} in this region")]
    SettingNotFound(String),

    #[error("Setting {name} has category {actual}, expected {expected}")]
    CategoryMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    #[error("Missing key {key} in settings document of {context}")]
    MissingKey { key: String, context: String },

    #[error("Key {key} should be {expected_type} in settings document of {context}")]
    InvalidKeyType {
        key: String,
        expected_type: String,
        context: String,
    },
}
