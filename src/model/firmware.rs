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

/// Wire shape of a firmware baseline's `settings` document: one bundle
/// reference per server generation, plus the downgrade flag.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct FirmwareSettings {
    #[serde(rename = "GEN10", skip_serializing_if = "Option::is_none")]
    pub gen10: Option<BundleRef>,
    #[serde(rename = "GEN11", skip_serializing_if = "Option::is_none")]
    pub gen11: Option<BundleRef>,
    #[serde(rename = "GEN12", skip_serializing_if = "Option::is_none")]
    pub gen12: Option<BundleRef>,
    /// Allow the baseline to move servers to an older bundle.
    #[serde(rename = "downgrade", skip_serializing_if = "Option::is_none")]
    pub downgrade: Option<bool>,
}

/// Reference to one published firmware bundle.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BundleRef {
    pub id: String,
    /// Hotfix/patch bundle ids layered on top of the base bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patches: Option<Vec<String>>,
}

impl BundleRef {
    pub fn new(id: impl Into<String>) -> Self {
        BundleRef {
            id: id.into(),
            patches: None,
        }
    }
}
