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
use std::{collections::HashSet, collections::HashMap, time::Duration};

use reqwest::{
    header::HeaderValue, header::ACCEPT, header::CONTENT_TYPE, Client as HttpClient,
    ClientBuilder as HttpClientBuilder, Method, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::model::ApiErrorBody;
use crate::settings::SettingsClient;
use crate::ComSettings;
pub use crate::ComError;

/// Versioned path prefix of the settings API.
pub const COM_ENDPOINT: &str = "compute-ops-mgmt/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub struct ComClientPoolBuilder {
    timeout: Duration,
    token: String,
    regions: HashSet<String>,
    api_root: Option<String>,
}

impl ComClientPoolBuilder {
    /// Bearer token obtained from the GreenLake token exchange.
    pub fn token(mut self, token: impl Into<String>) -> ComClientPoolBuilder {
        self.token = token.into();
        self
    }

    /// The region codes provisioned for this workspace. Every per-region
    /// client request is validated against this set.
    pub fn provisioned_regions<I, S>(mut self, regions: I) -> ComClientPoolBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = regions.into_iter().map(Into::into).collect();
        self
    }

    /// Overwrites the timeout that will be applied to every request
    pub fn timeout(mut self, timeout: Duration) -> ComClientPoolBuilder {
        self.timeout = timeout;
        self
    }

    /// Replaces the region-derived `https://{region}-api.compute.cloud.hpe.com`
    /// base with a fixed root. Used to point the client at a mock server.
    pub fn api_root(mut self, root: impl Into<String>) -> ComClientPoolBuilder {
        self.api_root = Some(root.into());
        self
    }

    /// Builds a COM client network configuration
    pub fn build(&self) -> Result<ComClientPool, ComError> {
        let builder = HttpClientBuilder::new();
        let http_client = builder
            .timeout(self.timeout)
            .build()
            .expect("reqwest client construction with static options");
        let pool = ComClientPool {
            http_client,
            token: self.token.clone(),
            regions: self.regions.clone(),
            api_root: self.api_root.clone(),
        };

        Ok(pool)
    }
}

/// One HTTP connection pool shared by all per-region settings clients,
/// together with the session token and the provisioned region set.
#[derive(Debug, Clone)]
pub struct ComClientPool {
    http_client: HttpClient,
    token: String,
    regions: HashSet<String>,
    api_root: Option<String>,
}

impl ComClientPool {
    /// Returns Builder for configuring a COM HTTP connection pool
    pub fn builder() -> ComClientPoolBuilder {
        ComClientPoolBuilder {
            timeout: DEFAULT_TIMEOUT,
            token: String::new(),
            regions: HashSet::new(),
            api_root: None,
        }
    }

    /// The region codes this pool will accept, sorted.
    pub fn provisioned_regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self.regions.iter().cloned().collect();
        regions.sort();
        regions
    }

    /// Creates a settings client bound to one region.
    ///
    /// Fails when the region is not in the provisioned set, naming the
    /// regions that are.
    pub fn client(&self, region: &str) -> Result<Box<dyn ComSettings>, ComError> {
        if !self.regions.contains(region) {
            return Err(ComError::UnprovisionedRegion {
                region: region.to_string(),
                provisioned: self.provisioned_regions().join(", "),
            });
        }
        let base = match &self.api_root {
            Some(root) => root.trim_end_matches('/').to_string(),
            None => region_base_url(region),
        };
        let client = ComHttpClient::new(self.http_client.clone(), base, self.token.clone());
        Ok(Box::new(SettingsClient::new(client, region)))
    }
}

/// Public COM API host for a region code.
pub(crate) fn region_base_url(region: &str) -> String {
    format!("https://{region}-api.compute.cloud.hpe.com")
}

/// A HTTP client which targets the COM API of a single region
#[derive(Debug, Clone)]
pub struct ComHttpClient {
    base: String,
    token: String,
    http_client: HttpClient,
}

impl ComHttpClient {
    pub fn new(http_client: HttpClient, base: String, token: String) -> Self {
        Self {
            base,
            token,
            http_client,
        }
    }

    pub async fn get<T>(&self, api: &str, query: &[(&str, String)]) -> Result<(StatusCode, T), ComError>
    where
        T: DeserializeOwned + ::std::fmt::Debug,
    {
        let (status_code, resp_opt) = self.req::<T, String>(Method::GET, api, query, None).await?;
        match resp_opt {
            Some(response_body) => Ok((status_code, response_body)),
            None => Err(ComError::NoContent),
        }
    }

    pub async fn post<B>(&self, api: &str, data: B) -> Result<StatusCode, ComError>
    where
        B: Serialize + ::std::fmt::Debug,
    {
        let (status_code, _resp_body): (_, Option<HashMap<String, serde_json::Value>>) =
            self.req(Method::POST, api, &[], Some(data)).await?;
        Ok(status_code)
    }

    pub async fn patch<B>(&self, api: &str, data: B) -> Result<StatusCode, ComError>
    where
        B: Serialize + ::std::fmt::Debug,
    {
        let (status_code, _resp_body): (_, Option<HashMap<String, serde_json::Value>>) =
            self.req(Method::PATCH, api, &[], Some(data)).await?;
        Ok(status_code)
    }

    pub async fn delete(&self, api: &str) -> Result<StatusCode, ComError> {
        let (status_code, _resp_body): (_, Option<HashMap<String, serde_json::Value>>) =
            self.req::<_, String>(Method::DELETE, api, &[], None).await?;
        Ok(status_code)
    }

    // All the HTTP requests happen from here.
    pub async fn req<T, B>(
        &self,
        method: Method,
        api: &str,
        query: &[(&str, String)],
        body: Option<B>,
    ) -> Result<(StatusCode, Option<T>), ComError>
    where
        T: DeserializeOwned + ::std::fmt::Debug,
        B: Serialize + ::std::fmt::Debug,
    {
        let url = format!("{}/{}/{}", self.base, COM_ENDPOINT, api);
        let body_enc = match body {
            Some(b) => {
                let url = url.clone();
                let body_enc =
                    serde_json::to_string(&b).map_err(|e| ComError::JsonSerializeError {
                        url,
                        object_debug: format!("{b:?}"),
                        source: e,
                    })?;
                Some(body_enc)
            }
            None => None,
        };
        debug!(
            "TX {} {} {}",
            method,
            url,
            body_enc.as_deref().unwrap_or_default()
        );

        let mut req_b = self.http_client.request(method.clone(), &url);
        if !query.is_empty() {
            req_b = req_b.query(query);
        }
        // The settings API uses merge-patch semantics for updates.
        let content_type = if method == Method::PATCH {
            "application/merge-patch+json"
        } else {
            "application/json"
        };
        req_b = req_b
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CONTENT_TYPE, HeaderValue::from_static(content_type))
            .bearer_auth(&self.token);
        if let Some(b) = body_enc {
            req_b = req_b.body(b);
        }
        let response = req_b.send().await.map_err(|e| ComError::NetworkError {
            url: url.clone(),
            source: e,
        })?;
        let status_code = response.status();
        // read the body even if not status 2XX, because COM returns its
        // error message and errorCode as JSON
        let response_body = response.text().await.map_err(|e| ComError::NetworkError {
            url: url.clone(),
            source: e,
        })?;
        if !status_code.is_success() {
            debug!("RX {status_code} {response_body}");
            if let Ok(api_err) = serde_json::from_str::<ApiErrorBody>(&response_body) {
                if let Some(message) = api_err.into_message() {
                    return Err(ComError::ApiError {
                        url,
                        status_code,
                        message,
                    });
                }
            }
            return Err(ComError::HTTPErrorCode { url, status_code });
        }
        let mut res = None;
        if !response_body.is_empty() {
            debug!("RX {status_code} {response_body}");
            match serde_json::from_str(&response_body) {
                Ok(v) => res.insert(v),
                Err(e) => {
                    return Err(ComError::JsonDeserializeError {
                        url,
                        body: response_body,
                        source: e,
                    });
                }
            };
        } else {
            debug!("RX {status_code}");
        }

        Ok((status_code, res))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_url_embeds_region_code() {
        assert_eq!(
            region_base_url("us-west"),
            "https://us-west-api.compute.cloud.hpe.com"
        );
    }

    #[test]
    fn unprovisioned_region_is_rejected_with_the_valid_set() {
        let pool = ComClientPool::builder()
            .token("t")
            .provisioned_regions(["eu-central", "us-west"])
            .build()
            .unwrap();
        // Box<dyn ComSettings> is not Debug, so no unwrap_err here.
        let err = match pool.client("ap-northeast") {
            Ok(_) => panic!("unprovisioned region accepted"),
            Err(e) => e,
        };
        match err {
            ComError::UnprovisionedRegion { region, provisioned } => {
                assert_eq!(region, "ap-northeast");
                assert_eq!(provisioned, "eu-central, us-west");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn provisioned_region_yields_a_client() {
        let pool = ComClientPool::builder()
            .token("t")
            .provisioned_regions(["us-west"])
            .build()
            .unwrap();
        let client = pool.client("us-west").unwrap();
        assert_eq!(client.region(), "us-west");
    }
}
