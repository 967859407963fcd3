use std::collections::HashMap;

use serde_json::Value;

use crate::domain::schema::{Envelope, MrData};
use crate::utils::error::Result;

/// Thin GET client for the statistics API.
///
/// Failures are not propagated: callers that loop over rounds treat "no data
/// this round" as a continuable condition, so every failure path logs once
/// and yields `None`.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `base_url/endpoint` and decode the body as JSON.
    pub async fn fetch(
        &self,
        endpoint: &str,
        params: Option<&HashMap<String, String>>,
        headers: Option<&HashMap<String, String>>,
    ) -> Option<Value> {
        match self.try_fetch(endpoint, params, headers).await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::error!("request to '{endpoint}' failed: {e}");
                None
            }
        }
    }

    async fn try_fetch(
        &self,
        endpoint: &str,
        params: Option<&HashMap<String, String>>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );

        tracing::debug!("GET {url}");
        let mut request = self.http.get(&url);
        if let Some(params) = params {
            request = request.query(params);
        }
        if let Some(headers) = headers {
            for (name, value) in headers {
                request = request.header(name.as_str(), value.as_str());
            }
        }

        let response = request.send().await?.error_for_status()?;
        Ok(response.json::<Value>().await?)
    }

    /// Fetch and decode the `{"MRData": ...}` envelope in one step.
    pub(crate) async fn fetch_payload(
        &self,
        endpoint: &str,
        params: Option<&HashMap<String, String>>,
    ) -> Option<MrData> {
        let raw = self.fetch(endpoint, params, None).await?;
        match serde_json::from_value::<Envelope>(raw) {
            Ok(envelope) => match envelope.mr_data {
                Some(payload) => Some(payload),
                None => {
                    tracing::warn!("response from '{endpoint}' carries no MRData envelope");
                    None
                }
            },
            Err(e) => {
                tracing::warn!("response from '{endpoint}' is not in the expected shape: {e}");
                None
            }
        }
    }
}
