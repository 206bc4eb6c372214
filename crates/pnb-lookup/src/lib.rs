//! HTTP adapter for the number-lookup API.
//!
//! One GET per query (`{base}/?mobile={digits}`), no retries; the pipeline
//! decides how failures read to the user. The original service publishes no
//! latency contract, so the client carries a bounded timeout as a hardening
//! measure rather than inherited behavior.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use pnb_core::{
    lookup::{LookupPort, LookupResult},
    query::PhoneQuery,
    Error, Result,
};

#[derive(Clone, Debug)]
pub struct HttpLookupClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpLookupClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::External(format!("http client build failed: {e}")))?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    fn request_url(&self, query: &PhoneQuery) -> String {
        format!(
            "{}/?mobile={}",
            self.base_url.trim_end_matches('/'),
            query.as_str()
        )
    }
}

#[async_trait]
impl LookupPort for HttpLookupClient {
    async fn lookup(&self, query: &PhoneQuery) -> Result<LookupResult> {
        let url = self.request_url(query);
        debug!("GET {url}");

        let resp = self.http.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Transport("lookup API request timed out".to_string())
            } else {
                Error::Transport(format!("lookup API request failed: {e}"))
            }
        })?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| Error::Transport(format!("lookup API body read failed: {e}")))?;

        classify_response(status, &body)
    }
}

/// Turn a raw HTTP outcome into the pipeline's view of it. Pure, so the
/// status/body contract is testable without a server.
pub fn classify_response(status: u16, body: &str) -> Result<LookupResult> {
    if !(200..300).contains(&status) {
        return Err(Error::Transport(format!(
            "lookup API returned HTTP {status}"
        )));
    }

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| Error::Transport(format!("malformed JSON from lookup API: {e}")))?;

    LookupResult::from_value(&value)
}
