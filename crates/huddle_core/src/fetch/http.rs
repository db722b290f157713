//! HTTP profile source over a blocking reqwest client.

use super::{decode_envelope, FetchError, FetchResult, ProfileSource};
use crate::config::HuddleConfig;
use crate::model::profile::ProfileBatch;
use log::{info, warn};
use reqwest::blocking::Client;
use std::time::{Duration, Instant};

/// Fetches the insights envelope with one GET per call.
#[derive(Debug, Clone)]
pub struct HttpProfileSource {
    endpoint: String,
    client: Client,
}

impl HttpProfileSource {
    /// Creates a source for `endpoint` with a per-request `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Creates a source from a validated config.
    pub fn from_config(config: &HuddleConfig) -> FetchResult<Self> {
        Self::new(config.endpoint.clone(), config.request_timeout)
    }
}

impl ProfileSource for HttpProfileSource {
    fn describe(&self) -> String {
        self.endpoint.clone()
    }

    fn fetch_batch(&self) -> FetchResult<ProfileBatch> {
        let started = Instant::now();
        let response = self
            .client
            .get(self.endpoint.as_str())
            .send()
            .map_err(|err| {
                warn!("event=fetch_done module=fetch source=http status=error kind=transport");
                FetchError::Transport(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "event=fetch_done module=fetch source=http status=error http_status={}",
                status.as_u16()
            );
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        let batch = decode_envelope(&body)?;
        info!(
            "event=fetch_done module=fetch source=http status=ok accepted={} rejected={} flagged={} elapsed_ms={}",
            batch.profiles.len(),
            batch.rejected.len(),
            batch.flagged.len(),
            started.elapsed().as_millis()
        );
        Ok(batch)
    }
}
