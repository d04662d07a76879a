//! HTTP client for downloading published ledger sheets as CSV.

use crate::ledger::LedgerSnapshot;
use crate::utils::config::DEFAULT_FETCH_TIMEOUT;
use crate::utils::error::FetchError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

/// Client for fetching ledger snapshots from a CSV endpoint
pub struct LedgerClient {
    client: Client,
    source_url: String,
}

impl LedgerClient {
    /// Create a new client with the default timeout
    pub fn new(source_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(source_url, DEFAULT_FETCH_TIMEOUT)
    }

    /// Create a client with a custom timeout
    pub fn with_timeout(
        source_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let source_url = source_url.into();
        validate_source_url(&source_url)?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::RequestFailed)?;

        Ok(Self { client, source_url })
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Download the sheet and parse it into a snapshot
    ///
    /// # Errors
    /// * `FetchError::RequestFailed` - network or timeout failure
    /// * `FetchError::HttpStatus` - non-2xx response
    /// * `FetchError::Parse` - body is not a CSV ledger
    pub fn fetch_snapshot(&self) -> Result<LedgerSnapshot, FetchError> {
        info!("Fetching ledger from: {}", self.source_url);

        let response = self
            .client
            .get(&self.source_url)
            .send()
            .map_err(FetchError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let body = response.text().map_err(FetchError::RequestFailed)?;
        debug!("Received {} bytes of CSV", body.len());

        let snapshot = LedgerSnapshot::from_csv_str(&body)?;
        info!("Loaded {} transactions", snapshot.row_count());

        Ok(snapshot)
    }
}

/// Only plain HTTP(S) sources are accepted
pub fn validate_source_url(url: &str) -> Result<(), FetchError> {
    if url.trim().is_empty() {
        return Err(FetchError::InvalidUrl("URL cannot be empty".to_string()));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(FetchError::InvalidUrl(format!(
            "{} (must start with http:// or https://)",
            url
        )));
    }

    Ok(())
}
