//! The narrow spreadsheet-client seam and its HTTP implementation.
//!
//! The time-logging service only ever needs two operations: read one
//! column as ordered cell strings, and write one cell. Keeping the
//! seam that small lets tests inject an in-memory fake.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::auth::TokenProvider;
use crate::credentials::ServiceAccountKey;
use ticklist_core::{Error, Result};

/// Production Sheets API base URL.
const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";

/// Capability the time-logging service requires from a spreadsheet
/// backend.
#[async_trait]
pub trait SheetsClient: Send + Sync {
    /// Read a single-column range as ordered cell strings.
    ///
    /// Empty rows inside the range come back as empty strings so that
    /// positions stay aligned with 1-based row numbers.
    async fn read_column(&self, range: &str) -> Result<Vec<String>>;

    /// Write one value into a sheet-qualified cell address
    /// (e.g. `'Sheet1'!B5`), returning the updated-cell count the
    /// backend reports.
    async fn write_cell(&self, address: &str, value: &str) -> Result<u32>;
}

/// Response body of the values-get endpoint.
#[derive(Debug, Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Response body of the values-update endpoint.
#[derive(Debug, Deserialize)]
struct UpdateResponse {
    #[serde(rename = "updatedCells", default)]
    updated_cells: u32,
}

/// [`SheetsClient`] implementation against the Google Sheets v4 values
/// API, authenticated via a [`TokenProvider`].
pub struct HttpSheetsClient {
    http: reqwest::Client,
    tokens: TokenProvider,
    base_url: String,
    spreadsheet_id: String,
}

impl HttpSheetsClient {
    /// Create a client for the given spreadsheet.
    pub fn new(key: ServiceAccountKey, spreadsheet_id: impl Into<String>) -> Self {
        let http = reqwest::Client::new();
        Self {
            tokens: TokenProvider::new(key, http.clone()),
            http,
            base_url: SHEETS_API_BASE.to_string(),
            spreadsheet_id: spreadsheet_id.into(),
        }
    }

    /// Point the client at a different API base URL (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{}/spreadsheets/{}/values/{}",
            self.base_url, self.spreadsheet_id, range
        )
    }
}

#[async_trait]
impl SheetsClient for HttpSheetsClient {
    async fn read_column(&self, range: &str) -> Result<Vec<String>> {
        let token = self.tokens.access_token().await?;

        let response = self
            .http
            .get(self.values_url(range))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| Error::upstream(format!("values get failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::upstream(format!(
                "values get returned HTTP {}",
                response.status()
            )));
        }

        let body: ValuesResponse = response
            .json()
            .await
            .map_err(|e| Error::upstream(format!("values response not parseable: {e}")))?;

        Ok(body
            .values
            .into_iter()
            .map(|row| row.into_iter().next().unwrap_or_default())
            .collect())
    }

    async fn write_cell(&self, address: &str, value: &str) -> Result<u32> {
        let token = self.tokens.access_token().await?;

        let response = self
            .http
            .put(self.values_url(address))
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(token)
            .json(&json!({ "values": [[value]] }))
            .send()
            .await
            .map_err(|e| Error::upstream(format!("values update failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::upstream(format!(
                "values update returned HTTP {}",
                response.status()
            )));
        }

        let body: UpdateResponse = response
            .json()
            .await
            .map_err(|e| Error::upstream(format!("update response not parseable: {e}")))?;

        tracing::debug!(address, updated_cells = body.updated_cells, "cell written");
        Ok(body.updated_cells)
    }
}
