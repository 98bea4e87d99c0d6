//! HTTP client for the Google Sheets v4 REST API.
//!
//! Only two read calls are made per fetch: spreadsheet metadata (to choose
//! the worksheet) and the worksheet's full value grid.

use std::sync::Arc;
use std::time::Duration;

use oshare_core::{AppConfig, ProductRecord};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::auth::TokenProvider;
use crate::error::DataSourceError;
use crate::normalize::normalize_rows;
use crate::table::{rows_from_values, RawRow};
use crate::types::{SheetProperties, SpreadsheetMetadata, ValueRange};

/// Where and how to read the landing-page worksheet.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    /// Preferred worksheet; the first worksheet is used when it is missing.
    pub worksheet_title: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl SheetsConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            spreadsheet_id: config.google_sheet_id.clone(),
            worksheet_title: config.worksheet_title.clone(),
            base_url: config.sheets_base_url.clone(),
            timeout_secs: config.request_timeout_secs,
        }
    }
}

/// Read-only Sheets client bound to one spreadsheet.
///
/// Use [`SheetsClient::new`] with the production base URL from
/// [`SheetsConfig::from_app_config`], or point `base_url` at a mock server in
/// tests.
pub struct SheetsClient {
    client: Client,
    config: SheetsConfig,
    base_url: Url,
    auth: Arc<dyn TokenProvider>,
}

impl SheetsClient {
    /// # Errors
    ///
    /// - [`DataSourceError::Http`] if the underlying `reqwest::Client` cannot
    ///   be constructed.
    /// - [`DataSourceError::InvalidBaseUrl`] if `config.base_url` does not parse.
    pub fn new(config: SheetsConfig, auth: Arc<dyn TokenProvider>) -> Result<Self, DataSourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("oshare/0.1 (landing-pages)")
            .build()?;

        let normalised = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| DataSourceError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DataSourceError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            client,
            config,
            base_url,
            auth,
        })
    }

    /// Reads every data row of the landing-page worksheet, in sheet order.
    ///
    /// # Errors
    ///
    /// - [`DataSourceError::NoWorksheet`] if the spreadsheet has no worksheets.
    /// - [`DataSourceError::Auth`] if the service account is rejected.
    /// - [`DataSourceError::UnexpectedStatus`] on a non-2xx Sheets response.
    /// - [`DataSourceError::Http`] on network failure.
    /// - [`DataSourceError::Deserialize`] if a response has an unexpected shape.
    pub async fn fetch_all_products(&self) -> Result<Vec<RawRow>, DataSourceError> {
        let token = self.auth.access_token().await?;

        let metadata_url = self.metadata_url();
        let metadata: SpreadsheetMetadata = self
            .get_json(&metadata_url, &token, "spreadsheet metadata")
            .await?;
        let sheets: Vec<SheetProperties> =
            metadata.sheets.into_iter().map(|s| s.properties).collect();

        let worksheet = select_worksheet(&sheets, &self.config.worksheet_title).ok_or_else(|| {
            DataSourceError::NoWorksheet {
                spreadsheet_id: self.config.spreadsheet_id.clone(),
            }
        })?;
        if worksheet.title != self.config.worksheet_title {
            tracing::warn!(
                wanted = %self.config.worksheet_title,
                using = %worksheet.title,
                "worksheet not found; falling back to first worksheet"
            );
        }

        let values_url = self.values_url(&worksheet.title);
        let grid: ValueRange = self
            .get_json(&values_url, &token, "worksheet values")
            .await?;
        let rows = rows_from_values(grid.values);

        tracing::debug!(
            worksheet = %worksheet.title,
            rows = rows.len(),
            "loaded worksheet rows"
        );

        Ok(rows)
    }

    /// Fetches and normalizes the full product catalog.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_all_products`].
    pub async fn fetch_catalog(&self) -> Result<Vec<ProductRecord>, DataSourceError> {
        let rows = self.fetch_all_products().await?;
        Ok(normalize_rows(&rows))
    }

    fn metadata_url(&self) -> Url {
        let mut url = self.spreadsheet_url(&[]);
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties(title,index)");
        url
    }

    fn values_url(&self, worksheet_title: &str) -> Url {
        let range = a1_sheet_range(worksheet_title);
        self.spreadsheet_url(&["values", range.as_str()])
    }

    /// `{base}/v4/spreadsheets/{id}/{extra...}`, each segment percent-encoded.
    fn spreadsheet_url(&self, extra: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v4", "spreadsheets", self.config.spreadsheet_id.as_str()])
                .extend(extra);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        token: &str,
        context: &str,
    ) -> Result<T, DataSourceError> {
        let response = self
            .client
            .get(url.clone())
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            let body = response.text().await.unwrap_or_default();
            return Err(DataSourceError::Auth {
                status: status.as_u16(),
                body,
            });
        }
        if !status.is_success() {
            return Err(DataSourceError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| DataSourceError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

/// Picks the worksheet titled `preferred`, else the one with the lowest index.
///
/// Returns `None` only when `sheets` is empty.
#[must_use]
pub fn select_worksheet<'a>(
    sheets: &'a [SheetProperties],
    preferred: &str,
) -> Option<&'a SheetProperties> {
    sheets
        .iter()
        .find(|s| s.title == preferred)
        .or_else(|| sheets.iter().min_by_key(|s| s.index))
}

/// A1 range covering a whole worksheet: the quoted title, with embedded
/// quotes doubled.
fn a1_sheet_range(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
