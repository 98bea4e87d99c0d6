//! Google Sheets v4 and OAuth response shapes.
//!
//! Sheets serves proto3 JSON, which omits zero-valued fields: the first
//! worksheet usually arrives without an `index` key, and a worksheet with no
//! data arrives without `values`. Both are `#[serde(default)]`.

use serde::Deserialize;

/// Response of `GET /v4/spreadsheets/{id}?fields=sheets.properties(title,index)`.
#[derive(Debug, Deserialize)]
pub struct SpreadsheetMetadata {
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

#[derive(Debug, Deserialize)]
pub struct Sheet {
    pub properties: SheetProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SheetProperties {
    /// Tab name shown in the spreadsheet UI, e.g. `"landing_pages"`.
    pub title: String,
    /// Zero-based tab position.
    #[serde(default)]
    pub index: i64,
}

/// Response of `GET /v4/spreadsheets/{id}/values/{range}`.
///
/// Cells are formatted strings by default; numbers and booleans only appear
/// with other render options but are accepted anyway. Trailing blank cells
/// are dropped by the API, so rows can be shorter than the header.
#[derive(Debug, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub values: Vec<Vec<serde_json::Value>>,
}

/// Successful response of the OAuth token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Lifetime in seconds.
    #[serde(default = "default_expires_in")]
    pub expires_in: i64,
}

fn default_expires_in() -> i64 {
    3600
}
