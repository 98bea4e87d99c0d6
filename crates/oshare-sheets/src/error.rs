use thiserror::Error;

/// Failures while reading the content spreadsheet.
///
/// None of these are retried; callers get either the whole catalog or one
/// of these.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The OAuth token endpoint rejected the service-account assertion.
    #[error("authentication failed with status {status}: {body}")]
    Auth { status: u16, body: String },

    /// The service-account private key could not be loaded or used for signing.
    #[error("invalid service account key: {0}")]
    InvalidPrivateKey(#[source] jsonwebtoken::errors::Error),

    /// The Sheets API answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The spreadsheet opened but contains no worksheets at all.
    #[error("no worksheet found in spreadsheet {spreadsheet_id}")]
    NoWorksheet { spreadsheet_id: String },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
