//! Read-only access to the landing-page spreadsheet.
//!
//! [`SheetsClient`] authenticates with a service account, picks the
//! worksheet, and returns its rows as [`RawRow`]s; [`normalize_rows`] maps
//! them onto [`oshare_core::ProductRecord`].

pub mod auth;
pub mod client;
pub mod error;
pub mod normalize;
pub mod table;
pub mod types;

pub use auth::{ServiceAccountAuth, StaticToken, TokenProvider, SPREADSHEETS_READONLY_SCOPE};
pub use client::{SheetsClient, SheetsConfig};
pub use error::DataSourceError;
pub use normalize::{normalize_row, normalize_rows};
pub use table::RawRow;
