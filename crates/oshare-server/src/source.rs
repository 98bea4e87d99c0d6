use async_trait::async_trait;
use oshare_core::ProductRecord;
use oshare_sheets::{DataSourceError, SheetsClient};

/// Where page handlers get the catalog from. Every call is a fresh read.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<ProductRecord>, DataSourceError>;
}

#[async_trait]
impl CatalogSource for SheetsClient {
    async fn fetch_catalog(&self) -> Result<Vec<ProductRecord>, DataSourceError> {
        SheetsClient::fetch_catalog(self).await
    }
}
