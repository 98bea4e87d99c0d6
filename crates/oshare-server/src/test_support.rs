use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use oshare_core::ProductRecord;
use oshare_sheets::DataSourceError;

use crate::source::CatalogSource;

/// In-memory catalog that counts reads. `None` makes every read fail.
#[derive(Debug, Default)]
pub struct FakeSource {
    catalog: Mutex<Option<Vec<ProductRecord>>>,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn new(catalog: Vec<ProductRecord>) -> Arc<Self> {
        Arc::new(Self {
            catalog: Mutex::new(Some(catalog)),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set(&self, catalog: Vec<ProductRecord>) {
        *self.catalog.lock().expect("fake catalog lock") = Some(catalog);
    }

    pub fn set_failing(&self) {
        *self.catalog.lock().expect("fake catalog lock") = None;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for FakeSource {
    async fn fetch_catalog(&self) -> Result<Vec<ProductRecord>, DataSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.catalog
            .lock()
            .expect("fake catalog lock")
            .clone()
            .ok_or_else(|| DataSourceError::UnexpectedStatus {
                status: 503,
                url: "https://sheets.test/v4/spreadsheets/fake".to_string(),
            })
    }
}

pub fn product(slug: &str, title: &str) -> ProductRecord {
    ProductRecord {
        slug: Some(slug.to_string()),
        title: Some(title.to_string()),
        ..ProductRecord::default()
    }
}
