//! Time-based revalidation for rendered landing pages.
//!
//! A page younger than the revalidation window is served as-is. An older page
//! is still served immediately, and one background task re-renders it from a
//! fresh catalog read. Slugs that resolve to nothing are never stored.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
    time::Duration,
};

use oshare_pages::{render_detail_html, resolve_detail};
use oshare_sheets::DataSourceError;
use tokio::{
    sync::{Mutex, RwLock},
    time::Instant,
};

use crate::source::CatalogSource;

#[derive(Debug, Clone)]
struct CachedPage {
    html: Arc<str>,
    rendered_at: Instant,
}

#[derive(Debug, Default)]
struct Inner {
    pages: RwLock<HashMap<String, CachedPage>>,
    refreshing: Mutex<HashSet<String>>,
}

/// Shared landing-page cache. Cloning is cheap; clones share entries.
#[derive(Debug, Clone)]
pub struct PageCache {
    revalidate_after: Duration,
    inner: Arc<Inner>,
}

impl PageCache {
    #[must_use]
    pub fn new(revalidate_after: Duration) -> Self {
        Self {
            revalidate_after,
            inner: Arc::new(Inner::default()),
        }
    }

    /// Returns the landing page for `slug`, or `None` when no product carries
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError`] when a cache miss requires a catalog read
    /// and that read fails. Stale hits never fail.
    pub async fn get_or_render(
        &self,
        slug: &str,
        source: &Arc<dyn CatalogSource>,
    ) -> Result<Option<Arc<str>>, DataSourceError> {
        let cached = self.inner.pages.read().await.get(slug).cloned();

        if let Some(page) = cached {
            if page.rendered_at.elapsed() >= self.revalidate_after {
                self.spawn_refresh(slug, Arc::clone(source)).await;
            }
            return Ok(Some(page.html));
        }

        let products = source.fetch_catalog().await?;
        Ok(self.store_rendered(slug, &products).await)
    }

    /// Renders every slug in the catalog up front, so first visitors hit a
    /// warm cache. Returns the number of pages stored.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError`] if the catalog read fails.
    pub async fn prerender_all(
        &self,
        source: &Arc<dyn CatalogSource>,
    ) -> Result<usize, DataSourceError> {
        let products = source.fetch_catalog().await?;
        let mut stored = 0;
        for slug in products.iter().filter_map(|p| p.slug.as_deref()) {
            if self.store_rendered(slug, &products).await.is_some() {
                stored += 1;
            }
        }
        Ok(stored)
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.inner.pages.read().await.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    #[cfg(test)]
    async fn is_refreshing(&self, slug: &str) -> bool {
        self.inner.refreshing.lock().await.contains(slug)
    }

    async fn store_rendered(
        &self,
        slug: &str,
        products: &[oshare_core::ProductRecord],
    ) -> Option<Arc<str>> {
        let Ok(view) = resolve_detail(products, slug) else {
            self.inner.pages.write().await.remove(slug);
            return None;
        };

        let html: Arc<str> = render_detail_html(&view).into();
        self.inner.pages.write().await.insert(
            slug.to_string(),
            CachedPage {
                html: Arc::clone(&html),
                rendered_at: Instant::now(),
            },
        );
        Some(html)
    }

    async fn spawn_refresh(&self, slug: &str, source: Arc<dyn CatalogSource>) {
        if !self.inner.refreshing.lock().await.insert(slug.to_string()) {
            return;
        }

        let cache = self.clone();
        let slug = slug.to_string();
        tokio::spawn(async move {
            match source.fetch_catalog().await {
                Ok(products) => {
                    if cache.store_rendered(&slug, &products).await.is_none() {
                        tracing::info!(slug = %slug, "landing page no longer in catalog; evicted");
                    } else {
                        tracing::debug!(slug = %slug, "landing page regenerated");
                    }
                }
                Err(e) => {
                    tracing::warn!(slug = %slug, error = %e, "landing page regeneration failed; serving stale copy");
                }
            }
            cache.inner.refreshing.lock().await.remove(&slug);
        });
    }
}
