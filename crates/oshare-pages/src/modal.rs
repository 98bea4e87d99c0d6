//! Enlarged-image viewer state for the catalog grid.

use oshare_core::ProductRecord;

/// Either nothing is enlarged, or one product's hero image is.
///
/// Transitions are synchronous: [`ModalState::open`] from any state,
/// [`ModalState::close`] back to `Closed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        image: String,
        title: Option<String>,
        slug: Option<String>,
    },
}

impl ModalState {
    /// Opens the viewer on `product`. Products without a hero image cannot be
    /// enlarged; the state is left unchanged and `false` is returned.
    pub fn open(&mut self, product: &ProductRecord) -> bool {
        let Some(image) = &product.hero_image else {
            return false;
        };
        *self = Self::Open {
            image: image.clone(),
            title: product.title.clone(),
            slug: product.slug.clone(),
        };
        true
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Page scrolling is disabled exactly while the viewer is open.
    #[must_use]
    pub fn locks_scroll(&self) -> bool {
        self.is_open()
    }

    /// Opens the viewer on the tile at `index` (its row position), if that
    /// tile exists and has a hero image.
    #[must_use]
    pub fn for_selection(products: &[ProductRecord], index: Option<usize>) -> Self {
        let mut state = Self::Closed;
        if let Some(product) = index.and_then(|i| products.get(i)) {
            state.open(product);
        }
        state
    }
}
