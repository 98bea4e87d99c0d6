//! Catalog grid view model.

use oshare_core::ProductRecord;

use crate::modal::ModalState;

/// The two storefront grids. They share tiles and modal behavior and differ
/// only in what the modal links to and whether the contact footer is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogVariant {
    /// `/oshare/products`: modal links to the landing page, LINE footer.
    Products,
    /// `/oshare/product-grid`: image-only modal, no footer.
    Grid,
}

impl CatalogVariant {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Products => "/oshare/products",
            Self::Grid => "/oshare/product-grid",
        }
    }

    #[must_use]
    pub fn links_to_detail(self) -> bool {
        matches!(self, Self::Products)
    }

    #[must_use]
    pub fn shows_contact_footer(self) -> bool {
        matches!(self, Self::Products)
    }
}

/// Outcome of loading the catalog for one grid render. Grids render after
/// the fetch settles, so there is no in-flight state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLoad {
    Loaded(Vec<ProductRecord>),
    /// The fetch failed. The grid renders empty rather than erroring.
    Failed,
}

impl CatalogLoad {
    /// Collapses a fetch result; the error is dropped, callers log it first.
    pub fn from_result<E>(result: Result<Vec<ProductRecord>, E>) -> Self {
        result.map_or(Self::Failed, Self::Loaded)
    }

    /// Products to show: empty unless loaded.
    #[must_use]
    pub fn products(&self) -> &[ProductRecord] {
        match self {
            Self::Loaded(products) => products,
            Self::Failed => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileImage {
    Hero(String),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogTile {
    pub slug: Option<String>,
    pub title: Option<String>,
    /// `NT$<price>` when the row has a price.
    pub price_label: Option<String>,
    pub image: TileImage,
}

impl CatalogTile {
    #[must_use]
    pub fn from_product(product: &ProductRecord) -> Self {
        Self {
            slug: product.slug.clone(),
            title: product.title.clone(),
            price_label: product.price.as_ref().map(|price| format!("NT${price}")),
            image: product
                .hero_image
                .clone()
                .map_or(TileImage::Placeholder, TileImage::Hero),
        }
    }

    /// Only tiles with a hero image can be enlarged.
    #[must_use]
    pub fn is_clickable(&self) -> bool {
        matches!(self.image, TileImage::Hero(_))
    }
}

/// Tiles in sheet order plus the enlarged-image state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView {
    pub tiles: Vec<CatalogTile>,
    pub modal: ModalState,
}

impl CatalogView {
    #[must_use]
    pub fn from_products(products: &[ProductRecord]) -> Self {
        Self {
            tiles: products.iter().map(CatalogTile::from_product).collect(),
            modal: ModalState::Closed,
        }
    }

    /// Builds the view and opens the modal on the tile at row position
    /// `selected`, when that tile has a hero image.
    #[must_use]
    pub fn with_selection(products: &[ProductRecord], selected: Option<usize>) -> Self {
        Self {
            modal: ModalState::for_selection(products, selected),
            ..Self::from_products(products)
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(slug: &str, hero: Option<&str>, price: Option<&str>) -> ProductRecord {
        ProductRecord {
            slug: Some(slug.to_string()),
            title: Some(slug.to_uppercase()),
            hero_image: hero.map(str::to_string),
            price: price.map(str::to_string),
            ..ProductRecord::default()
        }
    }

    #[test]
    fn tiles_follow_sheet_order() {
        let products = vec![
            product("b", None, None),
            product("a", None, None),
            product("c", None, None),
        ];
        let view = CatalogView::from_products(&products);
        let slugs: Vec<_> = view.tiles.iter().filter_map(|t| t.slug.as_deref()).collect();
        assert_eq!(slugs, ["b", "a", "c"]);
        assert_eq!(view.modal, ModalState::Closed);
    }

    #[test]
    fn tile_uses_hero_or_placeholder() {
        let hero = CatalogTile::from_product(&product("a", Some("a.jpg"), None));
        assert_eq!(hero.image, TileImage::Hero("a.jpg".to_string()));
        assert!(hero.is_clickable());

        let bare = CatalogTile::from_product(&product("b", None, None));
        assert_eq!(bare.image, TileImage::Placeholder);
        assert!(!bare.is_clickable());
    }

    #[test]
    fn price_label_only_when_price_present() {
        let priced = CatalogTile::from_product(&product("a", None, Some("980")));
        assert_eq!(priced.price_label.as_deref(), Some("NT$980"));

        let unpriced = CatalogTile::from_product(&product("b", None, None));
        assert!(unpriced.price_label.is_none());
    }

    #[test]
    fn with_selection_opens_modal_for_hero_tile() {
        let products = vec![product("a", Some("a.jpg"), None), product("b", None, None)];

        let view = CatalogView::with_selection(&products, Some(0));
        assert!(view.modal.is_open());
        assert_eq!(view.tiles.len(), 2);

        let view = CatalogView::with_selection(&products, Some(1));
        assert!(!view.modal.is_open());
    }

    #[test]
    fn failed_load_yields_empty_grid() {
        let load = CatalogLoad::from_result::<&str>(Err("boom"));
        assert_eq!(load, CatalogLoad::Failed);
        assert!(CatalogView::from_products(load.products()).is_empty());
    }

    #[test]
    fn loaded_catalog_exposes_products() {
        let load = CatalogLoad::from_result::<()>(Ok(vec![product("a", None, None)]));
        assert_eq!(load.products().len(), 1);
    }

    #[test]
    fn variants_differ_in_links_and_footer() {
        assert!(CatalogVariant::Products.links_to_detail());
        assert!(CatalogVariant::Products.shows_contact_footer());
        assert!(!CatalogVariant::Grid.links_to_detail());
        assert!(!CatalogVariant::Grid.shows_contact_footer());
        assert_eq!(CatalogVariant::Grid.path(), "/oshare/product-grid");
    }
}
