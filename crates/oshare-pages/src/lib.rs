//! Page composition for the storefront: derives display values from
//! [`oshare_core::ProductRecord`]s and renders HTML documents.
//!
//! Nothing here performs I/O. Callers fetch the catalog, then hand slices of
//! records to [`CatalogView`] or [`resolve_detail`].

pub mod catalog;
pub mod detail;
pub mod error;
pub mod html;
pub mod metadata;
pub mod modal;
pub mod numeric;

pub use catalog::{CatalogLoad, CatalogTile, CatalogVariant, CatalogView, TileImage};
pub use detail::{
    find_by_slug, resolve_detail, DetailView, Discount, GalleryImage, PriceBlock, ReviewerBlock,
    DEFAULT_BUTTON_COLOR, DEFAULT_REVIEW_SCORE,
};
pub use error::NotFoundError;
pub use html::{
    detail_path, render_catalog_html, render_detail_html, render_home_html, render_not_found_html,
};
pub use metadata::PageMetadata;
pub use modal::ModalState;
