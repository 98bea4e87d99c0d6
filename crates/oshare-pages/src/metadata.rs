use oshare_core::ProductRecord;

pub const NOT_FOUND_TITLE: &str = "Page Not Found";
pub const NOT_FOUND_DESCRIPTION: &str = "The page you are looking for does not exist.";

/// Title and description shared by the catalog pages.
pub const CATALOG_TITLE: &str = "OSHARE 洒落生活選物";
pub const CATALOG_DESCRIPTION: &str = "點綴你的日常";

pub const HOME_TITLE: &str = "OSHARE";
pub const HOME_DESCRIPTION: &str = "Professional Design · Perfect Presentation";

/// `<title>` and `<meta name="description">` for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

impl PageMetadata {
    /// Landing-page metadata: the product's title and subtitle. Absent cells
    /// render as empty strings.
    #[must_use]
    pub fn for_product(product: &ProductRecord) -> Self {
        Self {
            title: product.title.clone().unwrap_or_default(),
            description: product.subtitle.clone().unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self {
            title: NOT_FOUND_TITLE.to_string(),
            description: NOT_FOUND_DESCRIPTION.to_string(),
        }
    }

    #[must_use]
    pub fn catalog() -> Self {
        Self {
            title: CATALOG_TITLE.to_string(),
            description: CATALOG_DESCRIPTION.to_string(),
        }
    }

    #[must_use]
    pub fn home() -> Self {
        Self {
            title: HOME_TITLE.to_string(),
            description: HOME_DESCRIPTION.to_string(),
        }
    }

    /// Metadata for `slug`, falling back to the not-found pair.
    #[must_use]
    pub fn for_slug(products: &[ProductRecord], slug: &str) -> Self {
        crate::detail::find_by_slug(products, slug).map_or_else(Self::not_found, Self::for_product)
    }
}
