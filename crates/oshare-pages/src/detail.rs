//! Landing-page view model: slug lookup and the values derived from one
//! [`ProductRecord`] for the detail document.

use oshare_core::ProductRecord;

use crate::error::NotFoundError;
use crate::metadata::PageMetadata;
use crate::numeric::{parse_leading_float, parse_leading_int};

/// CTA and accent color used when a row leaves `theme_color` blank.
pub const DEFAULT_BUTTON_COLOR: &str = "#15803d";

/// Rating shown when `reviewer_score` is blank, unparseable, or zero.
pub const DEFAULT_REVIEW_SCORE: i64 = 5;

const STAR_COUNT: usize = 5;

/// Returns the first record routed under `slug`, in sheet order.
#[must_use]
pub fn find_by_slug<'a>(products: &'a [ProductRecord], slug: &str) -> Option<&'a ProductRecord> {
    products.iter().find(|product| product.has_slug(slug))
}

/// Resolves `slug` against the catalog and derives the detail view.
///
/// # Errors
///
/// Returns [`NotFoundError`] when no record carries `slug`.
pub fn resolve_detail<'a>(
    products: &'a [ProductRecord],
    slug: &str,
) -> Result<DetailView<'a>, NotFoundError> {
    find_by_slug(products, slug)
        .map(DetailView::from_product)
        .ok_or_else(|| NotFoundError {
            slug: slug.to_string(),
        })
}

/// Everything the detail document needs, borrowed from one record.
///
/// Optional blocks are `None` exactly when the page hides that section.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView<'a> {
    pub product: &'a ProductRecord,
    /// Parsed rating before clamping. May fall outside `0..=5`.
    pub review_score: i64,
    pub button_color: &'a str,
    pub price: Option<PriceBlock<'a>>,
    pub stock: Option<&'a str>,
    pub reviewer: Option<ReviewerBlock<'a>>,
    pub tag: Option<&'a str>,
    pub gallery: Vec<GalleryImage<'a>>,
    pub metadata: PageMetadata,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceBlock<'a> {
    pub price: &'a str,
    pub discount: Option<Discount<'a>>,
}

/// Struck-through regular price, plus the saving when both prices parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Discount<'a> {
    pub regular_price: &'a str,
    pub savings: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewerBlock<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub comment: Option<&'a str>,
    /// Avatar letter; `None` for an empty name.
    pub initial: Option<String>,
    pub stars: [bool; STAR_COUNT],
}

/// One cell of the image row. `position` is the 1-based column number
/// (`img_1`..`img_3`), so gaps are preserved in alt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage<'a> {
    pub position: usize,
    pub url: &'a str,
}

impl<'a> DetailView<'a> {
    #[must_use]
    pub fn from_product(product: &'a ProductRecord) -> Self {
        let review_score = review_score(product.reviewer_score.as_deref());

        let price = product.price.as_deref().map(|price| PriceBlock {
            price,
            discount: product
                .regular_price
                .as_deref()
                .map(|regular_price| Discount {
                    regular_price,
                    savings: savings(price, regular_price),
                }),
        });

        let reviewer = product.reviewer_name.as_deref().map(|name| ReviewerBlock {
            name,
            email: product.reviewer_email.as_deref(),
            comment: product.reviewer_comment.as_deref(),
            initial: avatar_initial(name),
            stars: lit_stars(review_score),
        });

        let gallery = [&product.img1, &product.img2, &product.img3]
            .into_iter()
            .enumerate()
            .filter_map(|(i, img)| {
                img.as_deref().map(|url| GalleryImage {
                    position: i + 1,
                    url,
                })
            })
            .collect();

        Self {
            product,
            review_score,
            button_color: product
                .theme_color
                .as_deref()
                .unwrap_or(DEFAULT_BUTTON_COLOR),
            price,
            stock: product.qty.as_deref(),
            reviewer,
            tag: product.tag.as_deref(),
            gallery,
            metadata: PageMetadata::for_product(product),
        }
    }

    /// Number of lit stars, `review_score` clamped into `0..=5`.
    #[must_use]
    pub fn star_count(&self) -> usize {
        lit_count(self.review_score)
    }
}

fn review_score(raw: Option<&str>) -> i64 {
    match raw.and_then(parse_leading_int) {
        Some(score) if score != 0 => score,
        _ => DEFAULT_REVIEW_SCORE,
    }
}

fn savings(price: &str, regular_price: &str) -> Option<f64> {
    Some(parse_leading_float(regular_price)? - parse_leading_float(price)?)
}

fn avatar_initial(name: &str) -> Option<String> {
    name.chars().next().map(|c| c.to_uppercase().collect())
}

fn lit_count(score: i64) -> usize {
    usize::try_from(score.clamp(0, 5)).unwrap_or(0)
}

fn lit_stars(score: i64) -> [bool; STAR_COUNT] {
    let lit = lit_count(score);
    std::array::from_fn(|i| i < lit)
}
