use serde::{Deserialize, Serialize};

/// One landing-page row from the content spreadsheet.
///
/// Every field is optional: a blank cell or a missing column is `None`, and
/// rendering decides section visibility from presence alone. Values are
/// carried verbatim from the sheet, without trimming or validation.
///
/// Serialized with the camelCase attribute names the storefront API has
/// always exposed (`heroImage`, `regularPrice`, ...); absent fields are
/// omitted from the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Routing key for `/oshare/{slug}`. Not guaranteed unique.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    /// Decimal-looking string, e.g. `"1280"`. Parsed only at display time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<String>,
    /// Hex color such as `"#be123c"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img3: Option<String>,
    /// Carried through the API but not used by any page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_comment: Option<String>,
    /// Integer-looking string, e.g. `"4"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_score: Option<String>,
}

impl ProductRecord {
    /// Returns `true` when this record is routed under `slug`.
    #[must_use]
    pub fn has_slug(&self, slug: &str) -> bool {
        self.slug.as_deref() == Some(slug)
    }

    /// The three gallery images in column order, skipping absent cells.
    pub fn gallery_images(&self) -> impl Iterator<Item = &str> {
        [&self.img1, &self.img2, &self.img3]
            .into_iter()
            .filter_map(|img| img.as_deref())
    }
}
