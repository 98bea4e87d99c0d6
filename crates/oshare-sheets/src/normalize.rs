//! Mapping from spreadsheet rows to [`ProductRecord`].
//!
//! Column names on the sheet are snake_case (`img_hero`, `regular_price`,
//! ...). Values are copied verbatim; nothing is trimmed, coerced, or
//! validated here.

use oshare_core::ProductRecord;

use crate::table::RawRow;

/// Normalizes one row. Missing columns become `None`; this never fails.
#[must_use]
pub fn normalize_row(row: &RawRow) -> ProductRecord {
    let cell = |column: &str| row.get(column).map(str::to_owned);

    ProductRecord {
        slug: cell("slug"),
        title: cell("title"),
        subtitle: cell("subtitle"),
        hero_image: cell("img_hero"),
        description: cell("description"),
        category: cell("category"),
        cta_text: cell("cta_text"),
        cta_link: cell("cta_link"),
        price: cell("price"),
        regular_price: cell("regular_price"),
        theme_color: cell("theme_color"),
        tag: cell("tag"),
        qty: cell("qty"),
        img1: cell("img_1"),
        img2: cell("img_2"),
        img3: cell("img_3"),
        spec: cell("spec"),
        reviewer_name: cell("reviewer_name"),
        reviewer_email: cell("reviewer_email"),
        reviewer_comment: cell("reviewer_comment"),
        reviewer_score: cell("reviewer_score"),
    }
}

/// Normalizes every row, preserving sheet order.
#[must_use]
pub fn normalize_rows(rows: &[RawRow]) -> Vec<ProductRecord> {
    rows.iter().map(normalize_row).collect()
}
