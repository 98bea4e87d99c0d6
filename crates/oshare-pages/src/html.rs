//! Server-side HTML rendering.
//!
//! Every value that originates in the spreadsheet passes through [`escape`]
//! before interpolation. Values are otherwise emitted exactly as stored.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::catalog::{CatalogLoad, CatalogVariant, CatalogView, TileImage};
use crate::detail::{DetailView, PriceBlock, ReviewerBlock};
use crate::metadata::PageMetadata;
use crate::modal::ModalState;
use crate::numeric::format_amount;

const LOGO_PATH: &str = "/Oshare_logo.png";
const LINE_ADD_FRIEND_URL: &str = "https://line.me/R/ti/p/@014wgqai";
const LINE_QR_PATH: &str = "/L_oshare_2dbarcodes_BW.png";
const LINE_ID: &str = "@014wgqai";
const CONTACT_EMAIL: &str = "takaocybercorner@gmail.com";
const CONTACT_BUTTON_COLOR: &str = "#15803d";

/// Unreserved URL characters stay readable in slugs.
const SLUG_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escapes text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn encode_slug(slug: &str) -> String {
    utf8_percent_encode(slug, SLUG_ENCODE_SET).to_string()
}

/// Path of the landing page for `slug`.
#[must_use]
pub fn detail_path(slug: &str) -> String {
    format!("/oshare/{}", encode_slug(slug))
}

fn document(meta: &PageMetadata, body: &str, lock_scroll: bool) -> String {
    let body_attr = if lock_scroll {
        r#" style="overflow:hidden""#
    } else {
        ""
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"zh-Hant\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <meta name=\"description\" content=\"{description}\">\n\
         </head>\n<body{body_attr}>\n{body}</body>\n</html>\n",
        title = escape(&meta.title),
        description = escape(&meta.description),
    )
}

fn cta_link(href: Option<&str>, text: Option<&str>, color: &str) -> String {
    let href_attr = href
        .map(|href| format!(" href=\"{}\"", escape(href)))
        .unwrap_or_default();
    format!(
        "<a class=\"cta\"{href_attr} style=\"background-color:{}\">{}</a>\n",
        escape(color),
        escape(text.unwrap_or_default()),
    )
}

// ---------------------------------------------------------------------------
// Landing page
// ---------------------------------------------------------------------------

/// Renders the landing page for one product.
#[must_use]
pub fn render_detail_html(view: &DetailView<'_>) -> String {
    let product = view.product;
    let color = view.button_color;
    let mut body = String::from("<main class=\"landing\">\n<section class=\"hero\">\n");

    body.push_str(&format!(
        "<div class=\"hero-image\"><img src=\"{}\" alt=\"{}\"></div>\n",
        escape(product.hero_image.as_deref().unwrap_or_default()),
        escape(product.title.as_deref().unwrap_or_default()),
    ));

    body.push_str("<div class=\"hero-info\">\n");
    if let Some(tag) = view.tag {
        body.push_str(&format!(
            "<span class=\"tag\" style=\"border-color:{c};color:{c}\">{}</span>\n",
            escape(tag),
            c = escape(color),
        ));
    }
    body.push_str(&format!(
        "<h1>{}</h1>\n<p class=\"subtitle\">{}</p>\n",
        escape(product.title.as_deref().unwrap_or_default()),
        escape(product.subtitle.as_deref().unwrap_or_default()),
    ));

    if let Some(price) = &view.price {
        body.push_str(&price_html(price));
    }
    if let Some(qty) = view.stock {
        body.push_str(&format!(
            "<p class=\"stock\">尚有 <strong>{}</strong> 庫存</p>\n",
            escape(qty)
        ));
    }

    body.push_str(&cta_link(
        product.cta_link.as_deref(),
        product.cta_text.as_deref(),
        color,
    ));
    body.push_str("<ul class=\"trust-badges\">\n");
    for badge in ["品質保證", "台灣發貨", "快速出貨"] {
        body.push_str(&format!(
            "<li><span style=\"color:{}\">✔</span> {badge}</li>\n",
            escape(color)
        ));
    }
    body.push_str("</ul>\n</div>\n</section>\n");

    body.push_str(&format!(
        "<section class=\"details\">\n<h2>商品詳情</h2>\n\
         <p style=\"white-space:pre-line\">{}</p>\n</section>\n",
        escape(product.description.as_deref().unwrap_or_default()),
    ));

    if let Some(reviewer) = &view.reviewer {
        body.push_str(&reviewer_html(reviewer));
    }

    if !view.gallery.is_empty() {
        body.push_str("<section class=\"gallery\">\n");
        for image in &view.gallery {
            body.push_str(&format!(
                "<div class=\"gallery-cell\"><img src=\"{}\" alt=\"Product image {}\"></div>\n",
                escape(image.url),
                image.position,
            ));
        }
        body.push_str("</section>\n");
    }

    body.push_str("<section class=\"bottom-cta\">\n");
    body.push_str(&cta_link(
        product.cta_link.as_deref(),
        product.cta_text.as_deref(),
        color,
    ));
    body.push_str(
        "<div class=\"qr-placeholder\"><p>QR Code</p></div>\n\
         <p>官方 LINE QR CODE</p>\n\
         <a href=\"/oshare/products\">查看全部商品</a>\n\
         </section>\n</main>\n",
    );

    document(&view.metadata, &body, false)
}

fn price_html(block: &PriceBlock<'_>) -> String {
    let mut out = format!(
        "<div class=\"price\">\n<span class=\"price-now\">NT${}</span>\n",
        escape(block.price)
    );
    if let Some(discount) = &block.discount {
        out.push_str(&format!(
            "<span class=\"price-regular\" style=\"text-decoration:line-through\">NT${}</span>\n",
            escape(discount.regular_price)
        ));
        if let Some(savings) = discount.savings {
            out.push_str(&format!(
                "<span class=\"price-savings\">Save NT${}</span>\n",
                format_amount(savings)
            ));
        }
    }
    out.push_str("</div>\n");
    out
}

fn reviewer_html(reviewer: &ReviewerBlock<'_>) -> String {
    let stars: String = reviewer
        .stars
        .iter()
        .map(|lit| {
            if *lit {
                "<span class=\"star lit\">★</span>"
            } else {
                "<span class=\"star\">★</span>"
            }
        })
        .collect();

    format!(
        "<section class=\"reviews\">\n<h2>消費者評價</h2>\n\
         <div class=\"review\">\n\
         <span class=\"avatar\">{initial}</span>\n\
         <h3>{name}</h3>\n<p class=\"email\">{email}</p>\n\
         <p class=\"comment\">{comment}</p>\n\
         <div class=\"stars\">{stars}</div>\n\
         </div>\n</section>\n",
        initial = escape(reviewer.initial.as_deref().unwrap_or_default()),
        name = escape(reviewer.name),
        email = escape(reviewer.email.unwrap_or_default()),
        comment = escape(reviewer.comment.unwrap_or_default()),
    )
}

// ---------------------------------------------------------------------------
// Catalog grid
// ---------------------------------------------------------------------------

/// Renders one of the catalog grids. `selected` is a tile's row position and
/// opens the image modal on it, when that tile has a hero image.
#[must_use]
pub fn render_catalog_html(
    load: &CatalogLoad,
    selected: Option<usize>,
    variant: CatalogVariant,
) -> String {
    let meta = PageMetadata::catalog();
    let view = CatalogView::with_selection(load.products(), selected);
    let mut body = format!(
        "<main class=\"catalog\">\n<header>\n\
         <img src=\"{LOGO_PATH}\" alt=\"OSHARE\">\n\
         <p class=\"tagline\">\"Browse our selection of modern lifestyle goods.\"</p>\n\
         </header>\n<section class=\"grid\">\n"
    );

    for (index, tile) in view.tiles.iter().enumerate() {
        let title = escape(tile.title.as_deref().unwrap_or_default());
        body.push_str("<div class=\"tile\">\n");
        match &tile.image {
            TileImage::Hero(url) => body.push_str(&format!(
                "<a href=\"{}?selected={index}\"><img src=\"{}\" alt=\"{title}\"></a>\n",
                variant.path(),
                escape(url),
            )),
            TileImage::Placeholder => {
                body.push_str("<div class=\"placeholder\" aria-hidden=\"true\"></div>\n");
            }
        }
        body.push_str(&format!("<h3>{title}</h3>\n"));
        if let Some(label) = &tile.price_label {
            body.push_str(&format!("<p class=\"price\">{}</p>\n", escape(label)));
        }
        body.push_str("</div>\n");
    }
    body.push_str("</section>\n");

    body.push_str(&modal_html(&view.modal, variant));

    if variant.shows_contact_footer() {
        body.push_str(&format!(
            "<section class=\"contact\">\n\
             <a class=\"cta\" href=\"{LINE_ADD_FRIEND_URL}\" target=\"_blank\" rel=\"noopener noreferrer\" \
             style=\"background-color:{CONTACT_BUTTON_COLOR}\">透過官方 Line 聯絡我們</a>\n\
             <img src=\"{LINE_QR_PATH}\" alt=\"官方 LINE QR CODE\">\n\
             <p>官方 LINE ID: {LINE_ID}</p>\n\
             </section>\n"
        ));
    }
    body.push_str("</main>\n");

    document(&meta, &body, view.modal.locks_scroll())
}

fn modal_html(modal: &ModalState, variant: CatalogVariant) -> String {
    let ModalState::Open { image, title, slug } = modal else {
        return String::new();
    };

    let title_text = escape(title.as_deref().unwrap_or_default());
    let mut out = format!(
        "<div class=\"modal\" role=\"dialog\">\n\
         <a class=\"modal-close\" href=\"{}\" aria-label=\"Close modal\">×</a>\n\
         <img src=\"{}\" alt=\"{title_text}\">\n",
        variant.path(),
        escape(image),
    );

    if title.as_deref().is_some_and(|t| !t.is_empty()) {
        out.push_str(&format!("<div class=\"modal-caption\">\n<h2>{title_text}</h2>\n"));
        if let (true, Some(slug)) = (variant.links_to_detail(), slug) {
            out.push_str(&format!(
                "<a href=\"{}\">查看產品詳情 ➡️</a>\n",
                detail_path(slug)
            ));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");
    out
}

// ---------------------------------------------------------------------------
// Static pages
// ---------------------------------------------------------------------------

#[must_use]
pub fn render_home_html() -> String {
    let features = [
        ("🎨", "客製化設計", "Custom Design", "符合品牌形象的獨特設計", "Unique designs that match your brand"),
        ("🚀", "快速部署", "Fast Deployment", "專業託管服務，即刻上線", "Professional hosting, launch immediately"),
        ("📱", "響應式設計", "Responsive Design", "完美適配所有裝置", "Perfect on all devices"),
    ];

    let mut body = String::from(
        "<main class=\"home\">\n<section class=\"hero\">\n\
         <div class=\"hero-banner\">\n<p>專業設計 · 完美呈現</p>\n\
         <p>Professional Design · Perfect Presentation</p>\n</div>\n\
         <h1>打造您的專屬頁面</h1>\n<h2>Create Your Perfect Landing Page</h2>\n\
         <p>我們專門協助客戶設計與架設高品質的著陸頁面與產品頁面。<br>\
         無論您是新創公司、個人品牌，還是成熟企業，<br>\
         我們都能為您量身打造專業且吸引人的網頁解決方案。</p>\n\
         <p>We help customers design and host their landing pages and product pages.<br>\
         Whether you&#39;re a startup, personal brand, or established business,<br>\
         we create professional and engaging web solutions tailored to your needs.</p>\n\
         </section>\n<section class=\"features\">\n",
    );

    for (icon, zh, en, zh_blurb, en_blurb) in features {
        body.push_str(&format!(
            "<div class=\"feature\">\n<div class=\"icon\">{icon}</div>\n\
             <h3>{zh}</h3>\n<p>{en}</p>\n<p>{zh_blurb}<br>{en_blurb}</p>\n</div>\n"
        ));
    }

    body.push_str(&format!(
        "</section>\n<section class=\"contact\">\n\
         <h3>對我們的服務感興趣？</h3>\n<p>Interested in our services?</p>\n\
         <p>聯絡我們 | Contact Us</p>\n\
         <a href=\"mailto:{CONTACT_EMAIL}\">{CONTACT_EMAIL}</a>\n\
         <p>我們會盡快回覆您的詢問<br>We&#39;ll respond to your inquiry as soon as possible</p>\n\
         </section>\n</main>\n\
         <footer><p>© 2025 Takao Cyber Corner | 高雄賽博角落</p></footer>\n"
    ));

    document(&PageMetadata::home(), &body, false)
}

#[must_use]
pub fn render_not_found_html() -> String {
    let meta = PageMetadata::not_found();
    let body = format!(
        "<main class=\"not-found\">\n<h1>404</h1>\n<h2>{}</h2>\n<p>{}</p>\n\
         <a href=\"/oshare/products\">查看全部商品</a>\n</main>\n",
        escape(&meta.title),
        escape(&meta.description),
    );
    document(&meta, &body, false)
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;
