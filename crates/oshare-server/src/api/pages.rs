use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension,
};
use oshare_pages::{
    render_catalog_html, render_home_html, render_not_found_html, CatalogLoad, CatalogVariant,
};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::AppState;

#[derive(Debug, Deserialize)]
pub(super) struct CatalogQuery {
    /// Row position of the tile whose hero image is shown enlarged.
    pub selected: Option<String>,
}

impl CatalogQuery {
    /// Anything that is not a row position leaves the modal closed.
    fn selected_index(&self) -> Option<usize> {
        self.selected.as_deref().and_then(|raw| raw.parse().ok())
    }
}

pub(super) async fn home() -> Html<String> {
    Html(render_home_html())
}

pub(super) async fn products_catalog(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<CatalogQuery>,
) -> Html<String> {
    catalog(&state, &req_id, query.selected_index(), CatalogVariant::Products).await
}

pub(super) async fn product_grid(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<CatalogQuery>,
) -> Html<String> {
    catalog(&state, &req_id, query.selected_index(), CatalogVariant::Grid).await
}

async fn catalog(
    state: &AppState,
    req_id: &RequestId,
    selected: Option<usize>,
    variant: CatalogVariant,
) -> Html<String> {
    let result = state.source.fetch_catalog().await;
    if let Err(e) = &result {
        tracing::error!(
            request_id = %req_id.0,
            error = %e,
            path = variant.path(),
            "catalog fetch failed; rendering empty grid"
        );
    }
    let load = CatalogLoad::from_result(result);
    Html(render_catalog_html(&load, selected, variant))
}

/// `GET /oshare/{slug}`: landing page served through the revalidation cache.
pub(super) async fn landing_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Response {
    match state.pages.get_or_render(&slug, &state.source).await {
        Ok(Some(html)) => Html(html.to_string()).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Html(render_not_found_html())).into_response(),
        Err(e) => {
            tracing::error!(request_id = %req_id.0, slug = %slug, error = %e, "landing page render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
