use axum::{extract::State, http::StatusCode, Extension, Json};
use oshare_core::ProductRecord;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// `GET /api/products`: the whole catalog as a bare JSON array, in sheet
/// order.
pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<Vec<ProductRecord>>, ApiError> {
    match state.source.fetch_catalog().await {
        Ok(products) => Ok(Json(products)),
        Err(e) => {
            tracing::error!(request_id = %req_id.0, error = %e, "catalog fetch failed");
            Err(ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch products",
            ))
        }
    }
}
