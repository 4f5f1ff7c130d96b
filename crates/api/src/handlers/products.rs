//! Handlers for the `/products` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pvz_core::product::Product;
use pvz_core::types::EntityId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /products`.
///
/// `type` stays a string here; the core rejects unknown product types.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[serde(rename = "type")]
    pub product_type: String,
    pub pvz_id: EntityId,
}

/// POST /products
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state
        .workflow
        .add_product(auth.role, input.pvz_id, &input.product_type)
        .await?;

    tracing::info!(
        pvz_id = %input.pvz_id,
        product_id = %product.id,
        reception_id = %product.reception_id,
        product_type = %product.product_type,
        user_id = %auth.user_id,
        "Product added",
    );

    Ok((StatusCode::CREATED, Json(product)))
}
