//! Handlers for the `/pvz` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pvz_core::listing::PickupPointView;
use pvz_core::pickup_point::PickupPoint;
use pvz_core::product::Product;
use pvz_core::reception::Reception;
use pvz_core::types::EntityId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::ListPvzParams;
use crate::state::AppState;

/// Request body for `POST /pvz`.
#[derive(Debug, Deserialize)]
pub struct CreatePvzRequest {
    pub city: String,
}

/// POST /pvz
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<CreatePvzRequest>,
) -> AppResult<(StatusCode, Json<PickupPoint>)> {
    let point = state
        .workflow
        .create_pickup_point(auth.role, &input.city)
        .await?;

    tracing::info!(
        pvz_id = %point.id,
        city = %point.city,
        user_id = %auth.user_id,
        "Pickup point created",
    );

    Ok((StatusCode::CREATED, Json(point)))
}

/// GET /pvz?startDate=&endDate=&page=&limit=
///
/// Pickup points in registration order, each with the receptions opened
/// inside the date window and their products.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(params): AppQuery<ListPvzParams>,
) -> AppResult<Json<Vec<PickupPointView>>> {
    let filter = params.into_filter()?;
    let views = state.workflow.list_pickup_points(auth.role, &filter).await?;
    Ok(Json(views))
}

/// POST /pvz/{pvz_id}/close_last_reception
pub async fn close_last_reception(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(pvz_id): AppPath<EntityId>,
) -> AppResult<Json<Reception>> {
    let reception = state
        .workflow
        .close_last_reception(auth.role, pvz_id)
        .await?;

    tracing::info!(
        pvz_id = %pvz_id,
        reception_id = %reception.id,
        user_id = %auth.user_id,
        "Reception closed",
    );

    Ok(Json(reception))
}

/// POST /pvz/{pvz_id}/delete_last_product
///
/// Returns the product that was removed.
pub async fn delete_last_product(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(pvz_id): AppPath<EntityId>,
) -> AppResult<Json<Product>> {
    let product = state
        .workflow
        .delete_last_product(auth.role, pvz_id)
        .await?;

    tracing::info!(
        pvz_id = %pvz_id,
        product_id = %product.id,
        reception_id = %product.reception_id,
        user_id = %auth.user_id,
        "Product deleted",
    );

    Ok(Json(product))
}
