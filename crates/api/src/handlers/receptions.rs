//! Handlers for the `/receptions` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pvz_core::reception::Reception;
use pvz_core::types::EntityId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /receptions`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReceptionRequest {
    pub pvz_id: EntityId,
}

/// POST /receptions
///
/// Open a reception at the pickup point. Fails while another is in progress.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<CreateReceptionRequest>,
) -> AppResult<(StatusCode, Json<Reception>)> {
    let reception = state
        .workflow
        .open_reception(auth.role, input.pvz_id)
        .await?;

    tracing::info!(
        pvz_id = %input.pvz_id,
        reception_id = %reception.id,
        user_id = %auth.user_id,
        "Reception opened",
    );

    Ok((StatusCode::CREATED, Json(reception)))
}
