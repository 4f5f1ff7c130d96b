//! Route definitions for the `/pvz` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pvz;
use crate::state::AppState;

/// Routes mounted at `/pvz`.
///
/// ```text
/// GET, POST /                                -> list, create
/// POST      /{pvz_id}/close_last_reception   -> close_last_reception
/// POST      /{pvz_id}/delete_last_product    -> delete_last_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pvz::list).post(pvz::create))
        .route(
            "/{pvz_id}/close_last_reception",
            post(pvz::close_last_reception),
        )
        .route(
            "/{pvz_id}/delete_last_product",
            post(pvz::delete_last_product),
        )
}
