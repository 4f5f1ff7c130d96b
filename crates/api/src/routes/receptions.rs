use axum::routing::post;
use axum::Router;

use crate::handlers::receptions;
use crate::state::AppState;

/// Routes mounted at `/receptions`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(receptions::create))
}
