pub mod auth;
pub mod health;
pub mod products;
pub mod pvz;
pub mod receptions;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree. Everything is mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /dummyLogin                              POST   token for a role
/// /register                                POST   create account
/// /login                                   POST   token for an account
///
/// /pvz                                     POST   create, GET list
/// /pvz/{pvz_id}/close_last_reception       POST   close active reception
/// /pvz/{pvz_id}/delete_last_product        POST   remove newest product
///
/// /receptions                              POST   open reception
/// /products                                POST   add product
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/pvz", pvz::router())
        .nest("/receptions", receptions::router())
        .nest("/products", products::router())
}
