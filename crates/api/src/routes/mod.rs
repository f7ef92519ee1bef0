pub mod health;
pub mod plant;

use axum::Router;

use crate::state::AppState;

/// Prefix under which [`api_routes`] is mounted.
pub const API_PREFIX: &str = "/api";

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /plants                 list, create
/// /plants/{id}            get, update (full replace), soft delete
/// /plants/{id}/image      upload (multipart `image`), fetch raw bytes
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/plants", plant::router())
}
