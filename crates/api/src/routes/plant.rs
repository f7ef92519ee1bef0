//! Route definitions for plants and their photos.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::plant;
use crate::state::AppState;

/// Routes mounted at `/plants`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// POST   /{id}/image       -> upload_image
/// GET    /{id}/image       -> get_image
/// ```
///
/// Photo uploads have no size limit, so axum's default body limit is
/// disabled on the image route only.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(plant::list).post(plant::create))
        .route(
            "/{id}",
            get(plant::get_by_id)
                .put(plant::update)
                .delete(plant::delete),
        )
        .route(
            "/{id}/image",
            get(plant::get_image)
                .post(plant::upload_image)
                .layer(DefaultBodyLimit::disable()),
        )
}
