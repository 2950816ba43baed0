//! Route definitions for the `/movies` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// POST   /batch   -> create_batch
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list).post(movie::create))
        .route("/batch", post(movie::create_batch))
        .route(
            "/{id}",
            get(movie::get_by_id)
                .put(movie::update)
                .delete(movie::delete),
        )
}
