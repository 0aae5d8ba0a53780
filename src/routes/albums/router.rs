use crate::api_state::ApiContext;
use crate::routes::albums::handlers::{remove_photo_handler, upload_photos_handler};
use axum::Router;
use axum::routing::{delete, post};

pub fn albums_protected_router() -> Router<ApiContext> {
    Router::new()
        .route("/api/albums/{album_id}/upload", post(upload_photos_handler))
        .route(
            "/api/albums/{album_id}/photos/{photo_id}",
            delete(remove_photo_handler),
        )
}
