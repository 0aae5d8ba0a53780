pub mod albums;
pub mod auth;
pub mod root;

use crate::api_state::ApiContext;
use crate::routes::albums::router::albums_protected_router;
use crate::routes::auth::interfaces::Principal;
use crate::routes::root::router::root_public_router;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_extractor_with_state;
use tower_http::LatencyUnit;
use tower_http::trace::TraceLayer;

pub fn create_router(context: ApiContext) -> Router {
    Router::new()
        .merge(root_public_router())
        .merge(protected_routes(context.clone()))
        .layer(DefaultBodyLimit::max(context.settings.api.max_request_bytes))
        .layer(
            TraceLayer::new_for_http().on_response(
                tower_http::trace::DefaultOnResponse::new()
                    .level(tracing::Level::INFO)
                    .latency_unit(LatencyUnit::Micros),
            ),
        )
        .with_state(context)
}

fn protected_routes(context: ApiContext) -> Router<ApiContext> {
    Router::new()
        .merge(albums_protected_router())
        .route_layer(from_extractor_with_state::<Principal, ApiContext>(context))
}
