use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    services::ServeDir,
    trace::{DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::debug_span;

use crate::{
    components,
    data::AppState,
    routes::{courses, health, root},
};

pub fn make_app(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .nest_service("/assets", ServeDir::new(&state.assets))
        // `GET /` goes to `root`
        .route("/", get(root::get))
        .route("/courses/:phase", get(courses::get))
        .route("/health", get(health::get))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(middleware::from_fn_with_state(state.clone(), not_found))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    debug_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_response(DefaultOnResponse::new().latency_unit(LatencyUnit::Micros)),
        )
}

/// Renders 404s from pages (unknown routes, bad phases) inside the site layout.
async fn not_found(State(state): State<Arc<AppState>>, req: Request, next: Next) -> Response {
    let is_asset = req.uri().path().starts_with("/assets/");
    let res = next.run(req).await;
    if res.status() == StatusCode::NOT_FOUND && !is_asset {
        return (StatusCode::NOT_FOUND, components::not_found(&state.site)).into_response();
    }

    res
}
