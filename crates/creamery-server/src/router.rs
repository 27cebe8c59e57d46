//! Axum router wiring.
//!
//! Two routers share one `AppState`: the catalog API (every request counted
//! by the usage middleware) and the metrics listener (not counted).

use axum::{
    middleware,
    routing::{delete, get, put},
    Router,
};

use crate::{api, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(api::list_flavors)
                .post(api::create_flavor)
                .fallback(api::method_not_allowed),
        )
        .route("/flavors", get(api::query_flavors).fallback(api::method_not_allowed))
        .route("/flavors/", get(api::query_flavors).fallback(api::method_not_allowed))
        .route("/flavors/:id", get(api::get_flavor).fallback(api::method_not_allowed))
        .route("/update/:id", put(api::update_flavor).fallback(api::method_not_allowed))
        .route("/delete/:id", delete(api::delete_flavor).fallback(api::method_not_allowed))
        .fallback(api::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::track_endpoint_usage,
        ))
        .with_state(state)
}

pub fn build_metrics_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops::metrics))
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
