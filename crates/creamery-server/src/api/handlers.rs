use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use creamery_core::{FlavorQuery, FlavorRecord, FlavorUpdate};

use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::api::responses::{Added, Deleted, Listing, Selection, Updated};
use crate::app_state::AppState;
use crate::error::{AppError, Result};

/// `GET /`
pub async fn list_flavors(State(state): State<AppState>) -> Response {
    let catalog = state.catalog().read().await;
    tracing::debug!(flavors = catalog.len(), "list flavors");
    let response = Json(Listing {
        flavors: catalog.all(),
    })
    .into_response();
    response
}

/// `GET /flavors/{id}`
pub async fn get_flavor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<FlavorRecord>> {
    let catalog = state.catalog().read().await;
    let flavor = catalog.get(id)?.clone();
    tracing::debug!(id, "get flavor");
    Ok(Json(flavor))
}

/// `GET /flavors/?flavorName=&flavorDesc=&flavorPrice=&flavorQuantity=&flavorID=`
pub async fn query_flavors(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FlavorQuery>,
) -> Json<Selection> {
    let selection = state.catalog().read().await.select(&query);
    tracing::debug!(?query, matched = selection.len(), "query flavors");
    Json(Selection { query, selection })
}

/// `POST /`
pub async fn create_flavor(
    State(state): State<AppState>,
    ApiJson(flavor): ApiJson<FlavorRecord>,
) -> Result<Json<Added>> {
    let added = state.catalog().write().await.create(flavor)?;
    tracing::info!(id = added.id, name = %added.name, "flavor added");
    Ok(Json(Added { added }))
}

/// `PUT /update/{id}?flavorName=&flavorDesc=&flavorPrice=&flavorQuantity=`
pub async fn update_flavor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(update): ApiQuery<FlavorUpdate>,
) -> Result<Json<Updated>> {
    let updated = state.catalog().write().await.update(id, update)?;
    tracing::info!(id, "flavor updated");
    Ok(Json(Updated { updated }))
}

/// `DELETE /delete/{id}`
pub async fn delete_flavor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Deleted>> {
    let deleted = state.catalog().write().await.delete(id)?;
    tracing::info!(id, name = %deleted.name, "flavor deleted");
    Ok(Json(Deleted { deleted }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
