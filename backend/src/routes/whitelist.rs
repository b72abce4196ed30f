use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    error::ApiResult,
    models::{AddEntryRequest, EntryDetail, ListQuery},
    utils, AppState,
};

/// Add an address to the whitelist
pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<AddEntryRequest>,
) -> ApiResult<impl IntoResponse> {
    let entry = state.whitelist.add(req).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// List whitelist entries, optionally filtered by `?search=`
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<impl IntoResponse> {
    let entries = state.whitelist.list(query.search.as_deref()).await;
    Ok(Json(entries))
}

/// Summary counts for the dashboard cards
pub async fn stats(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.whitelist.stats().await))
}

/// Fetch a single entry with its explorer link
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let entry = state.whitelist.get(id).await?;
    let explorer_url = utils::explorer_url(&state.config.cluster, &entry.address);

    Ok(Json(EntryDetail {
        entry,
        explorer_url,
    }))
}

/// Remove an entry from the whitelist
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    state.whitelist.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
