//! Route handlers and router assembly.

use std::path::Path as FsPath;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;
use ticklist_core::Error;

/// Build the application router.
///
/// API routes take priority; everything else falls back to static
/// files (the single-page UI and its assets) under `static_dir`.
pub fn router(state: AppState, static_dir: &FsPath) -> Router {
    Router::new()
        .route("/api/checklists", get(list_checklists))
        .route("/api/checklist/{name}", get(get_checklist).put(save_checklist))
        .route("/api/log-time", post(log_time))
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /api/checklists` — the checklist catalog, sorted by name.
async fn list_checklists(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let checklists = state.store.list()?;
    Ok(Json(json!({ "checklists": checklists })))
}

/// `GET /api/checklist/{name}` — one checklist document, as stored.
async fn get_checklist(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let checklist = state.store.get(&name)?;
    Ok(Json(json!({ "checklist": checklist })))
}

/// `PUT /api/checklist/{name}` — full-document overwrite.
async fn save_checklist(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let Some(document) = body.get("checklist") else {
        return Err(Error::invalid_request("No checklist data provided").into());
    };

    state.store.save(&name, document)?;
    Ok(Json(json!({ "success": true })))
}

/// `POST /api/log-time` — record one completion into the spreadsheet.
async fn log_time(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let checklist_name = body.get("checklist_name").and_then(Value::as_str);
    let time_seconds = body.get("time_seconds").and_then(Value::as_u64);
    let is_rushed = body.get("is_rushed").and_then(Value::as_bool).unwrap_or(false);

    let (Some(checklist_name), Some(time_seconds)) = (checklist_name, time_seconds) else {
        return Err(Error::invalid_request("Missing checklist_name or time_seconds").into());
    };

    let Some(service) = &state.log_service else {
        return Err(Error::invalid_request("Time logging is not configured").into());
    };

    let outcome = service.log(checklist_name, time_seconds, is_rushed).await?;
    Ok(Json(json!({
        "success": true,
        "message": outcome.message,
        "updated_cells": outcome.updated_cells,
    })))
}
