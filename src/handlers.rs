//! Item CRUD handlers: list, get-one, create, partial-update, delete.

use crate::error::AppError;
use crate::model::{ItemPatch, NewItem};
use crate::query::ListQuery;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

fn parse_id(id_str: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id_str).map_err(|_| AppError::BadRequest(format!("invalid id: '{}'", id_str)))
}

/// Acknowledgement body for update and delete.
#[derive(Serialize)]
pub struct Ack {
    pub status: &'static str,
}

const SUCCESS: Ack = Ack { status: "success" };

pub async fn welcome() -> &'static str {
    "Welcome to the item service"
}

/// GET /api/items?page=&sortBy=&sortOrder=&category=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let query = ListQuery::from_params(&params)?;
    let items = state.store.list(&query).await?;
    Ok((StatusCode::OK, Json(items)))
}

/// GET /api/items/:id
pub async fn get_one(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let item = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    Ok((StatusCode::OK, Json(item)))
}

/// POST /api/items
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewItem>,
) -> Result<impl IntoResponse, AppError> {
    let item = body.into_item(Utc::now())?;
    let created = state.store.insert(item).await?;
    tracing::info!(id = %created.id, "item created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/items/:id
///
/// Fields present and non-empty in the body overwrite the stored document;
/// everything else keeps its value. A body with no usable field is rejected.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(patch): Json<ItemPatch>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut item = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    if patch.is_empty() {
        return Err(AppError::BadRequest("no updatable field supplied".into()));
    }
    patch.apply_to(&mut item);
    state.store.update(&item).await?;
    Ok((StatusCode::OK, Json(SUCCESS)))
}

/// DELETE /api/items/:id
///
/// No existence check: deleting an id that is already gone is a successful
/// no-op.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.store.delete(id).await?;
    tracing::info!(id = %id, "item deleted");
    Ok((StatusCode::OK, Json(SUCCESS)))
}
