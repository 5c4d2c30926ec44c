// ============================================================================
// Realty API - Property Handlers
// File: crates/realty-api/src/handlers/properties.rs
// ============================================================================
//! Resourceful handlers for `/properties`

use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::auth::AuthUser;
use crate::dto::{CreatePropertyRequest, MessageDto, NearByQuery, PropertyDto, UpdatePropertyRequest};
use crate::error::ApiError;
use crate::messages::{self, Operation};
use crate::response::ApiResponse;
use crate::state::AppState;

use super::parse_id;

/// GET /properties?latitude=&longitude=
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<NearByQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<PropertyDto>>>, ApiError> {
    let op = Operation::PropertyList;
    let Query(query) = query.map_err(|e| ApiError::InvalidRequest {
        operation: op,
        reason: e.body_text(),
    })?;

    let properties = state
        .property_service
        .list(query.latitude, query.longitude)
        .await
        .map_err(ApiError::on(op))?;

    let data = properties
        .into_iter()
        .map(|details| PropertyDto::with_images(details, &state.public_url))
        .collect();

    Ok(Json(ApiResponse::success(data)))
}

/// POST /properties
pub async fn store(
    State(state): State<AppState>,
    actor: AuthUser,
    payload: Result<Json<CreatePropertyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<PropertyDto>>), ApiError> {
    let op = Operation::PropertyCreate;
    let Json(payload) = payload.map_err(|e| ApiError::InvalidRequest {
        operation: op,
        reason: e.body_text(),
    })?;

    let property = state
        .property_service
        .create(actor.id, payload.into())
        .await
        .map_err(ApiError::on(op))?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(property.into()))))
}

/// GET /properties/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PropertyDto>>, ApiError> {
    let op = Operation::PropertyShow;
    let id = parse_id(op, &id)?;

    let details = state.property_service.get(&id).await.map_err(ApiError::on(op))?;

    Ok(Json(ApiResponse::success(PropertyDto::with_images(details, &state.public_url))))
}

/// PUT|PATCH /properties/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePropertyRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<PropertyDto>>, ApiError> {
    let op = Operation::PropertyUpdate;
    let id = parse_id(op, &id)?;
    let Json(payload) = payload.map_err(|e| ApiError::InvalidRequest {
        operation: op,
        reason: e.body_text(),
    })?;

    let property = state
        .property_service
        .update(&id, payload.into())
        .await
        .map_err(ApiError::on(op))?;

    Ok(Json(ApiResponse::success(property.into())))
}

/// DELETE /properties/{id}
pub async fn destroy(
    State(state): State<AppState>,
    actor: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageDto>>, ApiError> {
    let op = Operation::PropertyDelete;
    let id = parse_id(op, &id)?;

    state
        .property_service
        .delete(actor.id, &id)
        .await
        .map_err(ApiError::on(op))?;

    info!("Property {} removed via API", id);
    Ok(Json(ApiResponse::success(MessageDto::new(messages::PROPERTY_DELETED))))
}
