//! Resourceful handlers for `/users`

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::dto::{CreateUserRequest, MessageDto, UpdateUserRequest, UserDto};
use crate::error::ApiError;
use crate::messages::{self, Operation};
use crate::response::ApiResponse;
use crate::state::AppState;

use super::parse_id;

/// GET /users
pub async fn index(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<UserDto>>>, ApiError> {
    let users = state
        .user_service
        .list()
        .await
        .map_err(ApiError::on(Operation::UserList))?;

    Ok(Json(ApiResponse::success(users.into_iter().map(UserDto::from).collect())))
}

/// POST /users
pub async fn store(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), ApiError> {
    let op = Operation::UserCreate;
    let Json(payload) = payload.map_err(|e| ApiError::InvalidRequest {
        operation: op,
        reason: e.body_text(),
    })?;

    let user = state
        .user_service
        .create(payload.into())
        .await
        .map_err(ApiError::on(op))?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(user.into()))))
}

/// GET /users/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let op = Operation::UserShow;
    let id = parse_id(op, &id)?;

    let user = state.user_service.get(&id).await.map_err(ApiError::on(op))?;

    Ok(Json(ApiResponse::success(user.into())))
}

/// PUT|PATCH /users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let op = Operation::UserUpdate;
    let id = parse_id(op, &id)?;
    let Json(payload) = payload.map_err(|e| ApiError::InvalidRequest {
        operation: op,
        reason: e.body_text(),
    })?;

    let user = state
        .user_service
        .update(&id, payload.into())
        .await
        .map_err(ApiError::on(op))?;

    Ok(Json(ApiResponse::success(user.into())))
}

/// DELETE /users/{id}
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageDto>>, ApiError> {
    let op = Operation::UserDelete;
    let id = parse_id(op, &id)?;

    state.user_service.delete(&id).await.map_err(ApiError::on(op))?;

    Ok(Json(ApiResponse::success(MessageDto::new(messages::USER_DELETED))))
}
