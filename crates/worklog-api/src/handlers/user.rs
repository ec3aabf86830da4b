use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use worklog_core::User;

use super::{error_response, rejection_response, ApiResult, MessageResponse};
use crate::state::ApiState;

const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersParams {
    pub passport_number: Option<String>,
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub passport_number: String,
}

/// List users with optional passport filter and pagination
pub async fn list_users(
    State(state): State<ApiState>,
    params: Result<Query<ListUsersParams>, QueryRejection>,
) -> ApiResult<Vec<User>> {
    let Query(params) = params.map_err(rejection_response)?;
    tracing::info!("Fetching users");

    // An empty filter means no filter.
    let passport = params.passport_number.as_deref().filter(|p| !p.is_empty());

    let users = state
        .tracker
        .list_users(
            passport,
            params.skip.unwrap_or(0),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
        .await;

    Ok(Json(users))
}

pub async fn create_user(
    State(state): State<ApiState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> ApiResult<User> {
    let Json(payload) = payload.map_err(rejection_response)?;
    tracing::info!("Creating new user");

    let user = state.tracker.create_user(payload.passport_number).await;
    Ok(Json(user))
}

pub async fn update_user(
    State(state): State<ApiState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> ApiResult<User> {
    let Path(id) = id.map_err(rejection_response)?;
    let Json(payload) = payload.map_err(rejection_response)?;
    tracing::info!("Updating user {}", id);

    state
        .tracker
        .update_user(id, payload.passport_number)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn delete_user(
    State(state): State<ApiState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<MessageResponse> {
    let Path(id) = id.map_err(rejection_response)?;
    tracing::info!("Deleting user {}", id);

    state.tracker.delete_user(id).await.map_err(error_response)?;

    Ok(Json(MessageResponse {
        message: "User deleted".to_string(),
    }))
}
