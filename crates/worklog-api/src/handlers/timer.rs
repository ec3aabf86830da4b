use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use worklog_core::TimeLog;

use super::{error_response, rejection_response, ApiResult};
use crate::state::ApiState;

/// Start a timer for a user on a task
pub async fn start_task(
    State(state): State<ApiState>,
    ids: Result<Path<(i64, i64)>, PathRejection>,
) -> ApiResult<TimeLog> {
    let Path((user_id, task_id)) = ids.map_err(rejection_response)?;
    tracing::info!("Starting task {} for user {}", task_id, user_id);

    Ok(Json(state.tracker.start_timer(user_id, task_id).await))
}

/// Stop the running timer for a user on a task
pub async fn stop_task(
    State(state): State<ApiState>,
    ids: Result<Path<(i64, i64)>, PathRejection>,
) -> ApiResult<TimeLog> {
    let Path((user_id, task_id)) = ids.map_err(rejection_response)?;
    tracing::info!("Stopping task {} for user {}", task_id, user_id);

    state
        .tracker
        .stop_timer(user_id, task_id)
        .await
        .map(Json)
        .map_err(error_response)
}
