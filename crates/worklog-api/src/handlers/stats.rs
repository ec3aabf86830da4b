use axum::{extract::State, Json};
use worklog_core::TrackerStatistics;

use crate::state::ApiState;

pub async fn get_statistics(State(state): State<ApiState>) -> Json<TrackerStatistics> {
    Json(state.tracker.statistics().await)
}
