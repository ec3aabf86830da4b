use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use worklog_core::{TimeLog, WorklogQuery};

use super::{error_response, rejection_response, ApiResult};
use crate::state::ApiState;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WorklogParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorklogEntry {
    #[serde(flatten)]
    pub log: TimeLog,
    pub duration_seconds: i64,
}

impl From<TimeLog> for WorklogEntry {
    fn from(log: TimeLog) -> Self {
        Self {
            duration_seconds: log.duration().num_seconds(),
            log,
        }
    }
}

/// Worklogs of a user, longest first
pub async fn get_user_worklogs(
    State(state): State<ApiState>,
    id: Result<Path<i64>, PathRejection>,
    params: Result<Query<WorklogParams>, QueryRejection>,
) -> ApiResult<Vec<WorklogEntry>> {
    let Path(user_id) = id.map_err(rejection_response)?;
    let Query(params) = params.map_err(rejection_response)?;
    tracing::info!("Fetching worklogs for user {}", user_id);

    let query = WorklogQuery::from_raw(user_id, params.start.as_deref(), params.end.as_deref());

    let logs = state
        .tracker
        .get_worklogs(&query)
        .await
        .map_err(error_response)?;

    Ok(Json(logs.into_iter().map(WorklogEntry::from).collect()))
}
