use crate::{Clock, Result, TimeLog, TimeLogStore};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Start/stop lifecycle of (user, task) timers.
///
/// Starting never checks for an already running timer on the same pair:
/// every start opens a new log, and stop closes them oldest first.
#[derive(Clone)]
pub struct TimerService {
    logs: Arc<TimeLogStore>,
    clock: Arc<dyn Clock>,
}

impl TimerService {
    pub fn new(logs: Arc<TimeLogStore>, clock: Arc<dyn Clock>) -> Self {
        Self { logs, clock }
    }

    /// Start a timer now.
    pub async fn start(&self, user_id: i64, task_id: i64) -> TimeLog {
        self.start_at(user_id, task_id, self.clock.now()).await
    }

    pub async fn start_at(&self, user_id: i64, task_id: i64, now: DateTime<Utc>) -> TimeLog {
        let log = self.logs.open(user_id, task_id, now).await;
        tracing::info!(
            "Started timer {} for user {} on task {}",
            log.id,
            user_id,
            task_id
        );
        log
    }

    /// Stop the oldest running timer for the pair now.
    pub async fn stop(&self, user_id: i64, task_id: i64) -> Result<TimeLog> {
        self.stop_at(user_id, task_id, self.clock.now()).await
    }

    pub async fn stop_at(&self, user_id: i64, task_id: i64, now: DateTime<Utc>) -> Result<TimeLog> {
        let log = self.logs.close_first_open(user_id, task_id, now).await?;
        tracing::info!(
            "Stopped timer {} for user {} on task {} after {}s",
            log.id,
            user_id,
            task_id,
            log.duration().num_seconds()
        );
        Ok(log)
    }
}
