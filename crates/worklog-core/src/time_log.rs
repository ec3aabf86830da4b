use crate::{Error, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// One work interval of a user on a task. Open while `end_time` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLog {
    pub id: i64,
    pub user_id: i64,
    pub task_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

impl TimeLog {
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Time spent on the interval. Open intervals count as zero.
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end - self.start_time,
            None => Duration::zero(),
        }
    }

    fn close(&mut self, at: DateTime<Utc>) {
        // end_time must never precede start_time
        self.end_time = Some(at.max(self.start_time));
    }
}

#[derive(Debug, Default)]
struct TimeLogTable {
    logs: Vec<TimeLog>,
    last_id: i64,
}

/// Append-only store of time logs. The only mutation after insert is
/// closing an open log.
#[derive(Debug, Default)]
pub struct TimeLogStore {
    inner: RwLock<TimeLogTable>,
}

impl TimeLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new open log.
    pub async fn open(&self, user_id: i64, task_id: i64, start_time: DateTime<Utc>) -> TimeLog {
        let mut table = self.inner.write().await;
        table.last_id += 1;

        let log = TimeLog {
            id: table.last_id,
            user_id,
            task_id,
            start_time,
            end_time: None,
        };
        table.logs.push(log.clone());
        log
    }

    /// Close the earliest open log for the pair.
    pub async fn close_first_open(
        &self,
        user_id: i64,
        task_id: i64,
        end_time: DateTime<Utc>,
    ) -> Result<TimeLog> {
        let mut table = self.inner.write().await;

        let log = table
            .logs
            .iter_mut()
            .find(|log| log.user_id == user_id && log.task_id == task_id && log.is_open())
            .ok_or_else(|| Error::not_found("Active time log not found"))?;
        log.close(end_time);

        Ok(log.clone())
    }

    /// Snapshot of the logs accepted by `predicate`, in insertion order.
    pub async fn select<F>(&self, predicate: F) -> Vec<TimeLog>
    where
        F: Fn(&TimeLog) -> bool,
    {
        let table = self.inner.read().await;
        table.logs.iter().filter(|log| predicate(*log)).cloned().collect()
    }

    /// Returns `(total, open)` counts.
    pub async fn counts(&self) -> (usize, usize) {
        let table = self.inner.read().await;
        let open = table.logs.iter().filter(|log| log.is_open()).count();
        (table.logs.len(), open)
    }
}
