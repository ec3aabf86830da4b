use crate::{
    Clock, Result, SystemClock, TimeLog, TimeLogStore, TimerService, User, UserStore,
    WorklogQuery, WorklogQueryService,
};
use std::sync::Arc;

/// Entry point for every transport: owns both stores and the services
/// built on top of them.
#[derive(Clone)]
pub struct TimeTracker {
    pub users: Arc<UserStore>,
    pub time_logs: Arc<TimeLogStore>,
    pub timers: TimerService,
    pub worklogs: WorklogQueryService,
}

impl TimeTracker {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let users = Arc::new(UserStore::new());
        let time_logs = Arc::new(TimeLogStore::new());

        Self {
            timers: TimerService::new(time_logs.clone(), clock),
            worklogs: WorklogQueryService::new(time_logs.clone()),
            users,
            time_logs,
        }
    }

    pub async fn list_users(
        &self,
        passport_number: Option<&str>,
        skip: usize,
        limit: usize,
    ) -> Vec<User> {
        tracing::debug!(
            "Listing users (passport: {:?}, skip: {}, limit: {})",
            passport_number,
            skip,
            limit
        );
        self.users.list(passport_number, skip, limit).await
    }

    pub async fn get_user(&self, id: i64) -> Result<User> {
        self.users.get(id).await
    }

    pub async fn create_user(&self, passport_number: String) -> User {
        self.users.create(passport_number).await
    }

    pub async fn update_user(&self, id: i64, passport_number: String) -> Result<User> {
        self.users.update(id, passport_number).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<()> {
        self.users.delete(id).await
    }

    pub async fn start_timer(&self, user_id: i64, task_id: i64) -> TimeLog {
        self.timers.start(user_id, task_id).await
    }

    pub async fn stop_timer(&self, user_id: i64, task_id: i64) -> Result<TimeLog> {
        self.timers.stop(user_id, task_id).await
    }

    pub async fn get_worklogs(&self, query: &WorklogQuery) -> Result<Vec<TimeLog>> {
        self.worklogs.get_worklogs(query).await
    }

    /// Get tracker statistics
    pub async fn statistics(&self) -> TrackerStatistics {
        let total_users = self.users.len().await;
        let (total_time_logs, open_time_logs) = self.time_logs.counts().await;

        TrackerStatistics {
            total_users,
            total_time_logs,
            open_time_logs,
            closed_time_logs: total_time_logs - open_time_logs,
        }
    }
}

impl Default for TimeTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrackerStatistics {
    pub total_users: usize,
    pub total_time_logs: usize,
    pub open_time_logs: usize,
    pub closed_time_logs: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualClock;
    use chrono::{Duration, TimeZone, Utc};

    #[tokio::test]
    async fn test_tracker_creation() {
        let tracker = TimeTracker::new();
        let stats = tracker.statistics().await;
        assert_eq!(stats.total_users, 0);
        assert_eq!(stats.total_time_logs, 0);
    }

    #[tokio::test]
    async fn test_statistics() {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        ));
        let tracker = TimeTracker::with_clock(clock.clone());

        tracker.create_user("a".to_string()).await;
        tracker.create_user("b".to_string()).await;
        tracker.start_timer(1, 1).await;
        tracker.start_timer(1, 2).await;
        clock.advance(Duration::minutes(5));
        tracker.stop_timer(1, 1).await.unwrap();

        let stats = tracker.statistics().await;
        assert_eq!(
            stats,
            TrackerStatistics {
                total_users: 2,
                total_time_logs: 2,
                open_time_logs: 1,
                closed_time_logs: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_timers_share_store_with_worklogs() {
        let tracker = TimeTracker::new();
        tracker.start_timer(4, 2).await;

        let logs = tracker.get_worklogs(&WorklogQuery::for_user(4)).await.unwrap();
        assert_eq!(logs.len(), 1);
        assert!(logs[0].is_open());
    }
}
