use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use worklog_core::{
    parse_timestamp_lenient, Clock, Error, ManualClock, TimeTracker, WorklogQuery,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

fn tracker() -> (TimeTracker, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(t0()));
    (TimeTracker::with_clock(clock.clone()), clock)
}

#[tokio::test]
async fn test_start_stop_report_scenario() {
    let (tracker, clock) = tracker();

    let started = tracker.start_timer(1, 5).await;
    assert_eq!(started.id, 1);
    assert_eq!(started.user_id, 1);
    assert_eq!(started.task_id, 5);
    assert_eq!(started.start_time, t0());
    assert!(started.end_time.is_none());

    clock.advance(Duration::minutes(30));
    let t1 = clock.now();
    let stopped = tracker.stop_timer(1, 5).await.unwrap();
    assert_eq!(stopped.end_time, Some(t1));

    let worklogs = tracker.get_worklogs(&WorklogQuery::for_user(1)).await.unwrap();
    assert_eq!(worklogs.len(), 1);
    assert_eq!(worklogs[0].duration(), t1 - t0());
}

#[tokio::test]
async fn test_worklogs_for_unknown_user() {
    let (tracker, _) = tracker();
    tracker.start_timer(1, 1).await;

    let result = tracker.get_worklogs(&WorklogQuery::for_user(2)).await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_created_user_ids_are_unique() {
    let (tracker, _) = tracker();

    let mut seen = HashSet::new();
    for i in 0..10 {
        let user = tracker.create_user(format!("P{}", i)).await;
        assert!(seen.insert(user.id));
        if i % 3 == 0 {
            tracker.delete_user(user.id).await.unwrap();
        }
    }
    assert_eq!(seen.len(), 10);
}

#[tokio::test]
async fn test_third_user_gets_id_three() {
    let (tracker, _) = tracker();
    tracker.create_user("1111 111111".to_string()).await;
    tracker.create_user("2222 222222".to_string()).await;

    let user = tracker.create_user("AB123".to_string()).await;
    assert_eq!(user.id, 3);
}

#[tokio::test]
async fn test_delete_then_list() {
    let (tracker, _) = tracker();
    for p in ["a", "b", "c"] {
        tracker.create_user(p.to_string()).await;
    }

    tracker.delete_user(2).await.unwrap();
    let users = tracker.list_users(None, 0, 10).await;
    assert!(users.iter().all(|u| u.id != 2));

    let again = tracker.delete_user(2).await;
    assert!(matches!(again, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_update_then_get() {
    let (tracker, _) = tracker();
    let user = tracker.create_user("old".to_string()).await;

    tracker.update_user(user.id, "new".to_string()).await.unwrap();
    assert_eq!(tracker.get_user(user.id).await.unwrap().passport_number, "new");

    let missing = tracker.update_user(100, "x".to_string()).await;
    assert!(matches!(missing, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_overlapping_timers_are_allowed() {
    let (tracker, clock) = tracker();

    let first = tracker.start_timer(1, 5).await;
    clock.advance(Duration::minutes(10));
    let second = tracker.start_timer(1, 5).await;

    assert!(first.is_open());
    assert!(second.is_open());
    assert_ne!(first.id, second.id);

    clock.advance(Duration::minutes(10));
    assert_eq!(tracker.stop_timer(1, 5).await.unwrap().id, first.id);
    assert_eq!(tracker.stop_timer(1, 5).await.unwrap().id, second.id);
    assert!(matches!(
        tracker.stop_timer(1, 5).await,
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
async fn test_start_filter_excludes_earlier_logs() {
    let (tracker, clock) = tracker();

    // Day 1
    tracker.start_timer(1, 1).await;
    clock.advance(Duration::hours(2));
    tracker.stop_timer(1, 1).await.unwrap();

    // Day 2
    clock.set(Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap());
    tracker.start_timer(1, 2).await;
    clock.advance(Duration::hours(1));
    tracker.stop_timer(1, 2).await.unwrap();

    let query = WorklogQuery::for_user(1).since(parse_timestamp_lenient("2024-01-02T00:00:00Z"));
    let logs = tracker.get_worklogs(&query).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].task_id, 2);
}

#[tokio::test]
async fn test_concurrent_starts() {
    let (tracker, _) = tracker();

    let mut handles = Vec::new();
    for task in 0..20 {
        let tracker = tracker.clone();
        handles.push(tokio::spawn(async move { tracker.start_timer(1, task).await }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().id);
    }
    assert_eq!(ids.len(), 20);

    let stats = tracker.statistics().await;
    assert_eq!(stats.open_time_logs, 20);
}
