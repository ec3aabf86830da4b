use crate::{Error, Result, TimeLog, TimeLogStore};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Parse an RFC 3339 timestamp, falling back to the Unix epoch when the
/// input is malformed. Callers rely on the fallback rather than an error:
/// a bad `start` keeps every log, a bad `end` drops every closed log.
pub fn parse_timestamp_lenient(input: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(input) {
        Ok(parsed) => parsed.with_timezone(&Utc),
        Err(e) => {
            tracing::warn!("Unparseable timestamp {:?} ({}), using epoch", input, e);
            DateTime::<Utc>::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorklogQuery {
    pub user_id: i64,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl WorklogQuery {
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }

    pub fn since(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn until(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    /// Build a query from raw wire strings. Empty strings count as absent.
    pub fn from_raw(user_id: i64, start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            user_id,
            start: parse_bound(start),
            end: parse_bound(end),
        }
    }

    pub fn matches(&self, log: &TimeLog) -> bool {
        if log.user_id != self.user_id {
            return false;
        }
        if let Some(start) = self.start {
            if log.start_time < start {
                return false;
            }
        }
        // Open logs are never excluded by the end bound.
        if let (Some(end), Some(log_end)) = (self.end, log.end_time) {
            if log_end > end {
                return false;
            }
        }
        true
    }
}

fn parse_bound(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.filter(|s| !s.is_empty()).map(parse_timestamp_lenient)
}

/// Read side over the time log store.
#[derive(Clone)]
pub struct WorklogQueryService {
    logs: Arc<TimeLogStore>,
}

impl WorklogQueryService {
    pub fn new(logs: Arc<TimeLogStore>) -> Self {
        Self { logs }
    }

    /// Logs matching `query`, longest first. Ties keep insertion order.
    pub async fn get_worklogs(&self, query: &WorklogQuery) -> Result<Vec<TimeLog>> {
        let mut logs = self.logs.select(|log| query.matches(log)).await;

        if logs.is_empty() {
            return Err(Error::not_found("No worklogs found"));
        }

        logs.sort_by(|a, b| b.duration().cmp(&a.duration()));

        tracing::debug!(
            "Found {} worklogs for user {}",
            logs.len(),
            query.user_id
        );

        Ok(logs)
    }
}
