use std::sync::Arc;

#[derive(Clone)]
pub struct ApiState {
    pub tracker: Arc<worklog_core::TimeTracker>,
}
