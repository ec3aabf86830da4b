pub mod clock;
pub mod engine;
pub mod error;
pub mod time_log;
pub mod timer;
pub mod user;
pub mod worklog;

// Re-exports
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{TimeTracker, TrackerStatistics};
pub use error::{Error, Result};
pub use time_log::{TimeLog, TimeLogStore};
pub use timer::TimerService;
pub use user::{User, UserStore};
pub use worklog::{parse_timestamp_lenient, WorklogQuery, WorklogQueryService};
