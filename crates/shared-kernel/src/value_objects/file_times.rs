// crates/shared-kernel/src/value_objects/file_times.rs
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The four filesystem timestamps of an entry.
///
/// `changed` (inode status change) and `created` (birth) depend on platform
/// and filesystem support; `None` there is an expected state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTimes {
    pub modified: Option<DateTime<Local>>,
    pub accessed: Option<DateTime<Local>>,
    pub changed: Option<DateTime<Local>>,
    pub created: Option<DateTime<Local>>,
}

impl FileTimes {
    pub fn is_empty(&self) -> bool {
        self.modified.is_none() && self.accessed.is_none() && self.changed.is_none() && self.created.is_none()
    }

    /// Most recent of the known timestamps.
    pub fn latest(&self) -> Option<DateTime<Local>> {
        [self.modified, self.accessed, self.changed, self.created].into_iter().flatten().max()
    }
}
