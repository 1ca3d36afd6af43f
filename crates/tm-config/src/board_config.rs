use crate::{
    DEFAULT_NOTIFY_ON_LOAD_FAILURE, DEFAULT_NOTIFY_ON_WRITE_FAILURE, LoadOrder,
    StatusUpdatePolicy,
};

use serde::Deserialize;
use tm_core::Severity;

/// Behaviour switches for the task board.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub load_order: LoadOrder,
    pub status_update: StatusUpdatePolicy,
    /// Show a notification when the initial load fails or returns no data
    pub notify_on_load_failure: bool,
    /// Show a notification when a create or status update fails
    pub notify_on_write_failure: bool,
    /// Severity of the "Task successfully deleted." notification
    pub delete_severity: Severity,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            load_order: LoadOrder::default(),
            status_update: StatusUpdatePolicy::default(),
            notify_on_load_failure: DEFAULT_NOTIFY_ON_LOAD_FAILURE,
            notify_on_write_failure: DEFAULT_NOTIFY_ON_WRITE_FAILURE,
            delete_severity: Severity::Error,
        }
    }
}
