use tm_config::{BoardConfig, LoadOrder, StatusUpdatePolicy};
use tm_core::Severity;

/// Behaviour choices the board is constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPolicy {
    pub load_order: LoadOrder,
    pub status_update: StatusUpdatePolicy,
    pub notify_on_load_failure: bool,
    pub notify_on_write_failure: bool,
    pub delete_severity: Severity,
}

impl Default for BoardPolicy {
    fn default() -> Self {
        Self::from(&BoardConfig::default())
    }
}

impl From<&BoardConfig> for BoardPolicy {
    fn from(config: &BoardConfig) -> Self {
        Self {
            load_order: config.load_order,
            status_update: config.status_update,
            notify_on_load_failure: config.notify_on_load_failure,
            notify_on_write_failure: config.notify_on_write_failure,
            delete_severity: config.delete_severity,
        }
    }
}
