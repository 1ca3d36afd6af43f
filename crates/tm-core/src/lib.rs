pub mod dates;
pub mod error;
pub mod models;
pub mod ordering;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::close_reason::CloseReason;
pub use models::draft::Draft;
pub use models::draft_field::DraftField;
pub use models::lane_spec::{LANES, LaneSpec};
pub use models::new_task::NewTask;
pub use models::notification::Notification;
pub use models::severity::Severity;
pub use models::status::Status;
pub use models::status_command::StatusCommand;
pub use models::task::Task;
pub use ordering::{sort_by_updated_desc, tasks_in_lane};

/// Display format used for task start/end dates on cards.
pub const CARD_DATE_FORMAT: &str = "%B %d, %Y";
