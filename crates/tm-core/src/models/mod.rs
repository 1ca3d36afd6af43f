pub mod close_reason;
pub mod draft;
pub mod draft_field;
pub mod lane_spec;
pub mod new_task;
pub mod notification;
pub mod severity;
pub mod status;
pub mod status_command;
pub mod task;
