use serde::Serialize;
use tm_core::{Draft, Notification, Status, Task};

/// Everything the presentation layer reads from the board.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub tasks: Vec<Task>,
    /// Lane whose create form is open
    pub selected_lane: Status,
    pub draft: Draft,
    pub notification: Notification,
    /// A create request is in flight
    pub saving: bool,
}
