use crate::Status;

use serde::Serialize;

/// Display configuration of one lane. Every lane is rendered from one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneSpec {
    pub label: &'static str,
    pub status: Status,
    /// Accent used for the lane's "Add" button when selected
    pub color: &'static str,
    pub bg_color: &'static str,
}

/// Lanes in display order
pub const LANES: [LaneSpec; 4] = [
    LaneSpec {
        label: "Not started",
        status: Status::Pending,
        color: "#616161",
        bg_color: "rgba(60,60,60,0.5)",
    },
    LaneSpec {
        label: "In Progress",
        status: Status::Progress,
        color: "#1976d2",
        bg_color: "#101d24",
    },
    LaneSpec {
        label: "Done",
        status: Status::Done,
        color: "#388e3c",
        bg_color: "#102415",
    },
    LaneSpec {
        label: "Archived",
        status: Status::Archived,
        color: "#f57f17",
        bg_color: "#242110",
    },
];

impl LaneSpec {
    pub fn for_status(status: Status) -> &'static LaneSpec {
        match status {
            Status::Pending => &LANES[0],
            Status::Progress => &LANES[1],
            Status::Done => &LANES[2],
            Status::Archived => &LANES[3],
        }
    }
}
