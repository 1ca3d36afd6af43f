use serde::Serialize;
use tm_core::{LaneSpec, Task};

/// One lane ready for display: its configuration, its tasks and whether
/// its create form is open.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaneView {
    pub spec: LaneSpec,
    pub selected: bool,
    pub tasks: Vec<Task>,
}

impl LaneView {
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Header text, e.g. `Not started (2)`
    pub fn title(&self) -> String {
        format!("{} ({})", self.spec.label, self.count())
    }
}
